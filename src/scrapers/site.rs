//! Site configuration and the domain gate.
//!
//! Every URL handed to the scraper goes through [`validate_url`] before a
//! request is built. Relative URLs are resolved against the base origin; the
//! result must live on the allowed domain or one of its subdomains.

use crate::error::{Result, ScrapeError};
use std::time::Duration;
use url::Url;

pub const BASE_URL: &str = "https://theobjective.com";
pub const ALLOWED_DOMAIN: &str = "theobjective.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Article used when no URL is given on the command line.
pub const SAMPLE_ARTICLE_URL: &str =
    "https://theobjective.com/economia/energia/2025-07-13/cnmc-directiva-apagon/";
pub const SAMPLE_SECTION_URL: &str = "https://theobjective.com/economia/";
/// A foreign URL the demo uses to show the domain gate.
pub const FOREIGN_SAMPLE_URL: &str = "https://elpais.com/economia/2024/01/01/ejemplo/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin relative URLs are resolved against.
    pub base_url: String,
    /// Hosts must equal this or end with `.` followed by it.
    pub allowed_domain: String,
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    /// Applied to the HTTP client only; `None` means no timeout.
    pub timeout: Option<Duration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            allowed_domain: ALLOWED_DOMAIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Resolve `candidate` against `base` and check its host against `allowed_domain`.
///
/// Anything that does not parse as an absolute URL is treated as relative
/// (`/economia/`, `economia/x`). Absolute URLs are kept as they are.
///
/// # Errors
///
/// - [`ScrapeError::InvalidUrl`] if the candidate cannot be resolved at all
/// - [`ScrapeError::DomainRejected`] if the host is neither `allowed_domain`
///   nor a subdomain of it (`nottheobjective.com` is rejected)
pub fn validate_url(candidate: &str, base: &Url, allowed_domain: &str) -> Result<Url> {
    let resolved = match Url::parse(candidate) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base.join(candidate),
        Err(e) => Err(e),
    }
    .map_err(|source| ScrapeError::InvalidUrl {
        url: candidate.to_string(),
        source,
    })?;

    if !host_allowed(resolved.host_str(), allowed_domain) {
        return Err(ScrapeError::DomainRejected {
            url: resolved.to_string(),
            allowed_domain: allowed_domain.to_string(),
        });
    }

    Ok(resolved)
}

fn host_allowed(host: Option<&str>, allowed_domain: &str) -> bool {
    let Some(host) = host else {
        return false;
    };
    host == allowed_domain
        || host
            .strip_suffix(allowed_domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
