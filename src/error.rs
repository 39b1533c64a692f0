//! Error types for the scraper.
//!
//! [`ScrapeError`] is what crosses the public boundary: validation failures
//! ([`ScrapeError::DomainRejected`], [`ScrapeError::InvalidUrl`]) are raised
//! before any request goes out, transport failures come back as
//! [`ScrapeError::Fetch`]. Field-level problems are [`RuleError`]s and never
//! leave the extractor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("URL not allowed: it must belong to the domain {allowed_domain}. Received URL: {url}")]
    DomainRejected { url: String, allowed_domain: String },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScrapeError {
    /// `true` for errors raised by URL validation, i.e. before any network access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScrapeError::DomainRejected { .. } | ScrapeError::InvalidUrl { .. }
        )
    }
}

/// Failure of a single extraction rule. Contained per field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_rejected_message_names_url_and_domain() {
        let err = ScrapeError::DomainRejected {
            url: "https://elpais.com/x".to_string(),
            allowed_domain: "theobjective.com".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://elpais.com/x"));
        assert!(msg.contains("theobjective.com"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_url_is_validation() {
        let err = ScrapeError::InvalidUrl {
            url: "http://".to_string(),
            source: url::ParseError::EmptyHost,
        };
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_is_not_validation() {
        let err = ScrapeError::from(std::io::Error::other("disk full"));
        assert!(!err.is_validation());
    }
}
