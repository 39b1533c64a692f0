//! theobjective.com client.
//!
//! Ties the pieces together: validate the URL, fetch it with the configured
//! `User-Agent`, parse, extract. Validation always runs first, so a rejected
//! URL never produces a request.

use super::article::extract_article;
use super::listing::extract_listing;
use super::observer::{FieldObserver, TracingObserver};
use super::site::{SiteConfig, validate_url};
use crate::error::{Result, ScrapeError};
use crate::models::{ArticleRecord, ListingEntry};
use crate::utils::truncate_for_log;
use reqwest::Client;
use scraper::Html;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Reusable scraper. Cheap to share behind an `Arc`; holds no per-request state.
#[derive(Clone)]
pub struct Scraper {
    config: SiteConfig,
    base: Url,
    client: Client,
    observer: Arc<dyn FieldObserver + Send + Sync>,
}

impl std::fmt::Debug for Scraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scraper")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Scraper {
    /// Build a scraper with a [`TracingObserver`].
    ///
    /// # Errors
    ///
    /// [`ScrapeError::InvalidUrl`] if `config.base_url` does not parse, or
    /// [`ScrapeError::Fetch`] if the HTTP client cannot be built.
    pub fn new(config: SiteConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|source| ScrapeError::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            base,
            client,
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn FieldObserver + Send + Sync>) -> Self {
        self.observer = observer;
        self
    }

    pub fn validate(&self, candidate: &str) -> Result<Url> {
        validate_url(candidate, &self.base, &self.config.allowed_domain)
    }

    /// GET a validated URL and return the body. Non-2xx statuses are errors.
    #[instrument(level = "info", skip_all, fields(url = %url))]
    pub async fn fetch_page(&self, url: &Url) -> Result<String> {
        info!("Scraping");
        let response = self.client.get(url.clone()).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched page");
        Ok(body)
    }

    /// Validate, fetch and extract a single article.
    ///
    /// # Errors
    ///
    /// Validation errors come back before any request is made. Fetch errors
    /// are returned unchanged. Extraction itself cannot fail.
    #[instrument(level = "info", skip_all, fields(url = %candidate))]
    pub async fn scrape_article(&self, candidate: &str) -> Result<ArticleRecord> {
        let url = self.validate(candidate).inspect_err(|e| {
            error!(error = %e, "URL validation error");
        })?;

        let body = self.fetch_page(&url).await.inspect_err(|e| {
            error!(%url, error = %e, "Failed to access page");
        })?;

        let record = parse_article(&body, &url, self.observer.as_ref());
        info!(
            title = %truncate_for_log(&record.title, 50),
            author = %record.author,
            date = %record.date,
            category = %record.category,
            content_chars = record.content.chars().count(),
            tags = record.tags.len(),
            "Article extracted"
        );
        Ok(record)
    }

    /// Validate, fetch and guess teasers on a listing page. `None` means the
    /// base origin.
    ///
    /// A failing heuristic yields an empty list, not an error.
    #[instrument(level = "info", skip_all, fields(url = ?candidate))]
    pub async fn scrape_listing(&self, candidate: Option<&str>) -> Result<Vec<ListingEntry>> {
        let url = self
            .validate(candidate.unwrap_or(self.config.base_url.as_str()))
            .inspect_err(|e| error!(error = %e, "URL validation error"))?;

        let body = self.fetch_page(&url).await.inspect_err(|e| {
            error!(%url, error = %e, "Failed to access page");
        })?;

        let entries = parse_listing(&body, &url);
        info!(count = entries.len(), "Listing extraction complete");
        Ok(entries)
    }
}

/// Parse and extract in one synchronous step, so the parsed tree never lives
/// across an `.await`.
pub fn parse_article(body: &str, url: &Url, observer: &dyn FieldObserver) -> ArticleRecord {
    let document = Html::parse_document(body);
    extract_article(&document, url.as_str(), observer)
}

pub fn parse_listing(body: &str, url: &Url) -> Vec<ListingEntry> {
    let document = Html::parse_document(body);
    extract_listing(&document, url).unwrap_or_else(|e| {
        warn!(error = %e, "Listing extraction failed");
        Vec::new()
    })
}
