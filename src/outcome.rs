//! Classification of an extraction attempt for presentation.
//!
//! Both the CLI and the web UI show the same three failure kinds: a URL that
//! failed validation, a page that could not be fetched, and a page that was
//! fetched but yielded neither title nor content.

use crate::error::ScrapeError;
use crate::models::ArticleRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Title or content was found.
    Extracted(ArticleRecord),
    /// Fetched, but no title and no content.
    Empty(ArticleRecord),
    ValidationFailed(String),
    FetchFailed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Extracted(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Extracted(_) => "extracted",
            Outcome::Empty(_) => "empty",
            Outcome::ValidationFailed(_) => "validation",
            Outcome::FetchFailed(_) => "fetch",
        }
    }
}

impl From<Result<ArticleRecord, ScrapeError>> for Outcome {
    fn from(result: Result<ArticleRecord, ScrapeError>) -> Self {
        match result {
            Ok(record) if record.is_empty() => Outcome::Empty(record),
            Ok(record) => Outcome::Extracted(record),
            Err(e) if e.is_validation() => Outcome::ValidationFailed(e.to_string()),
            Err(e) => Outcome::FetchFailed(e.to_string()),
        }
    }
}
