//! Per-field extraction outcomes.
//!
//! The field extractor does not log on its own. It reports what happened to
//! each field to a [`FieldObserver`]; the binary plugs in [`TracingObserver`],
//! tests use [`SilentObserver`] or their own recorder.

use crate::error::RuleError;
use crate::utils::truncate_for_log;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Subtitle,
    Author,
    Date,
    Content,
    Tags,
    Category,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Subtitle => "subtitle",
            Field::Author => "author",
            Field::Date => "date",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives one notification per field and extraction.
///
/// All methods default to doing nothing.
pub trait FieldObserver {
    /// A rule produced a non-empty value.
    fn matched(&self, _field: Field, _value: &str) {}

    /// No rule matched; the field stays empty.
    fn missing(&self, _field: Field) {}

    /// A rule failed; the field was reset to empty.
    fn degraded(&self, _field: Field, _error: &RuleError) {}
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl FieldObserver for SilentObserver {}

/// Forwards notifications to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FieldObserver for TracingObserver {
    fn matched(&self, field: Field, value: &str) {
        debug!(%field, value = %truncate_for_log(value, 80), "Field extracted");
    }

    fn missing(&self, field: Field) {
        debug!(%field, "No candidate matched");
    }

    fn degraded(&self, field: Field, error: &RuleError) {
        warn!(%field, error = %error, "Field extraction failed; left empty");
    }
}
