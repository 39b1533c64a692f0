//! Data models produced by the extractors.
//!
//! - [`ArticleRecord`]: the structured fields pulled from a single article page
//! - [`ListingEntry`]: one guessed teaser from a section or home page
//! - [`ArticleStats`]: derived figures shown next to an extracted record
//!
//! All of them serialize to JSON with the field names below, so they can be
//! printed, written to disk or returned from the web API unchanged.

use serde::{Deserialize, Serialize};

/// Words per minute used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// An article as extracted from one page.
///
/// Missing fields are empty strings (or an empty `tags` list), never absent.
/// A record is built fresh per extraction and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The fully-qualified, domain-validated URL that was fetched.
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// Raw date text or attribute value, unparsed.
    pub date: String,
    /// Qualifying paragraphs joined by a blank line.
    pub content: String,
    /// At most ten distinct tags in first-seen order.
    pub tags: Vec<String>,
    /// First path segment of the URL.
    pub category: String,
}

impl ArticleRecord {
    /// `true` when neither a title nor any content was found.
    ///
    /// Callers treat this as "extraction returned nothing useful" rather than
    /// as an error.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// A teaser guessed from a listing page. At least one of the two fields is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListingEntry {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleStats {
    pub characters: usize,
    pub words: usize,
    pub tags: usize,
    pub reading_minutes: usize,
}

impl ArticleStats {
    pub fn from_record(record: &ArticleRecord) -> Self {
        let words = record.content.split_whitespace().count();
        Self {
            characters: record.content.chars().count(),
            words,
            tags: record.tags.len(),
            reading_minutes: (words / WORDS_PER_MINUTE).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_every_key() {
        let json = serde_json::to_value(ArticleRecord::default()).unwrap();
        for key in [
            "url", "title", "subtitle", "author", "date", "content", "tags", "category",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["title"], "");
    }

    #[test]
    fn test_is_empty_needs_title_and_content_missing() {
        let mut record = ArticleRecord::default();
        assert!(record.is_empty());
        record.author = "Someone".to_string();
        assert!(record.is_empty());
        record.title = "Headline".to_string();
        assert!(!record.is_empty());
        record.title.clear();
        record.content = "Body".to_string();
        assert!(!record.is_empty());
    }

    #[test]
    fn test_listing_entry_omits_absent_fields() {
        let entry = ListingEntry {
            title: None,
            link: Some("https://theobjective.com/a/".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"link":"https://theobjective.com/a/"}"#);
    }

    #[test]
    fn test_stats_reading_time_has_a_floor_of_one_minute() {
        let record = ArticleRecord {
            content: "tres palabras cortas".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        let stats = ArticleStats::from_record(&record);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 20);
        assert_eq!(stats.tags, 2);
        assert_eq!(stats.reading_minutes, 1);
    }

    #[test]
    fn test_stats_reading_time_scales_with_words() {
        let record = ArticleRecord {
            content: "palabra ".repeat(650),
            ..Default::default()
        };
        assert_eq!(ArticleStats::from_record(&record).reading_minutes, 3);
    }
}
