//! Plain-text reports printed by the command-line entry points.

use crate::error::ScrapeError;
use crate::models::{ArticleRecord, ListingEntry};
use crate::outcome::Outcome;
use crate::utils::preview;
use std::error::Error;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

fn or_missing(value: &str) -> &str {
    if value.is_empty() { "(not found)" } else { value }
}

/// Full report for `article`: header fields, optional subtitle and tags, then
/// the whole body.
pub fn article_report(record: &ArticleRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TITLE:    {}", or_missing(&record.title));
    let _ = writeln!(out, "AUTHOR:   {}", or_missing(&record.author));
    let _ = writeln!(out, "DATE:     {}", or_missing(&record.date));
    let _ = writeln!(out, "CATEGORY: {}", or_missing(&record.category));
    if !record.subtitle.is_empty() {
        let _ = writeln!(out, "SUBTITLE: {}", record.subtitle);
    }
    if !record.tags.is_empty() {
        let _ = writeln!(out, "TAGS:     {}", record.tags.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "CONTENT ({} characters):", record.content.chars().count());
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{}", record.content);
    out
}

/// Short summary used by `demo`: header fields plus the first 300 characters
/// of the body.
pub fn article_summary(record: &ArticleRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "URL:      {}", record.url);
    let _ = writeln!(out, "Title:    {}", record.title);
    let _ = writeln!(out, "Author:   {}", record.author);
    let _ = writeln!(out, "Date:     {}", record.date);
    let _ = writeln!(out, "Category: {}", record.category);
    let _ = writeln!(out, "Content:  {} characters", record.content.chars().count());
    let tags = if record.tags.is_empty() {
        "(none found)".to_string()
    } else {
        record.tags.join(", ")
    };
    let _ = writeln!(out, "Tags:     {tags}");
    if !record.content.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Content (first 300 characters):");
        let _ = writeln!(out, "{}", preview(&record.content, 300));
    }
    out
}

/// Numbered `title - link` lines.
pub fn listing_lines(entries: &[ListingEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {} - {}\n",
                i + 1,
                entry.title.as_deref().unwrap_or("(no title)"),
                entry.link.as_deref().unwrap_or("(no link)")
            )
        })
        .collect()
}

/// One line describing a failed or empty outcome, `None` on success.
pub fn outcome_problem(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Extracted(_) => None,
        Outcome::Empty(record) => Some(format!(
            "No useful content extracted from {}. Check that the URL points to an article.",
            record.url
        )),
        Outcome::ValidationFailed(msg) => Some(format!("Validation error: {msg}")),
        Outcome::FetchFailed(msg) => Some(format!("Error: {msg}")),
    }
}

/// The line printed when a command ends in an error.
pub fn failure_line(error: &(dyn Error + 'static)) -> String {
    match error.downcast_ref::<ScrapeError>() {
        Some(e) if e.is_validation() => format!("Validation error: {e}"),
        _ => format!("Error: {error}"),
    }
}

pub fn separator() -> String {
    "=".repeat(RULE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ArticleRecord {
        ArticleRecord {
            url: "https://theobjective.com/economia/x/".to_string(),
            title: "La CNMC".to_string(),
            date: "2025-07-13".to_string(),
            content: "x".repeat(400),
            category: "economia".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_article_report_marks_missing_fields() {
        let report = article_report(&record());
        assert!(report.contains("TITLE:    La CNMC"));
        assert!(report.contains("AUTHOR:   (not found)"));
        assert!(report.contains("CONTENT (400 characters):"));
        assert!(!report.contains("SUBTITLE"));
        assert!(!report.contains("TAGS"));
    }

    #[test]
    fn test_article_report_includes_optional_sections() {
        let record = ArticleRecord {
            subtitle: "Sub".to_string(),
            tags: vec!["Energía".to_string(), "CNMC".to_string()],
            ..record()
        };
        let report = article_report(&record);
        assert!(report.contains("SUBTITLE: Sub"));
        assert!(report.contains("TAGS:     Energía, CNMC"));
    }

    #[test]
    fn test_article_summary_previews_content() {
        let summary = article_summary(&record());
        assert!(summary.contains("Tags:     (none found)"));
        assert!(summary.contains(&format!("{}...", "x".repeat(300))));
        assert!(!summary.contains(&"x".repeat(301)));
    }

    #[test]
    fn test_listing_lines_placeholders() {
        let entries = vec![
            ListingEntry {
                title: Some("Uno".to_string()),
                link: None,
            },
            ListingEntry {
                title: None,
                link: Some("https://theobjective.com/dos/".to_string()),
            },
        ];
        assert_eq!(
            listing_lines(&entries),
            "1. Uno - (no link)\n2. (no title) - https://theobjective.com/dos/\n"
        );
    }

    #[test]
    fn test_outcome_problem() {
        assert_eq!(outcome_problem(&Outcome::Extracted(record())), None);
        let msg = outcome_problem(&Outcome::ValidationFailed("bad domain".to_string())).unwrap();
        assert_eq!(msg, "Validation error: bad domain");
        let msg = outcome_problem(&Outcome::Empty(ArticleRecord::default())).unwrap();
        assert!(msg.starts_with("No useful content"));
    }

    #[test]
    fn test_failure_line_labels_validation_errors() {
        let rejected = ScrapeError::DomainRejected {
            url: "https://elpais.com/".to_string(),
            allowed_domain: "theobjective.com".to_string(),
        };
        let line = failure_line(&rejected);
        assert!(line.starts_with("Validation error: URL not allowed"));
        assert!(!line.contains("DomainRejected"));

        let io = ScrapeError::Io(std::io::Error::other("disk full"));
        assert_eq!(failure_line(&io), "Error: IO error: disk full");

        let boxed: Box<dyn Error> = Box::new(rejected);
        assert!(failure_line(boxed.as_ref()).starts_with("Validation error:"));
    }
}
