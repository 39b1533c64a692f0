//! Field extraction for a single article page.
//!
//! Each field runs its own rule table from [`rules`](super::rules) against the
//! parsed document. A failing field is reported to the observer and left
//! empty; it never aborts the rest of the record.

use super::observer::{Field, FieldObserver};
use super::rules::{
    self, AUTHOR_RULES, CONTENT_CONTAINERS, DATE_RULES, SUBTITLE_RULES, TAG_MATCHERS,
    TITLE_RULES, element_text, first_match,
};
use crate::error::RuleError;
use crate::models::ArticleRecord;
use itertools::Itertools;
use scraper::{ElementRef, Html};

/// Paragraphs must be longer than this (in characters) to count as body text.
pub const MIN_PARAGRAPH_CHARS: usize = 20;
pub const MAX_TAGS: usize = 10;
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Build an [`ArticleRecord`] from a parsed page.
///
/// `url` must already be validated; it is stored as-is and `category` is
/// derived from it. Never fails: missing fields are empty.
pub fn extract_article(document: &Html, url: &str, observer: &dyn FieldObserver) -> ArticleRecord {
    let root = document.root_element();

    let title = settle(Field::Title, extract_title(root), observer);
    let subtitle = settle(Field::Subtitle, extract_subtitle(root), observer);
    let author = settle(Field::Author, extract_author(root), observer);
    let date = settle(Field::Date, extract_date(root), observer);
    let content = settle(Field::Content, extract_content(root), observer);

    let tags = match extract_tags(root) {
        Ok(tags) if tags.is_empty() => {
            observer.missing(Field::Tags);
            tags
        }
        Ok(tags) => {
            observer.matched(Field::Tags, &tags.join(", "));
            tags
        }
        Err(e) => {
            observer.degraded(Field::Tags, &e);
            Vec::new()
        }
    };

    let category = settle(Field::Category, Ok(category_from_url(url)), observer);

    ArticleRecord {
        url: url.to_string(),
        title,
        subtitle,
        author,
        date,
        content,
        tags,
        category,
    }
}

fn settle(field: Field, result: Result<String, RuleError>, observer: &dyn FieldObserver) -> String {
    match result {
        Ok(value) if value.is_empty() => {
            observer.missing(field);
            value
        }
        Ok(value) => {
            observer.matched(field, &value);
            value
        }
        Err(e) => {
            observer.degraded(field, &e);
            String::new()
        }
    }
}

pub fn extract_title(root: ElementRef<'_>) -> Result<String, RuleError> {
    first_match(TITLE_RULES, root)
}

pub fn extract_subtitle(root: ElementRef<'_>) -> Result<String, RuleError> {
    first_match(SUBTITLE_RULES, root)
}

pub fn extract_author(root: ElementRef<'_>) -> Result<String, RuleError> {
    first_match(AUTHOR_RULES, root)
}

/// Meta tags first, then `<time>` elements, then date-ish class names.
/// Returned raw; no date parsing happens here.
pub fn extract_date(root: ElementRef<'_>) -> Result<String, RuleError> {
    first_match(DATE_RULES, root)
}

/// Body paragraphs of the first container that has any.
///
/// For each candidate container only the first matching element is looked
/// at. Its `<p>` descendants longer than [`MIN_PARAGRAPH_CHARS`] are kept in
/// document order and joined with a blank line.
pub fn extract_content(root: ElementRef<'_>) -> Result<String, RuleError> {
    let paragraph = rules::parse_selector("p")?;

    for container in CONTENT_CONTAINERS {
        let Some(element) = container.first(root)? else {
            continue;
        };
        let paragraphs = element
            .select(&paragraph)
            .map(element_text)
            .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
            .collect::<Vec<_>>();
        if !paragraphs.is_empty() {
            return Ok(paragraphs.join(PARAGRAPH_SEPARATOR));
        }
    }

    Ok(String::new())
}

/// Text of every element matched by any tag matcher, de-duplicated in
/// first-seen order and capped at [`MAX_TAGS`].
pub fn extract_tags(root: ElementRef<'_>) -> Result<Vec<String>, RuleError> {
    let mut found = Vec::new();
    for matcher in TAG_MATCHERS {
        found.extend(matcher.select(root)?.into_iter().map(element_text));
    }

    Ok(found
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .unique()
        .take(MAX_TAGS)
        .collect())
}

/// Fourth `/`-separated piece of the URL (the first path segment), unless it
/// is `www`. Query and fragment are dropped first. Page markup is not consulted.
///
/// ```ignore
/// assert_eq!(category_from_url("https://theobjective.com/economia/x/"), "economia");
/// assert_eq!(category_from_url("https://theobjective.com/?s=apagon"), "");
/// ```
pub fn category_from_url(url: &str) -> String {
    let path_end = url.find(['?', '#']).unwrap_or(url.len());
    match url[..path_end].split('/').nth(3) {
        Some(segment) if segment != "www" => segment.to_string(),
        _ => String::new(),
    }
}
