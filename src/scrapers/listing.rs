//! Teaser guessing for section and home pages.
//!
//! A much looser pass than [`article`](super::article): any `article`/`div`
//! whose class hints at a story is taken as a teaser, and its heading and
//! first link are read if present.

use super::rules::{TEASER_CONTAINER, TEASER_HEADING, TEASER_LINK, element_text};
use crate::error::RuleError;
use crate::models::ListingEntry;
use scraper::Html;
use url::Url;

/// Teasers in document order. Entries with neither a title nor a link are
/// skipped; nothing is de-duplicated or capped. Nested containers each
/// produce their own entry.
pub fn extract_listing(document: &Html, base_url: &Url) -> Result<Vec<ListingEntry>, RuleError> {
    let mut entries = Vec::new();

    for container in TEASER_CONTAINER.select(document.root_element())? {
        let title = TEASER_HEADING
            .first(container)?
            .map(element_text)
            .filter(|title| !title.is_empty());

        let link = TEASER_LINK
            .first(container)?
            .and_then(|anchor| anchor.value().attr("href"))
            .and_then(|href| base_url.join(href).ok())
            .map(|url| url.to_string());

        if title.is_some() || link.is_some() {
            entries.push(ListingEntry { title, link });
        }
    }

    Ok(entries)
}
