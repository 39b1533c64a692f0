//! JSON output for records and listings.
//!
//! Field names match [`ArticleRecord`] exactly so the output can be fed to
//! other tools without a mapping step.

use crate::error::Result;
use crate::models::ArticleRecord;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

pub fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `record` as pretty JSON to `path`, creating parent directories.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_record(record: &ArticleRecord, path: &Path) -> Result<()> {
    let json = to_pretty(record)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!("Wrote article JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingEntry;

    fn record() -> ArticleRecord {
        ArticleRecord {
            url: "https://theobjective.com/economia/x/".to_string(),
            title: "Foo".to_string(),
            tags: vec!["a".to_string()],
            category: "economia".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_pretty_keeps_field_names() {
        let json = to_pretty(&record()).unwrap();
        assert!(json.contains(r#""title": "Foo""#));
        assert!(json.contains(r#""subtitle": """#));
        assert!(json.contains(r#""category": "economia""#));
    }

    #[test]
    fn test_to_pretty_listing_slice() {
        let entries = [ListingEntry {
            title: Some("T".to_string()),
            link: None,
        }];
        let json = to_pretty(&entries[..]).unwrap();
        assert!(json.contains(r#""title": "T""#));
        assert!(!json.contains("link"));
    }

    #[tokio::test]
    async fn test_write_record_creates_directories() {
        let dir = std::env::temp_dir().join(format!("ditto_scraper_test_{}", std::process::id()));
        let path = dir.join("nested").join("article.json");

        write_record(&record(), &path).await.unwrap();
        let written = fs::read_to_string(&path).await.unwrap();
        let parsed: ArticleRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, record());

        let _ = fs::remove_dir_all(&dir).await;
    }
}
