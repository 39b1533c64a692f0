//! Server-rendered HTML for the web UI.
//!
//! Everything that came from the user or the scraped page goes through
//! `escaper` before it is interpolated.

use super::state::StatsSnapshot;
use crate::models::{ArticleRecord, ArticleStats};
use crate::outcome::Outcome;
use crate::outputs::json::to_pretty;
use crate::scrapers::site::{BASE_URL, SAMPLE_ARTICLE_URL, SAMPLE_SECTION_URL};
use escaper::{encode_attribute, encode_minimal};
use std::fmt::Write;
use std::time::Duration;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; color: #222; }
h1 { color: #1f4e79; }
.layout { display: flex; gap: 2rem; }
.main { flex: 2; }
.side { flex: 1; border-left: 1px solid #ddd; padding-left: 1rem; }
.success { padding: 1rem; background: #d4edda; border: 1px solid #c3e6cb; color: #155724; }
.error { padding: 1rem; background: #f8d7da; border: 1px solid #f5c6cb; color: #721c24; }
.warning { padding: 1rem; background: #fff3cd; border: 1px solid #ffeeba; color: #856404; }
.metrics { display: flex; justify-content: space-around; margin: 1rem 0; }
.metric strong { display: block; font-size: 1.5rem; }
pre { background: #f8f9fa; padding: 1rem; overflow-x: auto; }
"#;

const EXAMPLE_URLS: [&str; 3] = [SAMPLE_ARTICLE_URL, SAMPLE_SECTION_URL, BASE_URL];

/// The whole page: form, session statistics and, if any, a result section.
pub fn index_page(stats: &StatsSnapshot, url: &str, debug: bool, result: Option<String>) -> String {
    let mut examples = String::new();
    for (i, example) in EXAMPLE_URLS.iter().enumerate() {
        let _ = write!(
            examples,
            r#"<li><a href="/?url={}">Example {}</a></li>"#,
            urlencoding::encode(example),
            i + 1
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Ditto Scraper - theobjective.com</title><style>{STYLE}</style></head>
<body>
<h1>Ditto Scraper</h1>
<p>Article content extractor for theobjective.com</p>
<div class="layout">
<div class="main">
<form action="/article" method="get">
<label for="url">Article URL on theobjective.com:</label><br>
<input id="url" name="url" type="text" size="70" placeholder="https://theobjective.com/..." value="{url}">
<label><input type="checkbox" name="debug"{checked}> Show debug information</label>
<button type="submit">Extract content</button>
<a href="/">Clear</a>
</form>
{result}
</div>
<div class="side">
{stats}
<h3>Example URLs</h3>
<ul>{examples}</ul>
</div>
</div>
</body>
</html>"#,
        url = encode_attribute(url),
        checked = if debug { " checked" } else { "" },
        result = result.unwrap_or_default(),
        stats = stats_section(stats),
    )
}

pub fn stats_section(stats: &StatsSnapshot) -> String {
    format!(
        r#"<h3>Session statistics</h3>
<p>Total extractions: <strong>{}</strong></p>
<p>Successful: <strong>{}</strong> ({:.1}% success rate)</p>
<p>Failed: <strong>{}</strong></p>"#,
        stats.total, stats.successful, stats.success_rate, stats.failed
    )
}

pub fn blank_url_notice() -> String {
    r#"<div class="warning">Please enter a URL before extracting content.</div>"#.to_string()
}

/// Result block for one extraction attempt.
pub fn outcome_section(outcome: &Outcome, elapsed: Duration, debug: bool) -> String {
    match outcome {
        Outcome::Extracted(record) => article_section(record, elapsed, debug),
        Outcome::Empty(_) => r#"<div class="error">Could not extract useful content from this page. Check that the URL is correct and points to an article.</div>"#.to_string(),
        Outcome::ValidationFailed(msg) => format!(
            r#"<div class="error"><strong>Validation error:</strong><br>{}</div>"#,
            encode_minimal(msg)
        ),
        Outcome::FetchFailed(msg) => format!(
            r#"<div class="error"><strong>Unexpected error:</strong> {}</div>"#,
            encode_minimal(msg)
        ),
    }
}

fn or_missing(value: &str) -> String {
    if value.is_empty() {
        "<em>Not found</em>".to_string()
    } else {
        encode_minimal(value)
    }
}

fn article_section(record: &ArticleRecord, elapsed: Duration, debug: bool) -> String {
    let stats = ArticleStats::from_record(record);
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<div class="success"><strong>Content extracted.</strong><br>Processing time: {:.2} seconds</div>"#,
        elapsed.as_secs_f64()
    );
    let _ = write!(
        out,
        r#"<h2>Article information</h2>
<div class="metrics">
<div class="metric"><strong>{}</strong>Characters</div>
<div class="metric"><strong>{}</strong>Words</div>
<div class="metric"><strong>{}</strong>Tags</div>
<div class="metric"><strong>{} min</strong>Reading</div>
</div>"#,
        stats.characters, stats.words, stats.tags, stats.reading_minutes
    );
    let _ = write!(
        out,
        r#"<h3>Details</h3>
<p><strong>URL:</strong> <code>{}</code></p>
<p><strong>Title:</strong> {}</p>
<p><strong>Author:</strong> {}</p>
<p><strong>Date:</strong> {}</p>
<p><strong>Category:</strong> {}</p>"#,
        encode_minimal(&record.url),
        or_missing(&record.title),
        or_missing(&record.author),
        or_missing(&record.date),
        or_missing(&record.category),
    );
    if !record.tags.is_empty() {
        let _ = write!(
            out,
            "<p><strong>Tags:</strong> <em>{}</em></p>",
            encode_minimal(&record.tags.join(", "))
        );
    }
    if !record.subtitle.is_empty() {
        let _ = write!(
            out,
            "<h3>Subtitle</h3><p><em>{}</em></p>",
            encode_minimal(&record.subtitle)
        );
    }
    if !record.content.is_empty() {
        out.push_str("<h3>Article content</h3>");
        for paragraph in record.content.split("\n\n") {
            let _ = write!(out, "<p>{}</p>", encode_minimal(paragraph));
        }
    }
    if debug {
        let json = to_pretty(record).unwrap_or_else(|e| e.to_string());
        let _ = write!(
            out,
            "<h3>Debug information</h3><pre>{}</pre>",
            encode_minimal(&json)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> StatsSnapshot {
        StatsSnapshot {
            total: 4,
            successful: 3,
            failed: 1,
            success_rate: 75.0,
        }
    }

    fn record() -> ArticleRecord {
        ArticleRecord {
            url: "https://theobjective.com/economia/x/".to_string(),
            title: "Luz & <gas>".to_string(),
            content: "Primer párrafo largo del artículo.\n\nSegundo párrafo largo del texto.".to_string(),
            tags: vec!["Energía".to_string()],
            category: "economia".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_index_page_escapes_url_and_lists_examples() {
        let page = index_page(&stats(), r#""><script>"#, false, None);
        assert!(!page.contains("<script>"));
        assert!(page.contains("Example 3"));
        assert!(page.contains("75.0% success rate"));
        assert!(!page.contains(" checked"));
    }

    #[test]
    fn test_article_section_renders_paragraphs_and_escapes() {
        let html = outcome_section(&Outcome::Extracted(record()), Duration::from_millis(1500), false);
        assert!(html.contains("Luz &amp; &lt;gas&gt;"));
        assert!(html.contains("<p>Primer párrafo largo del artículo.</p>"));
        assert!(html.contains("<p>Segundo párrafo largo del texto.</p>"));
        assert!(html.contains("1.50 seconds"));
        assert!(html.contains("<strong>1 min</strong>"));
        assert!(html.contains("<em>Not found</em>"));
        assert!(!html.contains("Debug information"));
    }

    #[test]
    fn test_debug_shows_json() {
        let html = outcome_section(&Outcome::Extracted(record()), Duration::ZERO, true);
        assert!(html.contains("Debug information"));
        assert!(html.contains("&quot;category&quot;") || html.contains("\"category\""));
    }

    #[test]
    fn test_failure_sections_are_distinct() {
        let validation = outcome_section(
            &Outcome::ValidationFailed("URL not allowed".to_string()),
            Duration::ZERO,
            false,
        );
        let fetch = outcome_section(
            &Outcome::FetchFailed("timeout".to_string()),
            Duration::ZERO,
            false,
        );
        let empty = outcome_section(&Outcome::Empty(ArticleRecord::default()), Duration::ZERO, false);
        assert!(validation.contains("Validation error"));
        assert!(fetch.contains("Unexpected error"));
        assert!(empty.contains("Could not extract useful content"));
    }
}
