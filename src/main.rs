//! # Ditto Scraper
//!
//! Extracts structured article fields from theobjective.com pages: title,
//! subtitle, author, date, body paragraphs, tags and category.
//!
//! ## Usage
//!
//! ```sh
//! ditto_scraper article https://theobjective.com/economia/energia/2025-07-13/cnmc-directiva-apagon/
//! ditto_scraper list /economia/ --limit 5
//! ditto_scraper demo
//! ditto_scraper serve
//! ```
//!
//! ## Architecture
//!
//! Each request goes through the same steps:
//! 1. **Validation**: relative URLs are resolved and off-domain hosts rejected
//! 2. **Fetching**: a single GET with a browser `User-Agent`
//! 3. **Extraction**: ordered selector rules per field, first match wins
//! 4. **Output**: text report, JSON, or the web UI

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outcome;
mod outputs;
mod scrapers;
mod utils;
mod web;

use cli::{Cli, Command};
use outcome::Outcome;
use outputs::{json, report};
use scrapers::Scraper;
use scrapers::observer::SilentObserver;
use scrapers::site::{FOREIGN_SAMPLE_URL, SAMPLE_ARTICLE_URL, SAMPLE_SECTION_URL};

#[tokio::main]
#[instrument]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let code = match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report::failure_line(e.as_ref()));
            ExitCode::FAILURE
        }
    };

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");
    code
}

async fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let mut scraper = Scraper::new(args.site_config())?;
    if args.quiet {
        scraper = scraper.with_observer(Arc::new(SilentObserver));
    }

    match args.command {
        Command::Article {
            url,
            json: as_json,
            output,
        } => run_article(&scraper, &url, as_json, output.as_deref()).await?,
        Command::List {
            url,
            limit,
            json: as_json,
        } => run_listing(&scraper, url.as_deref(), limit, as_json).await?,
        Command::Demo => run_demo(&scraper).await,
        Command::Serve { addr } => web::serve(web::AppState::new(scraper), addr).await?,
    }
    Ok(())
}

async fn run_article(
    scraper: &Scraper,
    url: &str,
    as_json: bool,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn Error>> {
    println!("Extracting content from: {url}");
    println!("{}", "-".repeat(60));

    let record = scraper.scrape_article(url).await?;

    if as_json {
        println!("{}", json::to_pretty(&record)?);
    } else {
        print!("{}", report::article_report(&record));
    }

    if record.is_empty() {
        warn!(url = %record.url, "No title or content extracted");
        if let Some(problem) = report::outcome_problem(&Outcome::Empty(record.clone())) {
            eprintln!("{problem}");
        }
    }

    if let Some(path) = output {
        json::write_record(&record, path).await?;
    }
    Ok(())
}

async fn run_listing(
    scraper: &Scraper,
    url: Option<&str>,
    limit: Option<usize>,
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    let entries = scraper.scrape_listing(url).await?;
    let shown = &entries[..limit.unwrap_or(entries.len()).min(entries.len())];

    if as_json {
        println!("{}", json::to_pretty(shown)?);
    } else {
        println!("ARTICLES FOUND: {}", entries.len());
        print!("{}", report::listing_lines(shown));
    }
    Ok(())
}

/// The three canned scenarios: sample article, sample section, and a foreign
/// URL that must be rejected. Failures are reported, not returned.
async fn run_demo(scraper: &Scraper) {
    println!("=== Extracting a specific article ===");
    let outcome = Outcome::from(scraper.scrape_article(SAMPLE_ARTICLE_URL).await);
    match &outcome {
        Outcome::Extracted(record) | Outcome::Empty(record) => {
            println!();
            print!("{}", report::article_summary(record));
        }
        _ => {}
    }
    if let Some(problem) = report::outcome_problem(&outcome) {
        println!("{problem}");
    }
    println!();
    println!("{}", report::separator());

    println!("=== Listing articles in a section ===");
    match scraper.scrape_listing(Some(SAMPLE_SECTION_URL)).await {
        Ok(entries) => {
            println!("ARTICLES FOUND: {}", entries.len());
            print!("{}", report::listing_lines(&entries[..entries.len().min(3)]));
        }
        Err(e) => {
            error!(error = %e, "Listing failed");
            println!("Error listing articles: {e}");
        }
    }
    println!();
    println!("{}", report::separator());

    println!("=== Domain validation check ===");
    match scraper.scrape_article(FOREIGN_SAMPLE_URL).await {
        Err(e) if e.is_validation() => println!("Validation works - expected error: {e}"),
        Err(e) => println!("Unexpected error: {e}"),
        Ok(record) => println!("Unexpected success for {}", record.url),
    }
}
