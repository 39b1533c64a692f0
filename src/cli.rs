//! Command-line interface definitions for Ditto Scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Global options can also come from environment variables.

use crate::scrapers::SiteConfig;
use crate::scrapers::site::{DEFAULT_USER_AGENT, SAMPLE_ARTICLE_URL};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the Ditto Scraper application.
///
/// # Examples
///
/// ```sh
/// # Extract the sample article
/// ditto_scraper article
///
/// # Extract a relative path as JSON and keep a copy
/// ditto_scraper article /economia/energia/2025-07-13/cnmc-directiva-apagon/ --json -o out.json
///
/// # Guess teasers on a section page
/// ditto_scraper list https://theobjective.com/economia/ --limit 3
///
/// # Web UI
/// ditto_scraper serve --addr 127.0.0.1:8501
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// User-Agent header sent with every request
    #[arg(long, env = "DITTO_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "DITTO_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Do not log per-field extraction results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Extract one article
    Article {
        /// Article URL, absolute or relative to https://theobjective.com
        #[arg(default_value = SAMPLE_ARTICLE_URL)]
        url: String,

        /// Print the record as JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Also write the record as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Guess article teasers on a listing page
    List {
        /// Page URL; defaults to the home page
        url: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the sample article, sample section and domain-gate scenarios
    Demo,

    /// Serve the web UI
    Serve {
        #[arg(long, env = "DITTO_ADDR", default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },
}

impl Cli {
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..SiteConfig::default()
        }
    }
}
