//! Article scraping for theobjective.com.
//!
//! The work is split the same way a request flows through it:
//!
//! 1. **Validation** ([`site`]): resolve the URL against the base origin and
//!    reject anything off the allowed domain
//! 2. **Fetching** ([`theobjective`]): one GET with a browser `User-Agent`
//! 3. **Extraction** ([`article`], [`listing`]): ordered rule tables from
//!    [`rules`], first non-empty match wins
//!
//! # Fields
//!
//! | Field | Source | Notes |
//! |-------|--------|-------|
//! | title, subtitle, author | class/CSS heuristics | first match |
//! | date | meta tags, `<time>`, class names | raw, unparsed |
//! | content | `<p>` inside the first productive container | > 20 chars each |
//! | tags | every tag/label/category element | unique, max 10 |
//! | category | URL path | page markup ignored |
//!
//! Missing fields are empty. Per-field failures are reported through
//! [`observer`] and never abort a record.

pub mod article;
pub mod listing;
pub mod observer;
pub mod rules;
pub mod site;
pub mod theobjective;

pub use site::SiteConfig;
pub use theobjective::Scraper;
