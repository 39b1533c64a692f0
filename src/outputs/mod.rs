//! Output generation for extracted records.
//!
//! # Submodules
//!
//! - [`json`]: Pretty JSON for records and listings, printed or written to disk
//! - [`report`]: Plain-text reports for the command line
pub mod json;
pub mod report;
