//! # survey-split
//!
//! Splits a semicolon-delimited workshop/survey export into one dataset per
//! (respondent group, event, question) and writes a job configuration for
//! the text-analysis service next to each dataset.
//!
//! ## Usage
//!
//! ```bash
//! survey-split split --file export.csv [--write-out]
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure normalization, partitioning and job configuration logic
//! - `catalog` - Workshop and survey question catalogs
//! - `config` - Layered job and input settings
//! - `io` - Delimited text reading/writing and artifact persistence
//! - `pipeline` - Split and transform runs tying the pieces together
//! - `cli` / `app` - Command line, logging and fatal error handling
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fields;
pub mod io;
pub mod pipeline;

pub use error::{Result, SplitError};
