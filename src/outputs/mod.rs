//! Output generation for the combined article file.
//!
//! Two writers, selected by the `output_format` configuration value:
//!
//! - [`csv`]: header row plus one row per record
//! - [`json`]: a single pretty-printed JSON array
//!
//! Both overwrite their target file unconditionally and log a confirmation
//! on success. Error handling differs by design: the driver propagates CSV
//! write failures and only reports JSON ones.

pub mod csv;
pub mod json;

/// CSV output filename, written to the working directory.
pub const CSV_FILENAME: &str = "combined_articles.csv";

/// JSON output filename, written to the working directory.
pub const JSON_FILENAME: &str = "combined_articles.json";
