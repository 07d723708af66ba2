//! Command-line interface definitions for Article Roundup.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the Article Roundup application.
///
/// Everything else the program needs (usernames, output format) lives in the
/// JSON configuration file this points at.
///
/// # Examples
///
/// ```sh
/// # Use ./config.json
/// article_roundup
///
/// # Use a configuration file somewhere else
/// article_roundup -c /etc/article_roundup/config.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,
}
