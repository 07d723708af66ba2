//! Runtime configuration loaded from a JSON file.
//!
//! The configuration names the two accounts to query and the output format
//! to write. It is loaded once at startup and passed by reference into the
//! rest of the program.
//!
//! # File format
//!
//! ```json
//! {
//!     "zenn_username": "taro",
//!     "qiita_username": "hanako",
//!     "output_format": "csv"
//! }
//! ```

use serde::Deserialize;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Startup configuration.
///
/// `output_format` is kept as a free string: the recognized values are
/// `"csv"` and `"json"`, but an unrecognized value must still let the fetch
/// and merge stages run, so validation happens at dispatch time in the
/// driver, not here.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Zenn account whose published articles are fetched.
    pub zenn_username: String,
    /// Qiita account whose published articles are fetched.
    pub qiita_username: String,
    /// Output format selector: `"csv"` or `"json"`.
    pub output_format: String,
}

/// Read and parse the configuration file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON object with
/// the three required string keys.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn load_config(path: &str) -> Result<Config, Box<dyn Error>> {
    let contents = fs::read_to_string(path).await?;
    let config: Config = serde_json::from_str(&contents)?;
    info!(
        zenn_username = %config.zenn_username,
        qiita_username = %config.qiita_username,
        output_format = %config.output_format,
        "Loaded configuration"
    );
    Ok(config)
}
