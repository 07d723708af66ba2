//! JSON output for combined articles.
//!
//! Writes the whole sequence as one JSON array, pretty-printed with a
//! four-space indent. Output is UTF-8 with non-ASCII characters left
//! unescaped, so Japanese titles land in the file as written.

use crate::models::CombinedArticle;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `articles` to pretty-printed JSON and write them to `path`,
/// replacing any existing file.
///
/// # Errors
///
/// Serialization and I/O errors are returned to the caller; the driver
/// reports them without aborting the run.
#[instrument(level = "info", skip_all, fields(path = %path, count = articles.len()))]
pub async fn write_articles(
    articles: &[CombinedArticle],
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    articles.serialize(&mut serializer)?;

    fs::write(path, buffer).await?;
    info!(path, "Combined articles have been saved");

    Ok(())
}
