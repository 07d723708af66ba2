//! CSV output for combined articles.
//!
//! The header row comes from the [`CombinedArticle`] field names, so the
//! column order is `published_at,url,title,tags,source`. Values containing
//! the delimiter get standard RFC 4180 quoting from the `csv` crate.

use crate::models::CombinedArticle;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize `articles` to CSV and write them to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Serialization and I/O errors propagate to the caller.
#[instrument(level = "info", skip_all, fields(path = %path, count = articles.len()))]
pub async fn write_articles(
    articles: &[CombinedArticle],
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for article in articles {
        writer.serialize(article)?;
    }
    let buffer = writer.into_inner().map_err(|e| e.into_error())?;

    fs::write(path, buffer).await?;
    info!(path, "Combined articles have been saved");

    Ok(())
}
