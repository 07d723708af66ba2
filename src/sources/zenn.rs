//! Zenn article source.
//!
//! Queries the public [Zenn](https://zenn.dev) API for a user's published
//! articles. The response nests the article array under an `articles` key,
//! and each record carries a `path` relative to the site root rather than a
//! full URL; the merge stage joins it onto [`ZENN_BASE_URL`].

use super::ArticleSource;
use reqwest::get;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

/// Site root that per-record relative paths are joined onto.
pub const ZENN_BASE_URL: &str = "https://zenn.dev";

/// A raw Zenn article as returned by the API.
///
/// Fields are optional so a record missing one still deserializes; the merge
/// stage turns an absent field into an explicit error instead of silently
/// dropping the record.
#[derive(Debug, Deserialize)]
pub struct ZennArticle {
    /// Publication timestamp, RFC 3339 with offset.
    pub published_at: Option<String>,
    /// Site-relative article path, e.g. `/taro/articles/x`.
    pub path: Option<String>,
    /// Article title.
    pub title: Option<String>,
}

/// Response envelope; a missing `articles` key behaves like an empty list.
#[derive(Debug, Deserialize)]
struct ZennResponse {
    #[serde(default)]
    articles: Vec<ZennArticle>,
}

/// The Zenn platform.
#[derive(Debug)]
pub struct Zenn;

impl ArticleSource for Zenn {
    type Raw = ZennArticle;

    #[instrument(level = "info", skip_all, fields(%username))]
    async fn fetch_articles(&self, username: &str) -> Vec<ZennArticle> {
        if username.is_empty() {
            warn!("Zenn username is empty; skipping fetch");
            return Vec::new();
        }

        let url = format!(
            "{}/api/articles?username={}",
            ZENN_BASE_URL,
            urlencoding::encode(username)
        );
        let response = match get(&url).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, %url, "Zenn request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            error!(status = %response.status(), "Failed to fetch Zenn articles");
            return Vec::new();
        }

        match response.json::<ZennResponse>().await {
            Ok(parsed) => {
                info!(count = parsed.articles.len(), "Fetched Zenn articles");
                parsed.articles
            }
            Err(e) => {
                error!(error = %e, "Zenn response body was not valid JSON");
                Vec::new()
            }
        }
    }
}
