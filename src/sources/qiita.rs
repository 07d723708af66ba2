//! Qiita article source.
//!
//! Queries the public [Qiita](https://qiita.com) v2 API for a user's items.
//! Unlike Zenn, the response is a top-level JSON array, each record already
//! carries an absolute URL, and records may carry a tag list.

use super::ArticleSource;
use reqwest::get;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

const QIITA_API_URL: &str = "https://qiita.com/api/v2/items";

// Single fixed page; no pagination beyond the first 100 items.
const PAGE: u32 = 1;
const PER_PAGE: u32 = 100;

/// A raw Qiita item as returned by the API.
///
/// Required fields are optional here for the same reason as the Zenn shape:
/// missing fields become explicit merge errors, not deserialization skips.
#[derive(Debug, Deserialize)]
pub struct QiitaItem {
    /// Creation timestamp, RFC 3339 with offset.
    pub created_at: Option<String>,
    /// Absolute article URL.
    pub url: Option<String>,
    /// Article title.
    pub title: Option<String>,
    /// Tags attached to the item; absent behaves like an empty list.
    #[serde(default)]
    pub tags: Vec<QiitaTag>,
}

/// One entry of a Qiita item's tag list.
#[derive(Debug, Deserialize)]
pub struct QiitaTag {
    pub name: String,
}

/// The Qiita platform.
#[derive(Debug)]
pub struct Qiita;

impl ArticleSource for Qiita {
    type Raw = QiitaItem;

    #[instrument(level = "info", skip_all, fields(%username))]
    async fn fetch_articles(&self, username: &str) -> Vec<QiitaItem> {
        if username.is_empty() {
            warn!("Qiita username is empty; skipping fetch");
            return Vec::new();
        }

        let url = format!(
            "{}?page={}&per_page={}&query=user:{}",
            QIITA_API_URL,
            PAGE,
            PER_PAGE,
            urlencoding::encode(username)
        );
        let response = match get(&url).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, %url, "Qiita request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            error!(status = %response.status(), "Failed to fetch Qiita articles");
            return Vec::new();
        }

        match response.json::<Vec<QiitaItem>>().await {
            Ok(items) => {
                info!(count = items.len(), "Fetched Qiita articles");
                items
            }
            Err(e) => {
                error!(error = %e, "Qiita response body was not valid JSON");
                Vec::new()
            }
        }
    }
}
