//! Article sources for fetching a user's published articles.
//!
//! Each platform is a unit struct implementing [`ArticleSource`], so the two
//! fetchers share one contract and differ only in endpoint shape and
//! response envelope:
//!
//! | Platform | Module | Envelope |
//! |----------|--------|----------|
//! | Zenn | [`zenn`] | Object with the array under an `articles` key |
//! | Qiita | [`qiita`] | Top-level JSON array |
//!
//! # Contract
//!
//! A fetcher never fails: an empty username (checked before any request is
//! issued), a non-success HTTP status, a network error, or an unparseable
//! body all yield an empty vector and a single-line diagnostic. Only the
//! first page of results is requested, once, with no retries.

pub mod qiita;
pub mod zenn;

/// Common contract for fetching a user's published articles from a platform.
pub trait ArticleSource {
    /// The platform-native record shape before normalization.
    type Raw;

    /// Fetch the first page of `username`'s published articles.
    ///
    /// Returns an empty vector, never an error, for every failure path.
    async fn fetch_articles(&self, username: &str) -> Vec<Self::Raw>;
}
