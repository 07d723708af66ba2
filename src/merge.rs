//! Normalization and merge of platform records into one sorted sequence.
//!
//! This is where the two platform-native shapes become [`CombinedArticle`]s:
//! Zenn paths are joined onto the site root, Qiita tag lists are flattened
//! to a `", "`-joined string, and the concatenated result is sorted by
//! publication timestamp, newest first.
//!
//! Normalization is all-or-nothing: a single record missing a required
//! field, or carrying an unparseable timestamp, aborts the whole merge with
//! a [`MergeError`]. The driver decides what to do with the failure.

use crate::models::{CombinedArticle, Source};
use crate::sources::qiita::QiitaItem;
use crate::sources::zenn::{ZENN_BASE_URL, ZennArticle};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{info, instrument};
use url::Url;

static ZENN_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse(ZENN_BASE_URL).expect("Zenn base URL is valid"));

/// Error raised while normalizing or ordering raw records.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A raw record is missing a field the mapping requires.
    #[error("{source} record is missing required field `{field}`")]
    MissingField {
        source: Source,
        field: &'static str,
    },

    /// A Zenn record's path cannot be joined onto the site root.
    #[error("Zenn record has an unusable path `{path}`: {reason}")]
    InvalidPath { path: String, reason: url::ParseError },

    /// A `published_at` value is not an RFC 3339 timestamp.
    #[error("unparseable published_at timestamp `{value}`: {reason}")]
    BadTimestamp {
        value: String,
        reason: chrono::ParseError,
    },
}

/// Normalize both raw sequences and return them as one sequence sorted by
/// `published_at`, newest first.
///
/// Records with equal timestamps keep their pre-sort order (Zenn block
/// first, then Qiita, each in API order).
///
/// # Errors
///
/// Fails on the first record missing a required field, then on the first
/// unparseable timestamp. Nothing is returned for a partially valid input.
#[instrument(level = "info", skip_all, fields(zenn = zenn.len(), qiita = qiita.len()))]
pub fn merge_articles(
    zenn: Vec<ZennArticle>,
    qiita: Vec<QiitaItem>,
) -> Result<Vec<CombinedArticle>, MergeError> {
    let mut articles = Vec::with_capacity(zenn.len() + qiita.len());
    for article in zenn {
        articles.push(normalize_zenn(article)?);
    }
    for item in qiita {
        articles.push(normalize_qiita(item)?);
    }

    let mut keyed: Vec<(DateTime<FixedOffset>, CombinedArticle)> =
        Vec::with_capacity(articles.len());
    for article in articles {
        let key = parse_published_at(&article)?;
        keyed.push((key, article));
    }

    // Newest first; sort_by is stable, so ties keep input order.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    let merged: Vec<CombinedArticle> = keyed.into_iter().map(|(_, article)| article).collect();
    info!(count = merged.len(), "Merged article records");
    Ok(merged)
}

fn normalize_zenn(article: ZennArticle) -> Result<CombinedArticle, MergeError> {
    let published_at = require(article.published_at, Source::Zenn, "published_at")?;
    let path = require(article.path, Source::Zenn, "path")?;
    let title = require(article.title, Source::Zenn, "title")?;

    let url = match ZENN_BASE.join(&path) {
        Ok(url) => url,
        Err(reason) => return Err(MergeError::InvalidPath { path, reason }),
    };

    Ok(CombinedArticle {
        published_at,
        url: url.to_string(),
        title,
        tags: String::new(),
        source: Source::Zenn,
    })
}

fn normalize_qiita(item: QiitaItem) -> Result<CombinedArticle, MergeError> {
    let published_at = require(item.created_at, Source::Qiita, "created_at")?;
    let url = require(item.url, Source::Qiita, "url")?;
    let title = require(item.title, Source::Qiita, "title")?;

    let tags = item
        .tags
        .iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(CombinedArticle {
        published_at,
        url,
        title,
        tags,
        source: Source::Qiita,
    })
}

fn require(
    value: Option<String>,
    source: Source,
    field: &'static str,
) -> Result<String, MergeError> {
    value.ok_or(MergeError::MissingField { source, field })
}

fn parse_published_at(article: &CombinedArticle) -> Result<DateTime<FixedOffset>, MergeError> {
    DateTime::parse_from_rfc3339(&article.published_at).map_err(|reason| {
        MergeError::BadTimestamp {
            value: article.published_at.clone(),
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::qiita::QiitaTag;

    fn zenn(published_at: &str, path: &str, title: &str) -> ZennArticle {
        ZennArticle {
            published_at: Some(published_at.to_string()),
            path: Some(path.to_string()),
            title: Some(title.to_string()),
        }
    }

    fn qiita(created_at: &str, url: &str, title: &str, tags: &[&str]) -> QiitaItem {
        QiitaItem {
            created_at: Some(created_at.to_string()),
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            tags: tags
                .iter()
                .map(|name| QiitaTag {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_merge_two_platforms_newest_first() {
        let merged = merge_articles(
            vec![zenn("2024-01-01T00:00:00+09:00", "/taro/articles/x", "A")],
            vec![qiita(
                "2024-02-01T00:00:00+09:00",
                "https://qiita.com/hanako/items/y",
                "B",
                &["python"],
            )],
        )
        .unwrap();

        assert_eq!(merged.len(), 2);

        assert_eq!(merged[0].published_at, "2024-02-01T00:00:00+09:00");
        assert_eq!(merged[0].url, "https://qiita.com/hanako/items/y");
        assert_eq!(merged[0].title, "B");
        assert_eq!(merged[0].tags, "python");
        assert_eq!(merged[0].source, Source::Qiita);

        assert_eq!(merged[1].published_at, "2024-01-01T00:00:00+09:00");
        assert_eq!(merged[1].url, "https://zenn.dev/taro/articles/x");
        assert_eq!(merged[1].title, "A");
        assert_eq!(merged[1].tags, "");
        assert_eq!(merged[1].source, Source::Zenn);
    }

    #[test]
    fn test_output_length_is_sum_of_inputs() {
        let merged = merge_articles(
            vec![
                zenn("2024-01-01T00:00:00+09:00", "/a/articles/1", "1"),
                zenn("2024-01-02T00:00:00+09:00", "/a/articles/2", "2"),
                zenn("2024-01-03T00:00:00+09:00", "/a/articles/3", "3"),
            ],
            vec![
                qiita("2024-01-04T00:00:00+09:00", "https://qiita.com/a/items/4", "4", &[]),
                qiita("2024-01-05T00:00:00+09:00", "https://qiita.com/a/items/5", "5", &[]),
            ],
        )
        .unwrap();

        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn test_sorted_descending_across_offsets() {
        // 2024-03-01T09:00+09:00 is the same instant as 2024-03-01T00:00Z;
        // ordering must compare instants, not strings.
        let merged = merge_articles(
            vec![zenn("2024-03-01T09:30:00+09:00", "/a/articles/late", "late")],
            vec![qiita(
                "2024-03-01T00:00:00+00:00",
                "https://qiita.com/a/items/early",
                "early",
                &[],
            )],
        )
        .unwrap();

        assert_eq!(merged[0].title, "late");
        assert_eq!(merged[1].title, "early");

        for pair in merged.windows(2) {
            let newer = DateTime::parse_from_rfc3339(&pair[0].published_at).unwrap();
            let older = DateTime::parse_from_rfc3339(&pair[1].published_at).unwrap();
            assert!(newer >= older);
        }
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let merged = merge_articles(
            vec![
                zenn("2024-01-01T00:00:00+09:00", "/a/articles/first", "first"),
                zenn("2024-01-01T00:00:00+09:00", "/a/articles/second", "second"),
            ],
            vec![qiita(
                "2024-01-01T00:00:00+09:00",
                "https://qiita.com/a/items/third",
                "third",
                &[],
            )],
        )
        .unwrap();

        let titles: Vec<&str> = merged.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_qiita_tags_joined_with_comma_space() {
        let merged = merge_articles(
            vec![],
            vec![qiita(
                "2024-02-01T00:00:00+09:00",
                "https://qiita.com/a/items/y",
                "B",
                &["python", "rust", "cli"],
            )],
        )
        .unwrap();

        assert_eq!(merged[0].tags, "python, rust, cli");
    }

    #[test]
    fn test_zenn_tags_always_empty() {
        let merged = merge_articles(
            vec![zenn("2024-01-01T00:00:00+09:00", "/a/articles/x", "A")],
            vec![],
        )
        .unwrap();

        assert_eq!(merged[0].tags, "");
    }

    #[test]
    fn test_missing_zenn_title_aborts() {
        let article = ZennArticle {
            published_at: Some("2024-01-01T00:00:00+09:00".to_string()),
            path: Some("/a/articles/x".to_string()),
            title: None,
        };

        let err = merge_articles(vec![article], vec![]).unwrap_err();
        assert!(matches!(
            err,
            MergeError::MissingField {
                source: Source::Zenn,
                field: "title"
            }
        ));
    }

    #[test]
    fn test_missing_zenn_path_aborts() {
        let article = ZennArticle {
            published_at: Some("2024-01-01T00:00:00+09:00".to_string()),
            path: None,
            title: Some("A".to_string()),
        };

        let err = merge_articles(vec![article], vec![]).unwrap_err();
        assert!(matches!(
            err,
            MergeError::MissingField {
                source: Source::Zenn,
                field: "path"
            }
        ));
    }

    #[test]
    fn test_missing_qiita_created_at_aborts() {
        let item = QiitaItem {
            created_at: None,
            url: Some("https://qiita.com/a/items/y".to_string()),
            title: Some("B".to_string()),
            tags: Vec::new(),
        };

        let err = merge_articles(vec![], vec![item]).unwrap_err();
        assert!(matches!(
            err,
            MergeError::MissingField {
                source: Source::Qiita,
                field: "created_at"
            }
        ));
    }

    #[test]
    fn test_bad_timestamp_aborts() {
        let err = merge_articles(
            vec![zenn("not-a-timestamp", "/a/articles/x", "A")],
            vec![],
        )
        .unwrap_err();

        assert!(matches!(err, MergeError::BadTimestamp { .. }));
    }

    #[test]
    fn test_one_bad_record_aborts_whole_merge() {
        // The valid Qiita record must not survive a malformed Zenn record.
        let bad = ZennArticle {
            published_at: None,
            path: Some("/a/articles/x".to_string()),
            title: Some("A".to_string()),
        };

        let result = merge_articles(
            vec![bad],
            vec![qiita(
                "2024-02-01T00:00:00+09:00",
                "https://qiita.com/a/items/y",
                "B",
                &[],
            )],
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_reported_before_bad_timestamp() {
        // Normalization runs over every record before any timestamp parsing.
        let err = merge_articles(
            vec![zenn("not-a-timestamp", "/a/articles/x", "A")],
            vec![QiitaItem {
                created_at: Some("2024-02-01T00:00:00+09:00".to_string()),
                url: None,
                title: Some("B".to_string()),
                tags: Vec::new(),
            }],
        )
        .unwrap_err();

        assert!(matches!(err, MergeError::MissingField { field: "url", .. }));
    }

    #[test]
    fn test_empty_inputs_merge_to_empty() {
        let merged = merge_articles(vec![], vec![]).unwrap();
        assert!(merged.is_empty());
    }
}
