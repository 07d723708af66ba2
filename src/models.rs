//! Data models for merged article records.
//!
//! The single domain entity is [`CombinedArticle`], the unified shape every
//! platform record is normalized into before sorting and writing. Records
//! are transient: built fresh each run, written out, and discarded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which platform produced a record.
///
/// Serializes as the strings `"Zenn"` / `"Qiita"`, which is also what lands
/// in the `source` column of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Source {
    Zenn,
    Qiita,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Zenn => write!(f, "Zenn"),
            Source::Qiita => write!(f, "Qiita"),
        }
    }
}

// `MergeError::MissingField` has a field named `source`, which thiserror treats
// as the error's `std::error::Error::source()`, requiring `Source: StdError`.
impl std::error::Error for Source {}

/// A merged article record, independent of source platform.
///
/// Field order is load-bearing: it defines the CSV column order
/// (`published_at,url,title,tags,source`).
#[derive(Debug, Deserialize, Serialize)]
pub struct CombinedArticle {
    /// Publication timestamp, verbatim from the platform (RFC 3339, offset
    /// not normalized to a common timezone).
    pub published_at: String,
    /// Fully-qualified article URL.
    pub url: String,
    /// Article title, verbatim.
    pub title: String,
    /// Tag names joined with `", "`; empty when the platform exposes none.
    pub tags: String,
    /// The platform that produced this record.
    pub source: Source,
}
