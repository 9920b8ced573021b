//! Post model and the raw-document transform

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;

use crate::helpers::date::parse_date_string;

/// Front-matter fields keyed by name, in document order
pub type Metadata = IndexMap<String, serde_yaml::Value>;

/// A markdown document as supplied by the loader
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Source file name (e.g. `hello-world.md`)
    pub filename: String,

    /// Rendered HTML body
    pub html: String,

    /// Raw front-matter fields
    pub metadata: Metadata,
}

/// A normalized blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Source file name, unchanged
    pub filename: String,

    /// Rendered HTML body
    pub html: String,

    /// Unique lookup key: `filename` with one trailing `.md` removed
    pub permalink: String,

    /// Publication date; `None` when missing or unparseable
    pub date: Option<DateTime<Local>>,

    /// Post tags; empty when the front-matter has none
    pub tags: Vec<String>,

    /// Remaining front-matter fields, passed through unmodified
    #[serde(flatten)]
    pub extra: Metadata,
}

impl Post {
    /// Normalize a raw document into a post.
    ///
    /// `date` and `tags` are lifted out of the metadata into parsed form;
    /// every other front-matter field lands in `extra` untouched.
    pub fn from_raw(doc: RawDocument) -> Self {
        let RawDocument {
            filename,
            html,
            mut metadata,
        } = doc;

        let permalink = filename
            .strip_suffix(".md")
            .unwrap_or(&filename)
            .to_string();

        let date = metadata
            .shift_remove("date")
            .and_then(|v| v.as_str().and_then(parse_date_string));

        let tags = metadata
            .shift_remove("tags")
            .map(|v| parse_tags(&v))
            .unwrap_or_default();

        Self {
            filename,
            html,
            permalink,
            date,
            tags,
            extra: metadata,
        }
    }

    /// Front-matter title, when one was set
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(|v| v.as_str())
    }
}

/// Tags come either as a comma-separated string (`go, rust`) or a YAML
/// list; each entry is trimmed and empty entries are dropped.
fn parse_tags(value: &serde_yaml::Value) -> Vec<String> {
    match value {
        serde_yaml::Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
