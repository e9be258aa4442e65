//! Post metadata serialized as YAML frontmatter.

use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Metadata for a post.
///
/// `title` and `description` must be non-empty before a post can be
/// assembled; their absence is a validation error, never a default-filled
/// value. `date` is assigned at assembly time, not supplied by the content
/// source. Arbitrary scalar fields pass through verbatim in `extra` and
/// serialize after the required fields in lexicographic key order, keeping
/// the frontmatter deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostProperties {
    /// Post title
    pub title: String,
    /// Post description (summary shown in listings and meta tags)
    pub description: String,
    /// Publication date, assigned when the post is assembled
    pub date: NaiveDate,
    /// Tag identifiers, resolved upstream
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Additional scalar metadata, passed through verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl PostProperties {
    /// Creates properties with the required fields and no extras.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date,
            tags: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Adds tags, builder-style.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Adds a pass-through metadata field, builder-style.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_yaml::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Serializes these properties to a YAML mapping for frontmatter.
    pub fn to_frontmatter(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
