use serde::{Deserialize, Deserializer, Serialize};

use super::{record_path, Tag, Topic};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Raw Markdown, or HTML when fetched with `parsed=true`.
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "pined", alias = "pinned")]
    pub pinned: bool,
    // Mirrors the backend record; no page reads it.
    pub visible: bool,
    #[serde(deserialize_with = "null_as_empty")]
    pub topics: Vec<Topic>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
}

impl Blog {
    /// Canonical URL of the blog page.
    pub fn path(&self) -> String {
        record_path("blogs", self.id, &self.slug)
    }
}

// The backend encodes empty slices as `null`.
fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}
