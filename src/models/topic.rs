use serde::{Deserialize, Serialize};

use super::record_path;

/// A topic groups blogs and owns the tags used to filter them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Topic {
    /// Canonical URL of the topic page.
    pub fn path(&self) -> String {
        record_path("topics", self.id, &self.slug)
    }
}
