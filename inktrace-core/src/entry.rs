use serde::{Deserialize, Serialize};

/// A single journal record, persisted with the original field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// RFC 3339, set once at creation.
    pub created_at: String,
    /// RFC 3339, absent until the first edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
