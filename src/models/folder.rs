use serde::{Deserialize, Serialize};

/// A folder grouping discounts and cuponeras (e.g. "Promos Febrero").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// The unique identifier for this folder.
    pub id: String,

    /// Folder display name, unique service-side.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// Manual ordering hint; folders without one sort after those with.
    pub sort_order: Option<i32>,

    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

/// Request body for creating a folder.
#[derive(Debug, Clone, Serialize, Default)]
pub struct FolderCreate {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

/// Partial update for a folder; `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Default)]
pub struct FolderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
