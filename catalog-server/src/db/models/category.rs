//! Category Model

use serde::{Deserialize, Serialize};
use shared::{EntityStatus, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;

pub const CATEGORY_TABLE: &str = "category";

/// Category entity
///
/// Categories form a tree via the optional `parent` self-reference. The
/// parent chain is checked for cycles at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Record link to the parent category (None for root categories)
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub parent: Option<RecordId>,
    pub description: Option<String>,
    /// Image URL
    pub image: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    /// Parent category id as "category:..." string
    pub parent: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Update category payload (omitted fields retain prior values)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub parent: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Row written on create (store side only)
#[derive(Debug, Serialize)]
pub struct CategoryCreateDb {
    pub name: String,
    pub parent: Option<RecordId>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: EntityStatus,
    pub created_at: Timestamp,
}

/// Merge payload for update (store side only)
#[derive(Debug, Default, Serialize)]
pub struct CategoryUpdateDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
