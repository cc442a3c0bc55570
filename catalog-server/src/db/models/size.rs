//! Size Model

use serde::{Deserialize, Serialize};
use shared::{EntityStatus, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;

pub const SIZE_TABLE: &str = "size";

/// Size entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: Option<String>,
    /// Image URL
    pub image: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Create size payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeCreate {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Update size payload (omitted fields retain prior values)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Row written on create (store side only)
#[derive(Debug, Serialize)]
pub struct SizeCreateDb {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: EntityStatus,
    pub created_at: Timestamp,
}

/// Merge payload for update (store side only)
#[derive(Debug, Default, Serialize)]
pub struct SizeUpdateDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
