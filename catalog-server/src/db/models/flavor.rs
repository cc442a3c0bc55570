//! Flavor Model
//!
//! Flavors are flat, independently-owned entities referenced by products
//! through an optional record link.

use serde::{Deserialize, Serialize};
use shared::{EntityStatus, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;

pub const FLAVOR_TABLE: &str = "flavor";

/// Flavor entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flavor {
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

/// Create flavor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorCreate {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Update flavor payload (omitted fields retain prior values)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlavorUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Row written on create (store side only)
#[derive(Debug, Serialize)]
pub struct FlavorCreateDb {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: EntityStatus,
    pub created_at: Timestamp,
}

/// Merge payload for update (store side only)
#[derive(Debug, Default, Serialize)]
pub struct FlavorUpdateDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
