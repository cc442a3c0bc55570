//! Brand Model

use serde::{Deserialize, Serialize};
use shared::{EntityStatus, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;

pub const BRAND_TABLE: &str = "brand";

/// Brand entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Unique across all brands (store-level index plus service check)
    pub name: String,
    pub description: Option<String>,
    /// Logo URL
    pub logo: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Create brand payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCreate {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Update brand payload (omitted fields retain prior values)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub status: Option<EntityStatus>,
}

/// Row written on create (native record-id form, store side only)
#[derive(Debug, Serialize)]
pub struct BrandCreateDb {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub status: EntityStatus,
    pub created_at: Timestamp,
}

/// Merge payload for update (store side only)
#[derive(Debug, Default, Serialize)]
pub struct BrandUpdateDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
