//! Product Model
//!
//! Products hold non-owning record links to Brand (required) and to Flavor
//! and Size (optional). Deleting a referenced record does not cascade; the
//! link is preserved as-is and populated views simply resolve to nothing.

use serde::{Deserialize, Serialize};
use shared::{EntityStatus, Timestamp};
use surrealdb::RecordId;

use super::serde_helpers;
use super::{Brand, Flavor, Size};

pub const PRODUCT_TABLE: &str = "product";

/// Nutrient facts per serving
///
/// Every field is optional; present values are validated to be ≥ 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientFacts {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub vitamin_c: Option<f64>,
    pub vitamin_a: Option<f64>,
    pub calcium: Option<f64>,
    pub iron: Option<f64>,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    /// Record link to brand (required)
    #[serde(with = "serde_helpers::record_id")]
    pub brand: RecordId,
    /// Record link to flavor
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub flavor: Option<RecordId>,
    /// Record link to size
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub size: Option<RecordId>,
    /// Primary image URL
    #[serde(default)]
    pub image: String,
    /// Ordered gallery of image URLs
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub nutrients: NutrientFacts,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Product with referenced entities populated
///
/// The raw record links stay untouched in `product`; each `*_info` field is
/// the resolved entity, or `None` when the link dangles.
#[derive(Debug, Clone, Serialize)]
pub struct ProductFull {
    #[serde(flatten)]
    pub product: Product,
    pub brand_info: Option<Brand>,
    pub flavor_info: Option<Flavor>,
    pub size_info: Option<Size>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    /// Brand id as "brand:..." string (required, must resolve)
    pub brand: String,
    /// Flavor id, validated only when supplied
    pub flavor: Option<String>,
    /// Size id, validated only when supplied
    pub size: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub nutrients: Option<NutrientFacts>,
    pub status: Option<EntityStatus>,
}

/// Update product payload (omitted fields retain prior values; supplied
/// reference fields are re-validated, omitted ones are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub nutrients: Option<NutrientFacts>,
    pub status: Option<EntityStatus>,
}

/// Row written on create (native record-id form, store side only)
#[derive(Debug, Serialize)]
pub struct ProductCreateDb {
    pub name: String,
    pub description: String,
    pub brand: RecordId,
    pub flavor: Option<RecordId>,
    pub size: Option<RecordId>,
    pub image: String,
    pub gallery: Vec<String>,
    pub nutrients: NutrientFacts,
    pub status: EntityStatus,
    pub created_at: Timestamp,
}

/// Merge payload for update (store side only)
#[derive(Debug, Default, Serialize)]
pub struct ProductUpdateDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<NutrientFacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
