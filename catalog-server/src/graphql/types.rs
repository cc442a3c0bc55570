//! GraphQL object and input types
//!
//! Newtype wrappers around the entity models plus the input objects the
//! mutations accept. Conversions into the service-layer payloads live here
//! so resolvers stay one-liners.

use async_graphql::{Enum, ID, InputObject, Object, OutputType, SimpleObject};
use chrono::{DateTime, Utc};
use shared::{EntityStatus, Page, Pagination};
use surrealdb::RecordId;

use crate::catalog::query::{ListParams, SortKey};
use crate::catalog::service::ProductListFilter;
use crate::db::models::{
    Brand, BrandCreate, BrandUpdate, Category, CategoryCreate, CategoryUpdate, Flavor,
    FlavorCreate, FlavorUpdate, NutrientFacts, ProductCreate, ProductFull, ProductUpdate, Size,
    SizeCreate, SizeUpdate, Supplier, SupplierCreate, SupplierUpdate,
};

fn record_id_to_gql(id: &Option<RecordId>) -> ID {
    ID(id.as_ref().map(|i| i.to_string()).unwrap_or_default())
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

// =============================================================================
// Enums
// =============================================================================

/// Entity lifecycle status
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Status")]
pub enum StatusType {
    Active,
    Inactive,
}

impl From<EntityStatus> for StatusType {
    fn from(s: EntityStatus) -> Self {
        match s {
            EntityStatus::Active => StatusType::Active,
            EntityStatus::Inactive => StatusType::Inactive,
        }
    }
}

impl From<StatusType> for EntityStatus {
    fn from(s: StatusType) -> Self {
        match s {
            StatusType::Active => EntityStatus::Active,
            StatusType::Inactive => EntityStatus::Inactive,
        }
    }
}

/// Sort keys (identical to the REST `sort` parameter)
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "SortKey")]
pub enum SortKeyType {
    CreatedDesc,
    CreatedAsc,
    NameAsc,
    NameDesc,
}

impl From<SortKeyType> for SortKey {
    fn from(s: SortKeyType) -> Self {
        match s {
            SortKeyType::CreatedDesc => SortKey::CreatedDesc,
            SortKeyType::CreatedAsc => SortKey::CreatedAsc,
            SortKeyType::NameAsc => SortKey::NameAsc,
            SortKeyType::NameDesc => SortKey::NameDesc,
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Pagination metadata (mirrors the REST envelope)
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Pagination")]
pub struct PaginationType {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl From<Pagination> for PaginationType {
    fn from(p: Pagination) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            total: p.total,
            pages: p.pages,
        }
    }
}

/// A page of records plus pagination metadata
#[derive(SimpleObject)]
#[graphql(concrete(name = "BrandPage", params(BrandType)))]
#[graphql(concrete(name = "CategoryPage", params(CategoryType)))]
#[graphql(concrete(name = "FlavorPage", params(FlavorType)))]
#[graphql(concrete(name = "SizePage", params(SizeType)))]
#[graphql(concrete(name = "SupplierPage", params(SupplierType)))]
#[graphql(concrete(name = "ProductPage", params(ProductType)))]
pub struct PageType<T: OutputType> {
    pub records: Vec<T>,
    pub pagination: PaginationType,
}

/// Convert a service page into a GraphQL page
pub fn page_of<M, T: OutputType>(page: Page<M>, wrap: impl FnMut(M) -> T) -> PageType<T> {
    PageType {
        records: page.records.into_iter().map(wrap).collect(),
        pagination: page.pagination.into(),
    }
}

// =============================================================================
// Object types
// =============================================================================

pub struct BrandType(pub Brand);

#[Object(name = "Brand")]
impl BrandType {
    async fn id(&self) -> ID {
        record_id_to_gql(&self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn logo(&self) -> Option<&str> {
        self.0.logo.as_deref()
    }

    async fn status(&self) -> StatusType {
        self.0.status.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.0.created_at)
    }
}

pub struct CategoryType(pub Category);

#[Object(name = "Category")]
impl CategoryType {
    async fn id(&self) -> ID {
        record_id_to_gql(&self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn parent_id(&self) -> Option<ID> {
        self.0.parent.as_ref().map(|p| ID(p.to_string()))
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn image(&self) -> Option<&str> {
        self.0.image.as_deref()
    }

    async fn status(&self) -> StatusType {
        self.0.status.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.0.created_at)
    }
}

pub struct FlavorType(pub Flavor);

#[Object(name = "Flavor")]
impl FlavorType {
    async fn id(&self) -> ID {
        record_id_to_gql(&self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn image(&self) -> Option<&str> {
        self.0.image.as_deref()
    }

    async fn status(&self) -> StatusType {
        self.0.status.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.0.created_at)
    }
}

pub struct SizeType(pub Size);

#[Object(name = "Size")]
impl SizeType {
    async fn id(&self) -> ID {
        record_id_to_gql(&self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn image(&self) -> Option<&str> {
        self.0.image.as_deref()
    }

    async fn status(&self) -> StatusType {
        self.0.status.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.0.created_at)
    }
}

pub struct SupplierType(pub Supplier);

#[Object(name = "Supplier")]
impl SupplierType {
    async fn id(&self) -> ID {
        record_id_to_gql(&self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn contact_name(&self) -> Option<&str> {
        self.0.contact_name.as_deref()
    }

    async fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    async fn address(&self) -> Option<&str> {
        self.0.address.as_deref()
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn status(&self) -> StatusType {
        self.0.status.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.0.created_at)
    }
}

/// Nutrient facts per serving
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "NutrientFacts")]
pub struct NutrientFactsType {
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

impl From<&NutrientFacts> for NutrientFactsType {
    fn from(n: &NutrientFacts) -> Self {
        Self {
            calories: n.calories,
            protein: n.protein,
            carbohydrates: n.carbohydrates,
            fat: n.fat,
            fiber: n.fiber,
            sugar: n.sugar,
            sodium: n.sodium,
            vitamin_c: n.vitamin_c,
            vitamin_a: n.vitamin_a,
            calcium: n.calcium,
            iron: n.iron,
        }
    }
}

pub struct ProductType(pub ProductFull);

#[Object(name = "Product")]
impl ProductType {
    async fn id(&self) -> ID {
        record_id_to_gql(&self.0.product.id)
    }

    async fn name(&self) -> &str {
        &self.0.product.name
    }

    async fn description(&self) -> &str {
        &self.0.product.description
    }

    /// Raw brand link; kept verbatim even when the brand no longer exists
    async fn brand_id(&self) -> ID {
        ID(self.0.product.brand.to_string())
    }

    async fn flavor_id(&self) -> Option<ID> {
        self.0.product.flavor.as_ref().map(|f| ID(f.to_string()))
    }

    async fn size_id(&self) -> Option<ID> {
        self.0.product.size.as_ref().map(|s| ID(s.to_string()))
    }

    /// Populated brand; `null` when the link dangles
    async fn brand(&self) -> Option<BrandType> {
        self.0.brand_info.clone().map(BrandType)
    }

    async fn flavor(&self) -> Option<FlavorType> {
        self.0.flavor_info.clone().map(FlavorType)
    }

    async fn size(&self) -> Option<SizeType> {
        self.0.size_info.clone().map(SizeType)
    }

    async fn image(&self) -> &str {
        &self.0.product.image
    }

    async fn gallery(&self) -> &[String] {
        &self.0.product.gallery
    }

    async fn nutrients(&self) -> NutrientFactsType {
        (&self.0.product.nutrients).into()
    }

    async fn status(&self) -> StatusType {
        self.0.product.status.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.0.product.created_at)
    }
}

// =============================================================================
// Input types
// =============================================================================

/// Common list filter (status/search/page/limit/sort)
#[derive(InputObject, Debug, Clone, Default)]
#[graphql(name = "ListFilter")]
pub struct ListFilterInput {
    pub status: Option<StatusType>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<SortKeyType>,
}

impl ListFilterInput {
    pub fn into_params(self) -> ListParams {
        ListParams::new(
            self.status.map(Into::into),
            self.search,
            self.page,
            self.limit,
            self.sort.map(Into::into).unwrap_or_default(),
        )
    }
}

/// Product list filter: the common filter plus foreign-key equality
#[derive(InputObject, Debug, Clone, Default)]
#[graphql(name = "ProductFilter")]
pub struct ProductFilterInput {
    pub status: Option<StatusType>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<SortKeyType>,
    pub brand: Option<ID>,
    pub flavor: Option<ID>,
    pub size: Option<ID>,
}

impl ProductFilterInput {
    pub fn into_parts(self) -> (ListParams, ProductListFilter) {
        let params = ListParams::new(
            self.status.map(Into::into),
            self.search,
            self.page,
            self.limit,
            self.sort.map(Into::into).unwrap_or_default(),
        );
        let refs = ProductListFilter {
            brand: self.brand.map(|id| id.to_string()),
            flavor: self.flavor.map(|id| id.to_string()),
            size: self.size.map(|id| id.to_string()),
        };
        (params, refs)
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateBrandInput {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub status: Option<StatusType>,
}

impl From<CreateBrandInput> for BrandCreate {
    fn from(i: CreateBrandInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            logo: i.logo,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateBrandInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub status: Option<StatusType>,
}

impl From<UpdateBrandInput> for BrandUpdate {
    fn from(i: UpdateBrandInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            logo: i.logo,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub parent: Option<ID>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<StatusType>,
}

impl From<CreateCategoryInput> for CategoryCreate {
    fn from(i: CreateCategoryInput) -> Self {
        Self {
            name: i.name,
            parent: i.parent.map(|id| id.to_string()),
            description: i.description,
            image: i.image,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
    pub parent: Option<ID>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<StatusType>,
}

impl From<UpdateCategoryInput> for CategoryUpdate {
    fn from(i: UpdateCategoryInput) -> Self {
        Self {
            name: i.name,
            parent: i.parent.map(|id| id.to_string()),
            description: i.description,
            image: i.image,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateFlavorInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<StatusType>,
}

impl From<CreateFlavorInput> for FlavorCreate {
    fn from(i: CreateFlavorInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            image: i.image,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateFlavorInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<StatusType>,
}

impl From<UpdateFlavorInput> for FlavorUpdate {
    fn from(i: UpdateFlavorInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            image: i.image,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateSizeInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<StatusType>,
}

impl From<CreateSizeInput> for SizeCreate {
    fn from(i: CreateSizeInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            image: i.image,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateSizeInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<StatusType>,
}

impl From<UpdateSizeInput> for SizeUpdate {
    fn from(i: UpdateSizeInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            image: i.image,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateSupplierInput {
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub status: Option<StatusType>,
}

impl From<CreateSupplierInput> for SupplierCreate {
    fn from(i: CreateSupplierInput) -> Self {
        Self {
            name: i.name,
            contact_name: i.contact_name,
            email: i.email,
            phone: i.phone,
            address: i.address,
            description: i.description,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateSupplierInput {
    pub name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub status: Option<StatusType>,
}

impl From<UpdateSupplierInput> for SupplierUpdate {
    fn from(i: UpdateSupplierInput) -> Self {
        Self {
            name: i.name,
            contact_name: i.contact_name,
            email: i.email,
            phone: i.phone,
            address: i.address,
            description: i.description,
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct NutrientFactsInput {
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

impl From<NutrientFactsInput> for NutrientFacts {
    fn from(n: NutrientFactsInput) -> Self {
        Self {
            calories: n.calories,
            protein: n.protein,
            carbohydrates: n.carbohydrates,
            fat: n.fat,
            fiber: n.fiber,
            sugar: n.sugar,
            sodium: n.sodium,
            vitamin_c: n.vitamin_c,
            vitamin_a: n.vitamin_a,
            calcium: n.calcium,
            iron: n.iron,
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub brand: ID,
    pub flavor: Option<ID>,
    pub size: Option<ID>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub nutrients: Option<NutrientFactsInput>,
    pub status: Option<StatusType>,
}

impl From<CreateProductInput> for ProductCreate {
    fn from(i: CreateProductInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            brand: i.brand.to_string(),
            flavor: i.flavor.map(|id| id.to_string()),
            size: i.size.map(|id| id.to_string()),
            image: i.image,
            gallery: i.gallery,
            nutrients: i.nutrients.map(Into::into),
            status: i.status.map(Into::into),
        }
    }
}

#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<ID>,
    pub flavor: Option<ID>,
    pub size: Option<ID>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub nutrients: Option<NutrientFactsInput>,
    pub status: Option<StatusType>,
}

impl From<UpdateProductInput> for ProductUpdate {
    fn from(i: UpdateProductInput) -> Self {
        Self {
            name: i.name,
            description: i.description,
            brand: i.brand.map(|id| id.to_string()),
            flavor: i.flavor.map(|id| id.to_string()),
            size: i.size.map(|id| id.to_string()),
            image: i.image,
            gallery: i.gallery,
            nutrients: i.nutrients.map(Into::into),
            status: i.status.map(Into::into),
        }
    }
}
