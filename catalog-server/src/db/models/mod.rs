//! Catalog entity models
//!
//! One module per entity, each with the stored entity, the API payloads
//! (`*Create` / `*Update`, record ids as strings) and the store-side rows
//! (`*CreateDb` / `*UpdateDb`, native record ids).

pub mod brand;
pub mod category;
pub mod flavor;
pub mod product;
pub mod serde_helpers;
pub mod size;
pub mod supplier;

pub use brand::{BRAND_TABLE, Brand, BrandCreate, BrandCreateDb, BrandUpdate, BrandUpdateDb};
pub use category::{
    CATEGORY_TABLE, Category, CategoryCreate, CategoryCreateDb, CategoryUpdate, CategoryUpdateDb,
};
pub use flavor::{FLAVOR_TABLE, Flavor, FlavorCreate, FlavorCreateDb, FlavorUpdate, FlavorUpdateDb};
pub use product::{
    NutrientFacts, PRODUCT_TABLE, Product, ProductCreate, ProductCreateDb, ProductFull,
    ProductUpdate, ProductUpdateDb,
};
pub use size::{SIZE_TABLE, Size, SizeCreate, SizeCreateDb, SizeUpdate, SizeUpdateDb};
pub use supplier::{
    SUPPLIER_TABLE, Supplier, SupplierCreate, SupplierCreateDb, SupplierUpdate, SupplierUpdateDb,
};
