//! Catalog Service
//!
//! The single source of truth for catalog mutations and queries. Both
//! façades (REST handlers and GraphQL resolvers) delegate here, so
//! validation, reference checks, filtering and pagination cannot drift
//! between protocols.

use std::collections::HashMap;

use shared::Page;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::catalog::query::ListParams;
use crate::catalog::reference::{RefKind, parse_and_resolve};
use crate::db::models::{
    BRAND_TABLE, Brand, BrandCreate, BrandCreateDb, BrandUpdate, BrandUpdateDb, CATEGORY_TABLE,
    Category, CategoryCreate, CategoryCreateDb, CategoryUpdate, CategoryUpdateDb, FLAVOR_TABLE,
    Flavor, FlavorCreate, FlavorCreateDb, FlavorUpdate, FlavorUpdateDb, NutrientFacts, Product,
    ProductCreate, ProductCreateDb, ProductFull, ProductUpdate, ProductUpdateDb, SIZE_TABLE, Size,
    SizeCreate, SizeCreateDb, SizeUpdate, SizeUpdateDb, Supplier, SupplierCreate, SupplierCreateDb,
    SupplierUpdate, SupplierUpdateDb,
};
use crate::db::repository::{
    BaseRepository, BrandRepository, CategoryRepository, FlavorRepository, ProductRepository,
    SizeRepository, SupplierRepository, parse_id,
};
use crate::db::repository::product::ProductRefFilter;
use crate::utils::error::{AppError, AppResult};
use crate::utils::time::now_millis;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_DESCRIPTION_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
    MAX_URL_LEN, validate_gallery, validate_non_negative, validate_optional_text,
    validate_required_text,
};

/// Parent chains longer than this are rejected outright
const MAX_CATEGORY_DEPTH: usize = 64;

/// Foreign-key filters accepted by the product list operation
#[derive(Debug, Clone, Default)]
pub struct ProductListFilter {
    pub brand: Option<String>,
    pub flavor: Option<String>,
    pub size: Option<String>,
}

/// Unified catalog service over all entity repositories
#[derive(Clone)]
pub struct CatalogService {
    base: BaseRepository,
    brands: BrandRepository,
    categories: CategoryRepository,
    flavors: FlavorRepository,
    sizes: SizeRepository,
    products: ProductRepository,
    suppliers: SupplierRepository,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db.clone()),
            brands: BrandRepository::new(db.clone()),
            categories: CategoryRepository::new(db.clone()),
            flavors: FlavorRepository::new(db.clone()),
            sizes: SizeRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            suppliers: SupplierRepository::new(db),
        }
    }

    // =========================================================================
    // Brand
    // =========================================================================

    pub async fn list_brands(&self, params: &ListParams) -> AppResult<Page<Brand>> {
        let (records, total) = self.brands.query(params).await?;
        Ok(Page::new(records, params.page, params.limit, total))
    }

    pub async fn get_brand(&self, id: &str) -> AppResult<Brand> {
        self.brands
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Brand {id} not found")))
    }

    pub async fn create_brand(&self, data: BrandCreate) -> AppResult<Brand> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.logo, "logo", MAX_URL_LEN)?;

        if self.brands.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(format!("Brand '{name}' already exists")));
        }

        let row = BrandCreateDb {
            name,
            description: data.description,
            logo: data.logo,
            status: data.status.unwrap_or_default(),
            created_at: now_millis(),
        };
        Ok(self.brands.create(row).await?)
    }

    pub async fn update_brand(&self, id: &str, data: BrandUpdate) -> AppResult<Brand> {
        let name = match data.name {
            Some(n) => {
                let n = n.trim().to_string();
                validate_required_text(&n, "name", MAX_NAME_LEN)?;

                // Uniqueness check must not trip over the record itself
                let target = parse_id(BRAND_TABLE, id)?;
                if let Some(existing) = self.brands.find_by_name(&n).await?
                    && existing.id != Some(target)
                {
                    return Err(AppError::Conflict(format!("Brand '{n}' already exists")));
                }
                Some(n)
            }
            None => None,
        };
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.logo, "logo", MAX_URL_LEN)?;

        let patch = BrandUpdateDb {
            name,
            description: data.description,
            logo: data.logo,
            status: data.status,
        };
        Ok(self.brands.update(id, patch).await?)
    }

    /// Delete a brand
    ///
    /// Products referencing the brand are left untouched, dangling link
    /// included.
    pub async fn delete_brand(&self, id: &str) -> AppResult<Brand> {
        Ok(self.brands.delete(id).await?)
    }

    // =========================================================================
    // Category
    // =========================================================================

    pub async fn list_categories(&self, params: &ListParams) -> AppResult<Page<Category>> {
        let (records, total) = self.categories.query(params).await?;
        Ok(Page::new(records, params.page, params.limit, total))
    }

    pub async fn get_category(&self, id: &str) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    pub async fn create_category(&self, data: CategoryCreate) -> AppResult<Category> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

        let parent = match &data.parent {
            Some(raw) => Some(parse_and_resolve(&self.base, RefKind::Category, raw).await?),
            None => None,
        };

        let row = CategoryCreateDb {
            name,
            parent,
            description: data.description,
            image: data.image,
            status: data.status.unwrap_or_default(),
            created_at: now_millis(),
        };
        Ok(self.categories.create(row).await?)
    }

    pub async fn update_category(&self, id: &str, data: CategoryUpdate) -> AppResult<Category> {
        let name = match data.name {
            Some(n) => {
                let n = n.trim().to_string();
                validate_required_text(&n, "name", MAX_NAME_LEN)?;
                Some(n)
            }
            None => None,
        };
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

        let parent = match &data.parent {
            Some(raw) => {
                let parent = parse_and_resolve(&self.base, RefKind::Category, raw).await?;
                let target = parse_id(CATEGORY_TABLE, id)?;
                self.assert_no_category_cycle(&target, &parent).await?;
                Some(parent)
            }
            None => None,
        };

        let patch = CategoryUpdateDb {
            name,
            parent,
            description: data.description,
            image: data.image,
            status: data.status,
        };
        Ok(self.categories.update(id, patch).await?)
    }

    pub async fn delete_category(&self, id: &str) -> AppResult<Category> {
        Ok(self.categories.delete(id).await?)
    }

    /// Walk the proposed parent chain; reject if it reaches `category_id`
    async fn assert_no_category_cycle(
        &self,
        category_id: &surrealdb::RecordId,
        new_parent: &surrealdb::RecordId,
    ) -> AppResult<()> {
        let mut current = Some(new_parent.clone());
        let mut hops = 0usize;
        while let Some(cur) = current {
            if cur == *category_id {
                return Err(AppError::validation(
                    "Category parent chain must not form a cycle",
                ));
            }
            hops += 1;
            if hops > MAX_CATEGORY_DEPTH {
                return Err(AppError::validation("Category parent chain is too deep"));
            }
            current = self
                .categories
                .find_by_id(&cur.to_string())
                .await?
                .and_then(|c| c.parent);
        }
        Ok(())
    }

    // =========================================================================
    // Flavor
    // =========================================================================

    pub async fn list_flavors(&self, params: &ListParams) -> AppResult<Page<Flavor>> {
        let (records, total) = self.flavors.query(params).await?;
        Ok(Page::new(records, params.page, params.limit, total))
    }

    pub async fn get_flavor(&self, id: &str) -> AppResult<Flavor> {
        self.flavors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Flavor {id} not found")))
    }

    pub async fn create_flavor(&self, data: FlavorCreate) -> AppResult<Flavor> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

        let row = FlavorCreateDb {
            name,
            description: data.description,
            image: data.image,
            status: data.status.unwrap_or_default(),
            created_at: now_millis(),
        };
        Ok(self.flavors.create(row).await?)
    }

    pub async fn update_flavor(&self, id: &str, data: FlavorUpdate) -> AppResult<Flavor> {
        let name = match data.name {
            Some(n) => {
                let n = n.trim().to_string();
                validate_required_text(&n, "name", MAX_NAME_LEN)?;
                Some(n)
            }
            None => None,
        };
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

        let patch = FlavorUpdateDb {
            name,
            description: data.description,
            image: data.image,
            status: data.status,
        };
        Ok(self.flavors.update(id, patch).await?)
    }

    pub async fn delete_flavor(&self, id: &str) -> AppResult<Flavor> {
        Ok(self.flavors.delete(id).await?)
    }

    // =========================================================================
    // Size
    // =========================================================================

    pub async fn list_sizes(&self, params: &ListParams) -> AppResult<Page<Size>> {
        let (records, total) = self.sizes.query(params).await?;
        Ok(Page::new(records, params.page, params.limit, total))
    }

    pub async fn get_size(&self, id: &str) -> AppResult<Size> {
        self.sizes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Size {id} not found")))
    }

    pub async fn create_size(&self, data: SizeCreate) -> AppResult<Size> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

        let row = SizeCreateDb {
            name,
            description: data.description,
            image: data.image,
            status: data.status.unwrap_or_default(),
            created_at: now_millis(),
        };
        Ok(self.sizes.create(row).await?)
    }

    pub async fn update_size(&self, id: &str, data: SizeUpdate) -> AppResult<Size> {
        let name = match data.name {
            Some(n) => {
                let n = n.trim().to_string();
                validate_required_text(&n, "name", MAX_NAME_LEN)?;
                Some(n)
            }
            None => None,
        };
        validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;

        let patch = SizeUpdateDb {
            name,
            description: data.description,
            image: data.image,
            status: data.status,
        };
        Ok(self.sizes.update(id, patch).await?)
    }

    pub async fn delete_size(&self, id: &str) -> AppResult<Size> {
        Ok(self.sizes.delete(id).await?)
    }

    // =========================================================================
    // Supplier
    // =========================================================================

    pub async fn list_suppliers(&self, params: &ListParams) -> AppResult<Page<Supplier>> {
        let (records, total) = self.suppliers.query(params).await?;
        Ok(Page::new(records, params.page, params.limit, total))
    }

    pub async fn get_supplier(&self, id: &str) -> AppResult<Supplier> {
        self.suppliers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Supplier {id} not found")))
    }

    pub async fn create_supplier(&self, data: SupplierCreate) -> AppResult<Supplier> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_supplier_fields(
            &data.contact_name,
            &data.email,
            &data.phone,
            &data.address,
            &data.description,
        )?;

        let row = SupplierCreateDb {
            name,
            contact_name: data.contact_name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            description: data.description,
            status: data.status.unwrap_or_default(),
            created_at: now_millis(),
        };
        Ok(self.suppliers.create(row).await?)
    }

    pub async fn update_supplier(&self, id: &str, data: SupplierUpdate) -> AppResult<Supplier> {
        let name = match data.name {
            Some(n) => {
                let n = n.trim().to_string();
                validate_required_text(&n, "name", MAX_NAME_LEN)?;
                Some(n)
            }
            None => None,
        };
        validate_supplier_fields(
            &data.contact_name,
            &data.email,
            &data.phone,
            &data.address,
            &data.description,
        )?;

        let patch = SupplierUpdateDb {
            name,
            contact_name: data.contact_name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            description: data.description,
            status: data.status,
        };
        Ok(self.suppliers.update(id, patch).await?)
    }

    pub async fn delete_supplier(&self, id: &str) -> AppResult<Supplier> {
        Ok(self.suppliers.delete(id).await?)
    }

    // =========================================================================
    // Product
    // =========================================================================

    pub async fn list_products(
        &self,
        params: &ListParams,
        filter: &ProductListFilter,
    ) -> AppResult<Page<ProductFull>> {
        let refs = ProductRefFilter {
            brand: filter
                .brand
                .as_deref()
                .map(|raw| parse_id(BRAND_TABLE, raw))
                .transpose()?,
            flavor: filter
                .flavor
                .as_deref()
                .map(|raw| parse_id(FLAVOR_TABLE, raw))
                .transpose()?,
            size: filter
                .size
                .as_deref()
                .map(|raw| parse_id(SIZE_TABLE, raw))
                .transpose()?,
        };

        let (records, total) = self.products.query(params, &refs).await?;
        let populated = self.populate_products(records).await?;
        Ok(Page::new(populated, params.page, params.limit, total))
    }

    pub async fn get_product(&self, id: &str) -> AppResult<ProductFull> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
        self.populate_product(product).await
    }

    pub async fn create_product(&self, data: ProductCreate) -> AppResult<ProductFull> {
        let name = data.name.trim().to_string();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        if let Some(gallery) = &data.gallery {
            validate_gallery(gallery)?;
        }
        let nutrients = data.nutrients.unwrap_or_default();
        validate_nutrients(&nutrients)?;

        // Reference checks before anything is written; any failure aborts
        // the whole create.
        let brand = parse_and_resolve(&self.base, RefKind::Brand, &data.brand).await?;
        let flavor = match &data.flavor {
            Some(raw) => Some(parse_and_resolve(&self.base, RefKind::Flavor, raw).await?),
            None => None,
        };
        let size = match &data.size {
            Some(raw) => Some(parse_and_resolve(&self.base, RefKind::Size, raw).await?),
            None => None,
        };

        let row = ProductCreateDb {
            name,
            description: data.description,
            brand,
            flavor,
            size,
            image: data.image.unwrap_or_default(),
            gallery: data.gallery.unwrap_or_default(),
            nutrients,
            status: data.status.unwrap_or_default(),
            created_at: now_millis(),
        };
        let created = self.products.create(row).await?;
        self.populate_product(created).await
    }

    pub async fn update_product(&self, id: &str, data: ProductUpdate) -> AppResult<ProductFull> {
        let name = match data.name {
            Some(n) => {
                let n = n.trim().to_string();
                validate_required_text(&n, "name", MAX_NAME_LEN)?;
                Some(n)
            }
            None => None,
        };
        if let Some(description) = &data.description {
            validate_required_text(description, "description", MAX_DESCRIPTION_LEN)?;
        }
        validate_optional_text(&data.image, "image", MAX_URL_LEN)?;
        if let Some(gallery) = &data.gallery {
            validate_gallery(gallery)?;
        }
        if let Some(nutrients) = &data.nutrients {
            validate_nutrients(nutrients)?;
        }

        // Only supplied reference fields are re-validated; omitted fields
        // are left untouched.
        let brand = match &data.brand {
            Some(raw) => Some(parse_and_resolve(&self.base, RefKind::Brand, raw).await?),
            None => None,
        };
        let flavor = match &data.flavor {
            Some(raw) => Some(parse_and_resolve(&self.base, RefKind::Flavor, raw).await?),
            None => None,
        };
        let size = match &data.size {
            Some(raw) => Some(parse_and_resolve(&self.base, RefKind::Size, raw).await?),
            None => None,
        };

        let patch = ProductUpdateDb {
            name,
            description: data.description,
            brand,
            flavor,
            size,
            image: data.image,
            gallery: data.gallery,
            nutrients: data.nutrients,
            status: data.status,
        };
        let updated = self.products.update(id, patch).await?;
        self.populate_product(updated).await
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<ProductFull> {
        let removed = self.products.delete(id).await?;
        self.populate_product(removed).await
    }

    // =========================================================================
    // Population
    // =========================================================================

    async fn populate_product(&self, product: Product) -> AppResult<ProductFull> {
        let mut populated = self.populate_products(vec![product]).await?;
        populated
            .pop()
            .ok_or_else(|| AppError::internal("Population dropped a product"))
    }

    /// Resolve the brand/flavor/size links of a batch of products
    ///
    /// Each distinct id is fetched once; dangling links resolve to `None`
    /// while the raw link on the product stays untouched.
    async fn populate_products(&self, products: Vec<Product>) -> AppResult<Vec<ProductFull>> {
        let mut brands: HashMap<String, Option<Brand>> = HashMap::new();
        let mut flavors: HashMap<String, Option<Flavor>> = HashMap::new();
        let mut sizes: HashMap<String, Option<Size>> = HashMap::new();

        for product in &products {
            let brand_id = product.brand.to_string();
            if !brands.contains_key(&brand_id) {
                let found = self.brands.find_by_id(&brand_id).await?;
                brands.insert(brand_id, found);
            }
            if let Some(flavor) = &product.flavor {
                let flavor_id = flavor.to_string();
                if !flavors.contains_key(&flavor_id) {
                    let found = self.flavors.find_by_id(&flavor_id).await?;
                    flavors.insert(flavor_id, found);
                }
            }
            if let Some(size) = &product.size {
                let size_id = size.to_string();
                if !sizes.contains_key(&size_id) {
                    let found = self.sizes.find_by_id(&size_id).await?;
                    sizes.insert(size_id, found);
                }
            }
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let brand_info = brands.get(&product.brand.to_string()).cloned().flatten();
                let flavor_info = product
                    .flavor
                    .as_ref()
                    .and_then(|f| flavors.get(&f.to_string()).cloned())
                    .flatten();
                let size_info = product
                    .size
                    .as_ref()
                    .and_then(|s| sizes.get(&s.to_string()).cloned())
                    .flatten();
                ProductFull {
                    product,
                    brand_info,
                    flavor_info,
                    size_info,
                }
            })
            .collect())
    }
}

fn validate_supplier_fields(
    contact_name: &Option<String>,
    email: &Option<String>,
    phone: &Option<String>,
    address: &Option<String>,
    description: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(contact_name, "contact_name", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(description, "description", MAX_DESCRIPTION_LEN)?;
    Ok(())
}

fn validate_nutrients(n: &NutrientFacts) -> AppResult<()> {
    validate_non_negative(n.calories, "calories")?;
    validate_non_negative(n.protein, "protein")?;
    validate_non_negative(n.carbohydrates, "carbohydrates")?;
    validate_non_negative(n.fat, "fat")?;
    validate_non_negative(n.fiber, "fiber")?;
    validate_non_negative(n.sugar, "sugar")?;
    validate_non_negative(n.sodium, "sodium")?;
    validate_non_negative(n.vitamin_c, "vitamin_c")?;
    validate_non_negative(n.vitamin_a, "vitamin_a")?;
    validate_non_negative(n.calcium, "calcium")?;
    validate_non_negative(n.iron, "iron")?;
    Ok(())
}
