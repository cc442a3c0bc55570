//! GraphQL mutation resolvers
//!
//! Every mutation is gated by the admin guard, then delegates to the same
//! service calls the REST handlers use.

use async_graphql::{Context, ID, Object, Result as GqlResult};

use super::types::{
    BrandType, CategoryType, CreateBrandInput, CreateCategoryInput, CreateFlavorInput,
    CreateProductInput, CreateSizeInput, CreateSupplierInput, FlavorType, ProductType, SizeType,
    SupplierType, UpdateBrandInput, UpdateCategoryInput, UpdateFlavorInput, UpdateProductInput,
    UpdateSizeInput, UpdateSupplierInput,
};
use super::{GqlResultExt, require_admin, service};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // ========== Brand ==========

    async fn create_brand(
        &self,
        ctx: &Context<'_>,
        input: CreateBrandInput,
    ) -> GqlResult<BrandType> {
        require_admin(ctx)?;
        service(ctx)?
            .create_brand(input.into())
            .await
            .gql()
            .map(BrandType)
    }

    async fn update_brand(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateBrandInput,
    ) -> GqlResult<BrandType> {
        require_admin(ctx)?;
        service(ctx)?
            .update_brand(id.as_str(), input.into())
            .await
            .gql()
            .map(BrandType)
    }

    /// Delete a brand and return the removed record
    ///
    /// Products referencing it are left untouched.
    async fn delete_brand(&self, ctx: &Context<'_>, id: ID) -> GqlResult<BrandType> {
        require_admin(ctx)?;
        service(ctx)?
            .delete_brand(id.as_str())
            .await
            .gql()
            .map(BrandType)
    }

    // ========== Category ==========

    async fn create_category(
        &self,
        ctx: &Context<'_>,
        input: CreateCategoryInput,
    ) -> GqlResult<CategoryType> {
        require_admin(ctx)?;
        service(ctx)?
            .create_category(input.into())
            .await
            .gql()
            .map(CategoryType)
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateCategoryInput,
    ) -> GqlResult<CategoryType> {
        require_admin(ctx)?;
        service(ctx)?
            .update_category(id.as_str(), input.into())
            .await
            .gql()
            .map(CategoryType)
    }

    async fn delete_category(&self, ctx: &Context<'_>, id: ID) -> GqlResult<CategoryType> {
        require_admin(ctx)?;
        service(ctx)?
            .delete_category(id.as_str())
            .await
            .gql()
            .map(CategoryType)
    }

    // ========== Flavor ==========

    async fn create_flavor(
        &self,
        ctx: &Context<'_>,
        input: CreateFlavorInput,
    ) -> GqlResult<FlavorType> {
        require_admin(ctx)?;
        service(ctx)?
            .create_flavor(input.into())
            .await
            .gql()
            .map(FlavorType)
    }

    async fn update_flavor(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateFlavorInput,
    ) -> GqlResult<FlavorType> {
        require_admin(ctx)?;
        service(ctx)?
            .update_flavor(id.as_str(), input.into())
            .await
            .gql()
            .map(FlavorType)
    }

    async fn delete_flavor(&self, ctx: &Context<'_>, id: ID) -> GqlResult<FlavorType> {
        require_admin(ctx)?;
        service(ctx)?
            .delete_flavor(id.as_str())
            .await
            .gql()
            .map(FlavorType)
    }

    // ========== Size ==========

    async fn create_size(&self, ctx: &Context<'_>, input: CreateSizeInput) -> GqlResult<SizeType> {
        require_admin(ctx)?;
        service(ctx)?
            .create_size(input.into())
            .await
            .gql()
            .map(SizeType)
    }

    async fn update_size(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateSizeInput,
    ) -> GqlResult<SizeType> {
        require_admin(ctx)?;
        service(ctx)?
            .update_size(id.as_str(), input.into())
            .await
            .gql()
            .map(SizeType)
    }

    async fn delete_size(&self, ctx: &Context<'_>, id: ID) -> GqlResult<SizeType> {
        require_admin(ctx)?;
        service(ctx)?
            .delete_size(id.as_str())
            .await
            .gql()
            .map(SizeType)
    }

    // ========== Supplier ==========

    async fn create_supplier(
        &self,
        ctx: &Context<'_>,
        input: CreateSupplierInput,
    ) -> GqlResult<SupplierType> {
        require_admin(ctx)?;
        service(ctx)?
            .create_supplier(input.into())
            .await
            .gql()
            .map(SupplierType)
    }

    async fn update_supplier(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateSupplierInput,
    ) -> GqlResult<SupplierType> {
        require_admin(ctx)?;
        service(ctx)?
            .update_supplier(id.as_str(), input.into())
            .await
            .gql()
            .map(SupplierType)
    }

    async fn delete_supplier(&self, ctx: &Context<'_>, id: ID) -> GqlResult<SupplierType> {
        require_admin(ctx)?;
        service(ctx)?
            .delete_supplier(id.as_str())
            .await
            .gql()
            .map(SupplierType)
    }

    // ========== Product ==========

    async fn create_product(
        &self,
        ctx: &Context<'_>,
        input: CreateProductInput,
    ) -> GqlResult<ProductType> {
        require_admin(ctx)?;
        service(ctx)?
            .create_product(input.into())
            .await
            .gql()
            .map(ProductType)
    }

    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateProductInput,
    ) -> GqlResult<ProductType> {
        require_admin(ctx)?;
        service(ctx)?
            .update_product(id.as_str(), input.into())
            .await
            .gql()
            .map(ProductType)
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: ID) -> GqlResult<ProductType> {
        require_admin(ctx)?;
        service(ctx)?
            .delete_product(id.as_str())
            .await
            .gql()
            .map(ProductType)
    }
}
