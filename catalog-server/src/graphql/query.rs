//! GraphQL query resolvers

use async_graphql::{Context, ID, Object, Result as GqlResult};

use super::types::{
    BrandType, CategoryType, FlavorType, ListFilterInput, PageType, ProductFilterInput,
    ProductType, SizeType, SupplierType, page_of,
};
use super::{GqlResultExt, service};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List brands
    async fn brands(
        &self,
        ctx: &Context<'_>,
        filter: Option<ListFilterInput>,
    ) -> GqlResult<PageType<BrandType>> {
        let params = filter.unwrap_or_default().into_params();
        let page = service(ctx)?.list_brands(&params).await.gql()?;
        Ok(page_of(page, BrandType))
    }

    /// Get a brand by id
    async fn brand(&self, ctx: &Context<'_>, id: ID) -> GqlResult<BrandType> {
        service(ctx)?.get_brand(id.as_str()).await.gql().map(BrandType)
    }

    /// List categories
    async fn categories(
        &self,
        ctx: &Context<'_>,
        filter: Option<ListFilterInput>,
    ) -> GqlResult<PageType<CategoryType>> {
        let params = filter.unwrap_or_default().into_params();
        let page = service(ctx)?.list_categories(&params).await.gql()?;
        Ok(page_of(page, CategoryType))
    }

    /// Get a category by id
    async fn category(&self, ctx: &Context<'_>, id: ID) -> GqlResult<CategoryType> {
        service(ctx)?
            .get_category(id.as_str())
            .await
            .gql()
            .map(CategoryType)
    }

    /// List flavors
    async fn flavors(
        &self,
        ctx: &Context<'_>,
        filter: Option<ListFilterInput>,
    ) -> GqlResult<PageType<FlavorType>> {
        let params = filter.unwrap_or_default().into_params();
        let page = service(ctx)?.list_flavors(&params).await.gql()?;
        Ok(page_of(page, FlavorType))
    }

    /// Get a flavor by id
    async fn flavor(&self, ctx: &Context<'_>, id: ID) -> GqlResult<FlavorType> {
        service(ctx)?
            .get_flavor(id.as_str())
            .await
            .gql()
            .map(FlavorType)
    }

    /// List sizes
    async fn sizes(
        &self,
        ctx: &Context<'_>,
        filter: Option<ListFilterInput>,
    ) -> GqlResult<PageType<SizeType>> {
        let params = filter.unwrap_or_default().into_params();
        let page = service(ctx)?.list_sizes(&params).await.gql()?;
        Ok(page_of(page, SizeType))
    }

    /// Get a size by id
    async fn size(&self, ctx: &Context<'_>, id: ID) -> GqlResult<SizeType> {
        service(ctx)?.get_size(id.as_str()).await.gql().map(SizeType)
    }

    /// List suppliers
    async fn suppliers(
        &self,
        ctx: &Context<'_>,
        filter: Option<ListFilterInput>,
    ) -> GqlResult<PageType<SupplierType>> {
        let params = filter.unwrap_or_default().into_params();
        let page = service(ctx)?.list_suppliers(&params).await.gql()?;
        Ok(page_of(page, SupplierType))
    }

    /// Get a supplier by id
    async fn supplier(&self, ctx: &Context<'_>, id: ID) -> GqlResult<SupplierType> {
        service(ctx)?
            .get_supplier(id.as_str())
            .await
            .gql()
            .map(SupplierType)
    }

    /// List products, with optional foreign-key filters
    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductFilterInput>,
    ) -> GqlResult<PageType<ProductType>> {
        let (params, refs) = filter.unwrap_or_default().into_parts();
        let page = service(ctx)?.list_products(&params, &refs).await.gql()?;
        Ok(page_of(page, ProductType))
    }

    /// Get a product by id, with referenced entities populated
    async fn product(&self, ctx: &Context<'_>, id: ID) -> GqlResult<ProductType> {
        service(ctx)?
            .get_product(id.as_str())
            .await
            .gql()
            .map(ProductType)
    }
}
