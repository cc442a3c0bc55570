//! Product Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoResult};
use crate::catalog::query::ListParams;
use crate::db::models::{PRODUCT_TABLE, Product, ProductCreateDb, ProductUpdateDb};

/// Foreign-key equality filters for product queries
#[derive(Debug, Clone, Default)]
pub struct ProductRefFilter {
    pub brand: Option<RecordId>,
    pub flavor: Option<RecordId>,
    pub size: Option<RecordId>,
}

impl ProductRefFilter {
    fn as_bind_list(&self) -> Vec<(&'static str, RecordId)> {
        let mut refs = Vec::new();
        if let Some(id) = &self.brand {
            refs.push(("brand", id.clone()));
        }
        if let Some(id) = &self.flavor {
            refs.push(("flavor", id.clone()));
        }
        if let Some(id) = &self.size {
            refs.push(("size", id.clone()));
        }
        refs
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        self.base.find_by_id(PRODUCT_TABLE, id).await
    }

    pub async fn create(&self, data: ProductCreateDb) -> RepoResult<Product> {
        self.base.create(PRODUCT_TABLE, data).await
    }

    pub async fn update(&self, id: &str, data: ProductUpdateDb) -> RepoResult<Product> {
        self.base
            .merge_update(PRODUCT_TABLE, "Product", id, data)
            .await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Product> {
        self.base.delete(PRODUCT_TABLE, "Product", id).await
    }

    pub async fn query(
        &self,
        params: &ListParams,
        refs: &ProductRefFilter,
    ) -> RepoResult<(Vec<Product>, u64)> {
        self.base
            .query_page(PRODUCT_TABLE, params, &refs.as_bind_list())
            .await
    }
}
