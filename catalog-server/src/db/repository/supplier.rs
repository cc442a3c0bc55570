//! Supplier Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::catalog::query::ListParams;
use crate::db::models::{SUPPLIER_TABLE, Supplier, SupplierCreateDb, SupplierUpdateDb};

#[derive(Clone)]
pub struct SupplierRepository {
    base: BaseRepository,
}

impl SupplierRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Supplier>> {
        self.base.find_by_id(SUPPLIER_TABLE, id).await
    }

    pub async fn create(&self, data: SupplierCreateDb) -> RepoResult<Supplier> {
        self.base.create(SUPPLIER_TABLE, data).await
    }

    pub async fn update(&self, id: &str, data: SupplierUpdateDb) -> RepoResult<Supplier> {
        self.base
            .merge_update(SUPPLIER_TABLE, "Supplier", id, data)
            .await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Supplier> {
        self.base.delete(SUPPLIER_TABLE, "Supplier", id).await
    }

    pub async fn query(&self, params: &ListParams) -> RepoResult<(Vec<Supplier>, u64)> {
        self.base.query_page(SUPPLIER_TABLE, params, &[]).await
    }
}
