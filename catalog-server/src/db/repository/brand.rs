//! Brand Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::catalog::query::ListParams;
use crate::db::models::{BRAND_TABLE, Brand, BrandCreateDb, BrandUpdateDb};

#[derive(Clone)]
pub struct BrandRepository {
    base: BaseRepository,
}

impl BrandRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Brand>> {
        self.base.find_by_id(BRAND_TABLE, id).await
    }

    /// Exact-name lookup, used for the uniqueness check
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Brand>> {
        let name = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM brand WHERE name = $name LIMIT 1")
            .bind(("name", name))
            .await?;
        let brands: Vec<Brand> = result.take(0)?;
        Ok(brands.into_iter().next())
    }

    pub async fn create(&self, data: BrandCreateDb) -> RepoResult<Brand> {
        self.base.create(BRAND_TABLE, data).await
    }

    pub async fn update(&self, id: &str, data: BrandUpdateDb) -> RepoResult<Brand> {
        self.base.merge_update(BRAND_TABLE, "Brand", id, data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Brand> {
        self.base.delete(BRAND_TABLE, "Brand", id).await
    }

    pub async fn query(&self, params: &ListParams) -> RepoResult<(Vec<Brand>, u64)> {
        self.base.query_page(BRAND_TABLE, params, &[]).await
    }
}
