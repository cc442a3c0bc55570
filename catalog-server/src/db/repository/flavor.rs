//! Flavor Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::catalog::query::ListParams;
use crate::db::models::{FLAVOR_TABLE, Flavor, FlavorCreateDb, FlavorUpdateDb};

#[derive(Clone)]
pub struct FlavorRepository {
    base: BaseRepository,
}

impl FlavorRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Flavor>> {
        self.base.find_by_id(FLAVOR_TABLE, id).await
    }

    pub async fn create(&self, data: FlavorCreateDb) -> RepoResult<Flavor> {
        self.base.create(FLAVOR_TABLE, data).await
    }

    pub async fn update(&self, id: &str, data: FlavorUpdateDb) -> RepoResult<Flavor> {
        self.base
            .merge_update(FLAVOR_TABLE, "Flavor", id, data)
            .await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Flavor> {
        self.base.delete(FLAVOR_TABLE, "Flavor", id).await
    }

    pub async fn query(&self, params: &ListParams) -> RepoResult<(Vec<Flavor>, u64)> {
        self.base.query_page(FLAVOR_TABLE, params, &[]).await
    }
}
