//! Size Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::catalog::query::ListParams;
use crate::db::models::{SIZE_TABLE, Size, SizeCreateDb, SizeUpdateDb};

#[derive(Clone)]
pub struct SizeRepository {
    base: BaseRepository,
}

impl SizeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Size>> {
        self.base.find_by_id(SIZE_TABLE, id).await
    }

    pub async fn create(&self, data: SizeCreateDb) -> RepoResult<Size> {
        self.base.create(SIZE_TABLE, data).await
    }

    pub async fn update(&self, id: &str, data: SizeUpdateDb) -> RepoResult<Size> {
        self.base.merge_update(SIZE_TABLE, "Size", id, data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Size> {
        self.base.delete(SIZE_TABLE, "Size", id).await
    }

    pub async fn query(&self, params: &ListParams) -> RepoResult<(Vec<Size>, u64)> {
        self.base.query_page(SIZE_TABLE, params, &[]).await
    }
}
