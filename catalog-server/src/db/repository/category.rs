//! Category Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::catalog::query::ListParams;
use crate::db::models::{CATEGORY_TABLE, Category, CategoryCreateDb, CategoryUpdateDb};

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        self.base.find_by_id(CATEGORY_TABLE, id).await
    }

    pub async fn create(&self, data: CategoryCreateDb) -> RepoResult<Category> {
        self.base.create(CATEGORY_TABLE, data).await
    }

    pub async fn update(&self, id: &str, data: CategoryUpdateDb) -> RepoResult<Category> {
        self.base
            .merge_update(CATEGORY_TABLE, "Category", id, data)
            .await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Category> {
        self.base.delete(CATEGORY_TABLE, "Category", id).await
    }

    pub async fn query(&self, params: &ListParams) -> RepoResult<(Vec<Category>, u64)> {
        self.base.query_page(CATEGORY_TABLE, params, &[]).await
    }
}
