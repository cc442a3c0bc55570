//! Repository Module
//!
//! CRUD operations for the SurrealDB catalog tables. Entity repositories are
//! thin wrappers over [`BaseRepository`], which implements the shared
//! create / find / merge-update / delete / paged-query machinery once.

pub mod brand;
pub mod category;
pub mod flavor;
pub mod product;
pub mod size;
pub mod supplier;

// Re-exports
pub use brand::BrandRepository;
pub use category::CategoryRepository;
pub use flavor::FlavorRepository;
pub use product::ProductRepository;
pub use size::SizeRepository;
pub use supplier::SupplierRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use crate::catalog::query::{ListParams, build_conditions, build_count, build_select};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reference error: {0}")]
    Reference(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" everywhere above the store
// =============================================================================
//
// API payloads carry record ids as strings. `parse_id` accepts both the full
// "table:id" form and a bare key, and rejects ids that name another table.

/// Parse an id string into a RecordId for the given table
pub fn parse_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RepoError::Validation(format!("Invalid {table} ID: empty")));
    }
    match raw.split_once(':') {
        Some((t, key)) => {
            if t != table {
                return Err(RepoError::Validation(format!("Invalid {table} ID: {raw}")));
            }
            Ok(RecordId::from_table_key(t, key))
        }
        None => Ok(RecordId::from_table_key(table, raw)),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Select a record by id
    pub async fn find_by_id<T: DeserializeOwned>(
        &self,
        table: &'static str,
        id: &str,
    ) -> RepoResult<Option<T>> {
        let rid = parse_id(table, id)?;
        let record: Option<T> = self.db.select((table, rid.key().to_string())).await?;
        Ok(record)
    }

    /// Check whether a record id resolves to an existing record
    pub async fn exists(&self, id: &RecordId) -> RepoResult<bool> {
        let record: Option<serde_json::Value> = self
            .db
            .select((id.table(), id.key().to_string()))
            .await?;
        Ok(record.is_some())
    }

    /// Create a record and return the stored row
    pub async fn create<T, D>(&self, table: &'static str, data: D) -> RepoResult<T>
    where
        T: DeserializeOwned,
        D: Serialize + Send + 'static,
    {
        let created: Option<T> = self.db.create(table).content(data).await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {table} record")))
    }

    /// Merge the supplied fields into a record and return the updated row
    ///
    /// Omitted fields (serialized away via `skip_serializing_if`) retain
    /// their prior values.
    pub async fn merge_update<T, D>(
        &self,
        table: &'static str,
        label: &'static str,
        id: &str,
        data: D,
    ) -> RepoResult<T>
    where
        T: DeserializeOwned,
        D: Serialize + Send + 'static,
    {
        let rid = parse_id(table, id)?;
        let mut result = self
            .db
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", rid))
            .bind(("data", data))
            .await?;
        let updated: Option<T> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("{label} {id} not found")))
    }

    /// Delete a record and return the removed row
    pub async fn delete<T: DeserializeOwned>(
        &self,
        table: &'static str,
        label: &'static str,
        id: &str,
    ) -> RepoResult<T> {
        let rid = parse_id(table, id)?;
        let removed: Option<T> = self.db.delete((table, rid.key().to_string())).await?;
        removed.ok_or_else(|| RepoError::NotFound(format!("{label} {id} not found")))
    }

    /// Run the paged query built by the query builder: one page of records
    /// plus the total count for the same conditions.
    pub async fn query_page<T: DeserializeOwned>(
        &self,
        table: &'static str,
        params: &ListParams,
        refs: &[(&'static str, RecordId)],
    ) -> RepoResult<(Vec<T>, u64)> {
        let ref_fields: Vec<&'static str> = refs.iter().map(|(f, _)| *f).collect();
        let conds = build_conditions(params, &ref_fields);
        let select = build_select(table, &conds, params);
        let count = build_count(table, &conds);

        let mut query = self.db.query(select).query(count);
        if let Some(status) = params.status {
            query = query.bind(("status", status.as_str()));
        }
        if let Some(term) = params.search_term() {
            query = query.bind(("search", term));
        }
        for (field, id) in refs {
            query = query.bind((*field, id.clone()));
        }

        let mut result = query.await?;
        let records: Vec<T> = result.take(0)?;
        let total: Option<i64> = result.take((1, "count"))?;
        Ok((records, total.unwrap_or(0).max(0) as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_both_forms() {
        let full = parse_id("brand", "brand:abc").unwrap();
        let bare = parse_id("brand", "abc").unwrap();
        assert_eq!(full, bare);
        assert_eq!(full.to_string(), "brand:abc");
    }

    #[test]
    fn parse_id_rejects_foreign_table() {
        assert!(parse_id("brand", "flavor:abc").is_err());
        assert!(parse_id("brand", "  ").is_err());
    }
}
