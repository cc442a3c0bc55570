//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB engine) plus the startup schema pass.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "nectar";
const DATABASE: &str = "catalog";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database at the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        apply_schema(&db).await?;
        tracing::info!("Database ready at {db_path}");

        Ok(Self { db })
    }
}

/// Apply idempotent schema statements
///
/// Tables stay schemaless; indexes back the invariants the service layer
/// enforces (brand-name uniqueness) and the hot filter paths.
async fn apply_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    const STATEMENTS: &[&str] = &[
        "DEFINE INDEX IF NOT EXISTS brand_name ON TABLE brand COLUMNS name UNIQUE",
        "DEFINE INDEX IF NOT EXISTS product_brand ON TABLE product COLUMNS brand",
        "DEFINE INDEX IF NOT EXISTS product_flavor ON TABLE product COLUMNS flavor",
        "DEFINE INDEX IF NOT EXISTS product_size ON TABLE product COLUMNS size",
        "DEFINE INDEX IF NOT EXISTS category_parent ON TABLE category COLUMNS parent",
    ];

    for stmt in STATEMENTS {
        db.query(*stmt)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
    }
    Ok(())
}
