//! Server state
//!
//! Holds the shared service singletons. Cloning is cheap (Arc-backed
//! handles all the way down), so every request handler gets its own copy.

use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::catalog::CatalogService;
use crate::core::Config;
use crate::db::DbService;
use crate::graphql::{CatalogSchema, build_schema};
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database handle
    pub db: Surreal<Db>,
    /// Protocol-agnostic catalog service (shared by REST and GraphQL)
    pub catalog: CatalogService,
    /// JWT validation service
    pub jwt_service: Arc<JwtService>,
    /// GraphQL schema (built once, cheap to clone)
    pub schema: CatalogSchema,
    /// Outbound HTTP client (upload proxy)
    pub http_client: reqwest::Client,
}

impl ServerState {
    /// Initialize all services
    ///
    /// Order: work directory layout, database, catalog service, JWT,
    /// GraphQL schema, HTTP client.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("catalog.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        let catalog = CatalogService::new(db.clone());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let schema = build_schema(catalog.clone());

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config: config.clone(),
            db,
            catalog,
            jwt_service,
            schema,
            http_client,
        })
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
