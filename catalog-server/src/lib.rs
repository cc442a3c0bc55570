//! Nectar Catalog Server - admin API for the juice-company product catalog
//!
//! # Architecture overview
//!
//! - **Catalog layer** (`catalog`): protocol-agnostic entity operations,
//!   query building, reference validation
//! - **Database** (`db`): embedded SurrealDB storage and repositories
//! - **Auth** (`auth`): JWT bearer-token decoding
//! - **REST façade** (`routes` + `handler`): resource routers and the
//!   response envelope
//! - **GraphQL façade** (`graphql`): the same operations behind `/graphql`
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # configuration, state, server
//! ├── auth/          # JWT decoding
//! ├── catalog/       # service, query builder, reference validator
//! ├── db/            # models, repositories, embedded store
//! ├── graphql/       # schema, resolvers, GraphQL types
//! ├── handler/       # REST handlers
//! ├── routes/        # routers and middleware stack
//! └── utils/         # errors, logging, validation, time
//! ```

pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod graphql;
pub mod handler;
pub mod routes;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use catalog::CatalogService;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    _   __          __
   / | / /__  _____/ /_____ ______
  /  |/ / _ \/ ___/ __/ __ `/ ___/
 / /|  /  __/ /__/ /_/ /_/ / /
/_/ |_/\___/\___/\__/\__,_/_/
          catalog server
    "#
    );
}
