//! Catalog layer
//!
//! Protocol-agnostic catalog operations shared by the REST and GraphQL
//! façades:
//!
//! - [`service`] - per-entity CRUD + listing, the single source of truth
//! - [`query`] - filter/sort/pagination translation
//! - [`reference`] - record-link validation

pub mod query;
pub mod reference;
pub mod service;

pub use query::{ListParams, SortKey};
pub use service::{CatalogService, ProductListFilter};
