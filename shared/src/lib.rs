//! Shared types for the Nectar catalog platform
//!
//! Common types used by the catalog server and any future client crates:
//! the response envelope, pagination metadata, and the entity status
//! enumeration.

pub mod response;
pub mod types;

// Re-exports
pub use response::{ApiResponse, Page, Pagination};
pub use serde::{Deserialize, Serialize};
pub use types::{EntityStatus, Timestamp};
