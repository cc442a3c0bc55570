//! Reference Validator
//!
//! A single reference check invoked by every mutation path, REST and GraphQL
//! alike. A product (or category parent) can only be written when each
//! supplied record link resolves to an existing record; nothing is written
//! on failure.
//!
//! Deletion is deliberately not guarded: removing a referenced record leaves
//! the link in place, and populated views resolve it to nothing.

use surrealdb::RecordId;

use crate::db::repository::{BaseRepository, RepoError, RepoResult, parse_id};

/// The entity kinds that can be referenced by another record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Brand,
    Flavor,
    Size,
    Category,
}

impl RefKind {
    pub fn table(&self) -> &'static str {
        match self {
            RefKind::Brand => "brand",
            RefKind::Flavor => "flavor",
            RefKind::Size => "size",
            RefKind::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefKind::Brand => "Brand",
            RefKind::Flavor => "Flavor",
            RefKind::Size => "Size",
            RefKind::Category => "Category",
        }
    }
}

/// Check that an already-parsed record id resolves to an existing record
pub async fn resolve_reference(
    base: &BaseRepository,
    kind: RefKind,
    id: &RecordId,
) -> RepoResult<()> {
    if base.exists(id).await? {
        Ok(())
    } else {
        Err(RepoError::Reference(format!("{} not found", kind.label())))
    }
}

/// Parse an id string for the given kind and check it resolves
///
/// Returns the parsed RecordId so callers can store it directly.
pub async fn parse_and_resolve(
    base: &BaseRepository,
    kind: RefKind,
    raw: &str,
) -> RepoResult<RecordId> {
    let id = parse_id(kind.table(), raw)?;
    resolve_reference(base, kind, &id).await?;
    Ok(id)
}
