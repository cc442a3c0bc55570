//! REST handlers
//!
//! One module per entity. Handlers parse the request, call the catalog
//! service, and wrap the result in the response envelope; no entity rule
//! lives here.

pub mod brand;
pub mod category;
pub mod flavor;
pub mod product;
pub mod size;
pub mod supplier;
pub mod upload;

use serde::Deserialize;
use shared::EntityStatus;

use crate::catalog::query::{ListParams, SortKey};
use crate::catalog::service::ProductListFilter;
use crate::utils::{AppError, AppResult};

/// List query-string parameters, shared by every collection endpoint
///
/// The foreign-key filters are only meaningful on `/api/products` and are
/// ignored elsewhere.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub brand: Option<String>,
    pub flavor: Option<String>,
    pub size: Option<String>,
}

impl ListQueryParams {
    /// Parse and normalize into query-builder parameters
    pub fn list_params(&self) -> AppResult<ListParams> {
        let status = match &self.status {
            Some(s) => Some(
                s.parse::<EntityStatus>()
                    .map_err(|_| AppError::validation(format!("Invalid status: {s}")))?,
            ),
            None => None,
        };
        let sort = match &self.sort {
            Some(s) => SortKey::parse(s)?,
            None => SortKey::default(),
        };
        Ok(ListParams::new(
            status,
            self.search.clone(),
            self.page,
            self.limit,
            sort,
        ))
    }

    /// Foreign-key filters for the product list endpoint
    pub fn product_refs(&self) -> ProductListFilter {
        ProductListFilter {
            brand: self.brand.clone(),
            flavor: self.flavor.clone(),
            size: self.size.clone(),
        }
    }
}
