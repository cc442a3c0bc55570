//! API Response types
//!
//! Standardized response structures shared by the REST façade and any
//! clients consuming it.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
///
/// All REST responses follow this format:
/// ```json
/// {
///     "success": true,
///     "message": "Success",
///     "data": { ... },
///     "pagination": { ... }
/// }
/// ```
///
/// `pagination` is only present on list responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Response data (absent on errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Pagination metadata (list responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            data: Some(data),
            pagination: None,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            pagination: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Create a successful list response with pagination metadata
    pub fn page(page: Page<T>) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            data: Some(page.records),
            pagination: Some(page.pagination),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages (`ceil(total / limit)`)
    pub pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// A page of records plus its pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    pub records: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(records: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self {
            records,
            pagination: Pagination::new(page, limit, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_rounds_up() {
        let p = Pagination::new(1, 10, 31);
        assert_eq!(p.pages, 4);

        let p = Pagination::new(1, 10, 30);
        assert_eq!(p.pages, 3);

        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.pages, 0);
    }

    #[test]
    fn envelope_omits_empty_fields() {
        let resp: ApiResponse<()> = ApiResponse::error("boom");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "boom");
        assert!(json.get("data").is_none());
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn list_envelope_carries_pagination() {
        let page = Page::new(vec![1, 2, 3], 1, 10, 3);
        let resp = ApiResponse::page(page);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["pagination"]["total"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }
}
