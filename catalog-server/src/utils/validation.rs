//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! catalog service for every mutation path (REST and GraphQL alike).

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: brand, category, flavor, size, product, supplier
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Short identifiers: phone, contact names, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Gallery entries per product
pub const MAX_GALLERY_LEN: usize = 20;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that an optional numeric value, if present, is finite and ≥ 0.
pub fn validate_non_negative(value: Option<f64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && !(v.is_finite() && v >= 0.0)
    {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Validate a gallery: bounded length, each entry a bounded URL.
pub fn validate_gallery(gallery: &[String]) -> Result<(), AppError> {
    if gallery.len() > MAX_GALLERY_LEN {
        return Err(AppError::validation(format!(
            "gallery has too many entries ({}, max {MAX_GALLERY_LEN})",
            gallery.len()
        )));
    }
    for url in gallery {
        if url.len() > MAX_URL_LEN {
            return Err(AppError::validation(format!(
                "gallery entry is too long ({} chars, max {MAX_URL_LEN})",
                url.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Citrus", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_ignores_none() {
        assert!(validate_optional_text(&None, "description", MAX_DESCRIPTION_LEN).is_ok());
    }

    #[test]
    fn non_negative_rejects_negatives_and_nan() {
        assert!(validate_non_negative(Some(-1.0), "sugar").is_err());
        assert!(validate_non_negative(Some(f64::NAN), "sugar").is_err());
        assert!(validate_non_negative(Some(0.0), "sugar").is_ok());
        assert!(validate_non_negative(None, "sugar").is_ok());
    }
}
