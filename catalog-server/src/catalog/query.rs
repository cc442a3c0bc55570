//! Query Builder
//!
//! Translates client-supplied filter/sort/paging parameters into store-level
//! SELECT + COUNT statements. Both façades feed the same [`ListParams`], so
//! filtering behaves identically no matter which protocol asked.
//!
//! `limit` is clamped at this boundary: values above [`MAX_PAGE_LIMIT`] are
//! treated as a clamped request, not an error.

use shared::EntityStatus;

use crate::utils::AppError;

/// Default page size when the client does not supply one
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Upper bound for the page size
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Sort keys exposed identically on the REST and GraphQL façades
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first (default)
    #[default]
    CreatedDesc,
    CreatedAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// ORDER BY clause fragment for this key
    pub fn order_clause(&self) -> &'static str {
        match self {
            SortKey::CreatedDesc => "created_at DESC",
            SortKey::CreatedAsc => "created_at ASC",
            SortKey::NameAsc => "name ASC",
            SortKey::NameDesc => "name DESC",
        }
    }

    /// Parse the wire form used by the REST query string
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "created_desc" => Ok(SortKey::CreatedDesc),
            "created_asc" => Ok(SortKey::CreatedAsc),
            "name_asc" => Ok(SortKey::NameAsc),
            "name_desc" => Ok(SortKey::NameDesc),
            other => Err(AppError::validation(format!("Invalid sort key: {other}"))),
        }
    }
}

/// Normalized list parameters
///
/// Construct through [`ListParams::new`] so page/limit bounds are always
/// applied.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub status: Option<EntityStatus>,
    /// Case-insensitive substring, matched against name OR description
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub sort: SortKey,
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(None, None, None, None, SortKey::default())
    }
}

impl ListParams {
    /// Build normalized parameters: 1-based page (min 1), limit clamped to
    /// `1..=MAX_PAGE_LIMIT`, blank search dropped.
    pub fn new(
        status: Option<EntityStatus>,
        search: Option<String>,
        page: Option<u32>,
        limit: Option<u32>,
        sort: SortKey,
    ) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            status,
            search,
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
            sort,
        }
    }

    /// Offset of the first record on this page
    pub fn start(&self) -> u32 {
        (self.page - 1) * self.limit
    }

    /// Search term lowered for the case-insensitive CONTAINS match
    pub fn search_term(&self) -> Option<String> {
        self.search.as_ref().map(|s| s.to_lowercase())
    }
}

/// WHERE conditions for the common filters plus any foreign-key equality
/// filters (`ref_fields` are bound as `$<field>` by the repository).
pub fn build_conditions(params: &ListParams, ref_fields: &[&'static str]) -> Vec<String> {
    let mut conds = Vec::new();
    if params.status.is_some() {
        conds.push("status = $status".to_string());
    }
    if params.search.is_some() {
        conds.push(
            "(string::lowercase(name) CONTAINS $search \
             OR string::lowercase(description ?? '') CONTAINS $search)"
                .to_string(),
        );
    }
    for field in ref_fields {
        conds.push(format!("{field} = ${field}"));
    }
    conds
}

fn where_clause(conds: &[String]) -> String {
    if conds.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conds.join(" AND "))
    }
}

/// Page SELECT statement
pub fn build_select(table: &str, conds: &[String], params: &ListParams) -> String {
    format!(
        "SELECT * FROM {table}{} ORDER BY {} LIMIT {} START {}",
        where_clause(conds),
        params.sort.order_clause(),
        params.limit,
        params.start(),
    )
}

/// Matching COUNT statement for the same conditions
pub fn build_count(table: &str, conds: &[String]) -> String {
    format!("SELECT count() FROM {table}{} GROUP ALL", where_clause(conds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_not_rejected() {
        let p = ListParams::new(None, None, Some(1), Some(100_000), SortKey::default());
        assert_eq!(p.limit, MAX_PAGE_LIMIT);

        let p = ListParams::new(None, None, Some(1), Some(0), SortKey::default());
        assert_eq!(p.limit, 1);
    }

    #[test]
    fn page_defaults_to_one() {
        let p = ListParams::new(None, None, None, None, SortKey::default());
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(p.start(), 0);

        let p = ListParams::new(None, None, Some(0), None, SortKey::default());
        assert_eq!(p.page, 1);
    }

    #[test]
    fn blank_search_is_dropped() {
        let p = ListParams::new(None, Some("   ".into()), None, None, SortKey::default());
        assert!(p.search.is_none());

        let p = ListParams::new(None, Some(" Nature ".into()), None, None, SortKey::default());
        assert_eq!(p.search.as_deref(), Some("Nature"));
        assert_eq!(p.search_term().as_deref(), Some("nature"));
    }

    #[test]
    fn select_orders_newest_first_by_default() {
        let p = ListParams::new(None, None, Some(2), Some(10), SortKey::default());
        let conds = build_conditions(&p, &[]);
        let q = build_select("brand", &conds, &p);
        assert_eq!(q, "SELECT * FROM brand ORDER BY created_at DESC LIMIT 10 START 10");
    }

    #[test]
    fn conditions_combine_with_and() {
        let p = ListParams::new(
            Some(EntityStatus::Active),
            Some("citrus".into()),
            None,
            None,
            SortKey::NameAsc,
        );
        let conds = build_conditions(&p, &["brand"]);
        assert_eq!(conds.len(), 3);
        let q = build_select("product", &conds, &p);
        assert!(q.contains("WHERE status = $status AND"));
        assert!(q.contains("brand = $brand"));
        assert!(q.ends_with("ORDER BY name ASC LIMIT 10 START 0"));

        let c = build_count("product", &conds);
        assert!(c.starts_with("SELECT count() FROM product WHERE"));
        assert!(c.ends_with("GROUP ALL"));
    }

    #[test]
    fn sort_key_parses_wire_form() {
        assert_eq!(SortKey::parse("name_desc").unwrap(), SortKey::NameDesc);
        assert!(SortKey::parse("price_asc").is_err());
    }
}
