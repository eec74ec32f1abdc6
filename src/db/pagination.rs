//! Offset pagination: validated page parameters and the uniform page
//! envelope returned by every listing endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Upper bound on page size; larger requests are rejected, not clamped.
pub const MAX_LIMIT: i64 = 100;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Page selector deserialized from the query string. Defaults: page 1,
/// limit 10. Values are validated explicitly rather than clamped, so a
/// non-positive page or limit is an invalid-input error.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageParams {
    /// Build from optional query fields, applying the standard defaults.
    pub fn from_parts(page: Option<i64>, limit: Option<i64>) -> Self {
        PageParams {
            page: page.unwrap_or_else(default_page),
            limit: limit.unwrap_or_else(default_limit),
        }
    }

    /// Reject non-positive page/limit and oversized limits.
    pub fn validated(self) -> Result<Self> {
        if self.page < 1 {
            return Err(AppError::Validation(
                "page must be a positive integer".into(),
            ));
        }
        if self.limit < 1 {
            return Err(AppError::Validation(
                "limit must be a positive integer".into(),
            ));
        }
        if self.limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must not exceed {MAX_LIMIT}"
            )));
        }
        Ok(self)
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Uniform paginated envelope: the page of items plus total count and
/// navigation metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Wrap one page of items. An empty result set is a valid page with
    /// total 0, never an error.
    pub fn new(items: Vec<T>, total: i64, params: PageParams) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + params.limit - 1) / params.limit
        };
        Page {
            items,
            total,
            page: params.page,
            limit: params.limit,
            total_pages,
            has_next: params.page < total_pages,
            has_prev: params.page > 1,
        }
    }

    /// Convert the item type while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert!(PageParams { page: 0, limit: 10 }.validated().is_err());
        assert!(PageParams { page: -3, limit: 10 }.validated().is_err());
        assert!(PageParams { page: 1, limit: 0 }.validated().is_err());
        assert!(PageParams { page: 1, limit: -1 }.validated().is_err());
    }

    #[test]
    fn oversized_limit_is_rejected() {
        assert!(PageParams {
            page: 1,
            limit: MAX_LIMIT + 1
        }
        .validated()
        .is_err());
        assert!(PageParams {
            page: 1,
            limit: MAX_LIMIT
        }
        .validated()
        .is_ok());
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        assert_eq!(PageParams { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(PageParams { page: 3, limit: 10 }.offset(), 20);
        assert_eq!(PageParams { page: 5, limit: 7 }.offset(), 28);
    }

    #[test]
    fn page_metadata_is_computed_from_total() {
        let page = Page::new(vec![1, 2, 3], 23, PageParams { page: 2, limit: 10 });
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_prev);

        let last = Page::new(vec![1], 23, PageParams { page: 3, limit: 10 });
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn empty_result_is_a_valid_page() {
        let page: Page<i32> = Page::new(vec![], 0, PageParams::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
        assert!(page.items.is_empty());
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let page = Page::new(vec![0; 10], 20, PageParams { page: 2, limit: 10 });
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = Page::new(vec![1, 2], 12, PageParams { page: 1, limit: 2 }).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 6);
        assert!(page.has_next);
    }

    #[test]
    fn envelope_serializes_camel_case() {
        let json =
            serde_json::to_value(Page::new(vec![1], 1, PageParams::default())).unwrap();
        assert!(json.get("totalPages").is_some());
        assert!(json.get("hasNext").is_some());
        assert!(json.get("hasPrev").is_some());
        assert_eq!(json["total"], 1);
    }
}
