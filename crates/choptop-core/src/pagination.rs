//! Pagination utilities for table endpoints.
//!
//! Every list endpoint in the console is page-based. The page size is either
//! given explicitly or derived from the caller's viewport height through
//! [`calc_rows_for_height`], so taller screens receive longer pages.
//!
//! # Parameters
//!
//! - `page`: Page number (1-indexed, default: 1)
//! - `page_size`: Items per page (1-100); wins over `viewport_height`
//! - `viewport_height`: Height in pixels used to pick the page size
//!
//! # Example
//!
//! ```ignore
//! use choptop_core::pagination::{PaginationParams, paginate};
//!
//! // GET /api/payments?page=2&viewport_height=1000
//! let page_size = params.page_size(state.rows_config.bounds);
//! let (data, meta) = paginate(filtered, params.page(), page_size);
//!
//! Ok(Json(PaginatedPaymentsResponse { data, meta }))
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::rows::{RowBounds, calc_rows_for_height};
use crate::serde::{deserialize_optional_f64, deserialize_optional_i64};

const MAX_PAGE_SIZE: i64 = 100;

/// Metadata about a paginated response.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "data": [...],
///   "meta": {
///     "total": 42,
///     "page": 2,
///     "page_size": 16,
///     "pages": 3,
///     "has_more": true
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Current page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub page_size: i64,
    /// Number of pages; at least 1 even when there are no items
    pub pages: i64,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    /// Page reached by the "previous" control.
    #[must_use]
    pub fn prev_page(&self) -> i64 {
        (self.page - 1).max(1)
    }

    /// Page reached by the "next" control.
    #[must_use]
    pub fn next_page(&self) -> i64 {
        (self.page + 1).min(self.pages)
    }
}

/// Query parameters for pagination.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Explicit page size (1-100)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page_size: Option<i64>,
    /// Viewport height used to derive the page size
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub viewport_height: Option<f64>,
}

impl PaginationParams {
    /// Returns the page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the effective page size.
    ///
    /// An explicit `page_size` is clamped to [1, 100]. Without one, the size
    /// comes from the viewport height; without either it is `bounds.min`.
    #[must_use]
    pub fn page_size(&self, bounds: RowBounds) -> i64 {
        self.page_size_or(bounds, i64::from(bounds.min))
    }

    /// Like [`page_size`](Self::page_size), but uses `fallback` when neither
    /// a page size nor a viewport height was given.
    #[must_use]
    pub fn page_size_or(&self, bounds: RowBounds, fallback: i64) -> i64 {
        if let Some(size) = self.page_size {
            return size.clamp(1, MAX_PAGE_SIZE);
        }

        match self.viewport_height {
            Some(height) => i64::from(calc_rows_for_height(height, bounds)).max(1),
            None => fallback.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// Number of pages needed for `total` items; never less than 1.
#[must_use]
pub fn page_count(total: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    let total = total.max(0);
    ((total + page_size - 1) / page_size).max(1)
}

/// Slices one page out of `items`.
///
/// Pages past the end yield an empty slice with `has_more == false`.
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: i64) -> (Vec<T>, PaginationMeta) {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = items.len() as i64;
    let offset = (page - 1).saturating_mul(page_size);

    let data: Vec<T> = items
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(page_size).unwrap_or(usize::MAX))
        .collect();

    let meta = PaginationMeta {
        total,
        page,
        page_size,
        pages: page_count(total, page_size),
        has_more: offset.saturating_add(page_size) < total,
    };

    (data, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(RowBounds::DEFAULT), 8);
    }

    #[test]
    fn test_page_clamped_to_one() {
        let params = PaginationParams {
            page: Some(-3),
            ..Default::default()
        };
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_explicit_page_size_wins_over_height() {
        let params = PaginationParams {
            page: None,
            page_size: Some(5),
            viewport_height: Some(2000.0),
        };
        assert_eq!(params.page_size(RowBounds::DEFAULT), 5);
    }

    #[test]
    fn test_explicit_page_size_boundary_cases() {
        let test_cases = vec![(0, 1), (-1, 1), (1, 1), (100, 100), (101, 100)];

        for (input, expected) in test_cases {
            let params = PaginationParams {
                page_size: Some(input),
                ..Default::default()
            };
            assert_eq!(params.page_size(RowBounds::DEFAULT), expected);
        }
    }

    #[test]
    fn test_page_size_from_viewport_height() {
        let params = PaginationParams {
            viewport_height: Some(1000.0),
            ..Default::default()
        };
        assert_eq!(params.page_size(RowBounds::DEFAULT), 16);
        assert_eq!(params.page_size(RowBounds::new(4, 10)), 10);
    }

    #[test]
    fn test_page_size_or_fallback() {
        let params = PaginationParams::default();
        assert_eq!(params.page_size_or(RowBounds::DEFAULT, 10), 10);

        let params = PaginationParams {
            viewport_height: Some(1500.0),
            ..Default::default()
        };
        assert_eq!(params.page_size_or(RowBounds::DEFAULT, 10), 24);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 8), 4);
    }

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<i32> = (1..=25).collect();
        let (data, meta) = paginate(items, 2, 10);
        assert_eq!(data, (11..=20).collect::<Vec<_>>());
        assert_eq!(meta.total, 25);
        assert_eq!(meta.pages, 3);
        assert!(meta.has_more);
        assert_eq!(meta.prev_page(), 1);
        assert_eq!(meta.next_page(), 3);
    }

    #[test]
    fn test_paginate_last_page() {
        let items: Vec<i32> = (1..=25).collect();
        let (data, meta) = paginate(items, 3, 10);
        assert_eq!(data, vec![21, 22, 23, 24, 25]);
        assert!(!meta.has_more);
        assert_eq!(meta.next_page(), 3);
    }

    #[test]
    fn test_paginate_past_the_end() {
        let items: Vec<i32> = (1..=5).collect();
        let (data, meta) = paginate(items, 9, 10);
        assert!(data.is_empty());
        assert_eq!(meta.page, 9);
        assert_eq!(meta.pages, 1);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_paginate_empty() {
        let (data, meta) = paginate(Vec::<i32>::new(), 1, 10);
        assert!(data.is_empty());
        assert_eq!(meta.total, 0);
        assert_eq!(meta.pages, 1);
        assert_eq!(meta.prev_page(), 1);
        assert_eq!(meta.next_page(), 1);
    }

    #[test]
    fn test_pagination_params_deserialize_empty_strings() {
        let json = r#"{"page":"","page_size":"","viewport_height":""}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(RowBounds::DEFAULT), 8);
    }

    #[test]
    fn test_pagination_params_deserialize_with_values() {
        let json = r#"{"page":"3","viewport_height":"1500"}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 3);
        assert_eq!(params.page_size(RowBounds::DEFAULT), 24);
    }

    #[test]
    fn test_pagination_meta_serialize() {
        let (_, meta) = paginate((0..40).collect::<Vec<_>>(), 2, 16);
        let serialized = serde_json::to_string(&meta).unwrap();
        assert!(serialized.contains(r#""total":40"#));
        assert!(serialized.contains(r#""page_size":16"#));
        assert!(serialized.contains(r#""pages":3"#));
        assert!(serialized.contains(r#""has_more":true"#));
    }
}
