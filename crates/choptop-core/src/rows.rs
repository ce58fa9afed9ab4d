//! Rows-per-page heuristic for table views.
//!
//! Table endpoints size their pages from the caller's viewport height so that
//! taller screens show more rows. The heuristic is a pure step function over
//! five fixed height buckets, clamped into caller-supplied bounds.
//!
//! # Example
//!
//! ```ignore
//! use choptop_core::rows::{RowBounds, calc_rows_for_height};
//!
//! let bounds = RowBounds::new(6, 50);
//! assert_eq!(calc_rows_for_height(2000.0, bounds), 24);
//! assert_eq!(calc_rows_for_height(f64::NAN, bounds), 6);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upper height limit (exclusive) and bucket size for each breakpoint.
///
/// The first bucket is `0` so that it always clamps to the caller's `min`.
const BREAKPOINTS: [(f64, u32); 4] = [(700.0, 0), (900.0, 12), (1080.0, 16), (1400.0, 20)];

/// Bucket for heights at or above the last breakpoint.
const LARGEST_BUCKET: u32 = 24;

/// Floor applied to secondary tables sized from the main page size.
const SECONDARY_PAGE_FLOOR: u32 = 8;

/// Inclusive `[min, max]` range for a computed row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct RowBounds {
    pub min: u32,
    pub max: u32,
}

impl RowBounds {
    /// Bounds used when nothing else is configured.
    pub const DEFAULT: RowBounds = RowBounds { min: 8, max: 50 };

    /// Builds bounds from two limits, ordering them so that `min <= max`.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Clamps `value` into the bounds.
    #[must_use]
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

impl Default for RowBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the number of table rows to show for a viewport `height`.
///
/// Non-finite heights yield `bounds.min`. The result is always within
/// `[bounds.min, bounds.max]` and never decreases as `height` grows.
#[must_use]
pub fn calc_rows_for_height(height: f64, bounds: RowBounds) -> u32 {
    if !height.is_finite() {
        return bounds.min;
    }

    let bucket = BREAKPOINTS
        .iter()
        .find(|(limit, _)| height < *limit)
        .map_or(LARGEST_BUCKET, |(_, rows)| *rows);

    bounds.clamp(bucket)
}

/// Page size for a secondary table shown beside a main one: half the main
/// page size, but never fewer than eight rows.
#[must_use]
pub fn secondary_page_size(rows: u32) -> u32 {
    (rows / 2).max(SECONDARY_PAGE_FLOOR)
}
