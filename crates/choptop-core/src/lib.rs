//! # Choptop Core
//!
//! Core types, errors, and utilities for the Choptop admin API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page-based pagination for table endpoints
//! - [`rows`]: Viewport-height driven rows-per-page heuristic
//! - [`serde`]: Custom serde deserialization helpers for query strings
//!
//! # Example
//!
//! ```ignore
//! use choptop_core::errors::AppError;
//! use choptop_core::pagination::{PaginationParams, paginate};
//! use choptop_core::rows::{RowBounds, calc_rows_for_height};
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Content item not found"));
//!
//! // Size a table page from the viewport
//! let rows = calc_rows_for_height(1000.0, RowBounds::DEFAULT);
//! let (page, meta) = paginate(items, 1, rows as i64);
//! ```

pub mod errors;
pub mod pagination;
pub mod rows;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use pagination::{PaginationMeta, PaginationParams, page_count, paginate};
pub use rows::{RowBounds, calc_rows_for_height, secondary_page_size};
