//! # Choptop Admin API
//!
//! Back office API for the Choptop ticketing console, built with Axum on
//! in-memory stores.
//!
//! ## Overview
//!
//! - **Scopes**: per-role, per-city permissions where a city entry overrides
//!   the role's global (`"All"`) entry
//! - **Layout**: the rows-per-page heuristic every table uses
//! - **Analytics**: typed console events and their counters
//! - **CMS**: content drafts, review, scheduling and publishing
//! - **Journeys**: marketing journeys built on a default flow
//! - **Payments**: payment ledger, payouts, and balance summaries
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/          # Feature modules
//! │   ├── scopes/       # Scope editor
//! │   ├── layout/       # Rows-per-page endpoint
//! │   ├── analytics/    # Event counters
//! │   ├── cms/          # Content editor
//! │   ├── journeys/     # Journey builder
//! │   └── payments/     # Payments and payouts
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # JSON body extractors
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic and, where needed, the module's store
//! - `router.rs`: Axum router configuration
//!
//! All state lives in [`state::AppState`] and is handed to handlers through
//! Axum's `State` extractor; there are no globals.
//!
//! ## Configuration
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=http://localhost:5173
//! ROWS_MIN=8
//! ROWS_MAX=50
//! LOG_LEVEL=info
//! LOG_FORMAT=json
//! METRICS_ENABLED=true
//! METRICS_PORT=9090
//! ```
//!
//! ### API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use choptop_access;
pub use choptop_config;
pub use choptop_core;
pub use choptop_models;
