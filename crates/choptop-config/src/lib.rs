//! # Choptop Config
//!
//! Configuration types for the Choptop admin API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`server`]: Listen addresses and start-up seeding
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rows`]: Bounds for the rows-per-page heuristic
//!
//! # Example
//!
//! ```ignore
//! use choptop_config::{CorsConfig, RowsConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let rows_config = RowsConfig::from_env();
//! ```

pub mod cors;
pub mod rows;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use rows::RowsConfig;
pub use server::ServerConfig;
