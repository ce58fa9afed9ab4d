//! # Choptop Access
//!
//! Role scopes for the Choptop admin console.
//!
//! - [`catalog`]: Roles, cities, and permission keys offered by the console
//! - [`scopes`]: The scope store and effective-permission resolution
//!
//! City-level entries override a role's global (`"All"`) entries, and an
//! explicit `false` at city level always wins over a global `true`.

pub mod catalog;
pub mod scopes;

pub use catalog::{CITIES, GLOBAL_CITY, PERMISSIONS, ROLES};
pub use scopes::{RoleScopeSummary, ScopeMap, ScopeRow, ScopeStore};
