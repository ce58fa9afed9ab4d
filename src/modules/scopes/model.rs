use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use choptop_access::ScopeMap;

/// Roles, cities, and permission keys the scope editor offers.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScopeCatalog {
    pub roles: Vec<String>,
    pub cities: Vec<String>,
    pub permissions: Vec<String>,
    /// City key holding a role's default scope
    pub global_city: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EffectiveScopeResponse {
    pub role: String,
    pub city: String,
    /// Permissions after applying the city's overrides on top of the global scope
    pub scopes: ScopeMap,
}

fn validate_permission_keys(scopes: &ScopeMap) -> Result<(), ValidationError> {
    if scopes.keys().any(|key| key.trim().is_empty()) {
        let mut error = ValidationError::new("blank_permission");
        error.message = Some("Permission keys must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Entries merged into the stored scope; keys not present are left alone.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateScopesDto {
    #[validate(custom(function = "validate_permission_keys"))]
    pub scopes: ScopeMap,
}

/// Body of the "Enable all" / "Disable all" buttons.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAllScopesDto {
    pub enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScopeRowsQuery {
    #[serde(default, deserialize_with = "choptop_core::serde::deserialize_optional_string")]
    pub q: Option<String>,
}
