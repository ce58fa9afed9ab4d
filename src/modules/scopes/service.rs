use anyhow::anyhow;
use tracing::{info, instrument};

use choptop_access::{CITIES, GLOBAL_CITY, PERMISSIONS, ROLES, RoleScopeSummary, ScopeMap, ScopeRow};
use choptop_core::AppError;
use choptop_observability::track_scope_change;

use crate::modules::scopes::model::{EffectiveScopeResponse, ScopeCatalog};
use crate::state::AppState;

pub struct ScopeService;

impl ScopeService {
    pub fn catalog() -> ScopeCatalog {
        ScopeCatalog {
            roles: ROLES.iter().map(|r| r.to_string()).collect(),
            cities: CITIES.iter().map(|c| c.to_string()).collect(),
            permissions: PERMISSIONS.iter().map(|p| p.to_string()).collect(),
            global_city: GLOBAL_CITY.to_string(),
        }
    }

    #[instrument(skip(state))]
    pub async fn role_summaries(state: &AppState) -> Vec<RoleScopeSummary> {
        state.scopes.read().await.role_summaries()
    }

    #[instrument(skip(state))]
    pub async fn effective_scope(
        state: &AppState,
        role: &str,
        city: &str,
    ) -> Result<EffectiveScopeResponse, AppError> {
        let (role, city) = normalize_target(role, city)?;
        let scopes = state.scopes.read().await.effective_scope(role, city);
        Ok(EffectiveScopeResponse::new(role, city, scopes))
    }

    /// Merges `scopes` into the stored entries for `(role, city)`.
    #[instrument(skip(state))]
    pub async fn update_scopes(
        state: &AppState,
        role: &str,
        city: &str,
        scopes: ScopeMap,
    ) -> Result<EffectiveScopeResponse, AppError> {
        let (role, city) = normalize_target(role, city)?;
        let entries = scopes.len();

        let effective = {
            let mut store = state.scopes.write().await;
            store.set_role_scopes(role, city, scopes);
            store.effective_scope(role, city)
        };

        let (role_label, city_label) = metric_labels(role, city);
        track_scope_change(role_label, city_label);
        info!(role, city, entries, "Scopes updated");

        Ok(EffectiveScopeResponse::new(role, city, effective))
    }

    /// Sets every catalog permission for `(role, city)` to `enabled`.
    #[instrument(skip(state))]
    pub async fn set_all(
        state: &AppState,
        role: &str,
        city: &str,
        enabled: bool,
    ) -> Result<EffectiveScopeResponse, AppError> {
        let (role, city) = normalize_target(role, city)?;

        let effective = {
            let mut store = state.scopes.write().await;
            store.set_all(role, city, PERMISSIONS, enabled);
            store.effective_scope(role, city)
        };

        let (role_label, city_label) = metric_labels(role, city);
        track_scope_change(role_label, city_label);
        info!(role, city, enabled, "All scopes set");

        Ok(EffectiveScopeResponse::new(role, city, effective))
    }

    #[instrument(skip(state))]
    pub async fn scope_rows(
        state: &AppState,
        role: &str,
        city: &str,
        filter: Option<&str>,
    ) -> Result<Vec<ScopeRow>, AppError> {
        let (role, city) = normalize_target(role, city)?;
        let rows = state
            .scopes
            .read()
            .await
            .scope_rows(role, city, filter.unwrap_or_default());
        Ok(rows)
    }
}

impl EffectiveScopeResponse {
    fn new(role: &str, city: &str, scopes: ScopeMap) -> Self {
        Self {
            role: role.to_string(),
            city: city.to_string(),
            scopes,
        }
    }
}

fn normalize_target<'a>(role: &'a str, city: &'a str) -> Result<(&'a str, &'a str), AppError> {
    let role = role.trim();
    let city = city.trim();

    if role.is_empty() {
        return Err(AppError::bad_request(anyhow!("Role must not be blank")));
    }
    if city.is_empty() {
        return Err(AppError::bad_request(anyhow!("City must not be blank")));
    }

    Ok((role, city))
}

/// Label value for roles and cities outside the catalog.
const OTHER_LABEL: &str = "other";

/// Maps `(role, city)` onto catalog values so metric labels stay bounded.
fn metric_labels(role: &str, city: &str) -> (&'static str, &'static str) {
    let pick = |catalog: &'static [&'static str], value: &str| {
        catalog
            .iter()
            .copied()
            .find(|known| *known == value)
            .unwrap_or(OTHER_LABEL)
    };
    (pick(ROLES, role), pick(CITIES, city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_global_city_first() {
        let catalog = ScopeService::catalog();
        assert_eq!(catalog.cities.first().map(String::as_str), Some(GLOBAL_CITY));
        assert_eq!(catalog.permissions.len(), PERMISSIONS.len());
        assert!(catalog.roles.iter().any(|r| r == "Admin"));
    }

    #[test]
    fn test_metric_labels_fold_unknown_values() {
        assert_eq!(metric_labels("Finance", "Kampala"), ("Finance", "Kampala"));
        assert_eq!(metric_labels("Admin", GLOBAL_CITY), ("Admin", GLOBAL_CITY));
        assert_eq!(metric_labels("Ghost", "Kampala"), (OTHER_LABEL, "Kampala"));
        assert_eq!(metric_labels("Finance", "Atlantis"), ("Finance", OTHER_LABEL));
    }

    #[test]
    fn test_normalize_target_trims() {
        assert_eq!(
            normalize_target(" Finance ", "Kampala").unwrap(),
            ("Finance", "Kampala")
        );
        assert!(normalize_target("  ", "Kampala").is_err());
        assert!(normalize_target("Finance", "").is_err());
    }
}
