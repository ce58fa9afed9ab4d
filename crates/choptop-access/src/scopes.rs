//! Per-role, per-city permission scopes.
//!
//! Scopes form a three-level map `role → city → permission → bool`. The
//! [`GLOBAL_CITY`] key holds a role's default; a city entry overrides it,
//! including an explicit `false` over a global `true`. A permission with no
//! entry at either level is unset and resolves to `None`, never to a boolean
//! default.
//!
//! # Example
//!
//! ```ignore
//! use choptop_access::{ScopeStore, GLOBAL_CITY};
//!
//! let mut store = ScopeStore::new();
//! store.set_role_scopes("Finance", GLOBAL_CITY, [("events.read", true), ("payouts.view", true)]);
//! store.set_role_scopes("Finance", "Kampala", [("events.read", false)]);
//!
//! let effective = store.effective_scope("Finance", "Kampala");
//! assert_eq!(effective.get("events.read"), Some(&false));
//! assert_eq!(effective.get("payouts.view"), Some(&true));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::catalog::{DEFAULT_ADMIN_SCOPES, GLOBAL_CITY, PERMISSIONS, ROLE_ADMIN};

/// Permission key → granted flag.
pub type ScopeMap = BTreeMap<String, bool>;

/// One line of the scope editor table.
///
/// `None` means the permission is unset ("inherit") at that level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScopeRow {
    pub permission: String,
    /// Value set on the role's global scope
    pub global: Option<bool>,
    /// Value set explicitly for the queried city; always `None` for the global city
    pub city: Option<bool>,
    /// Value after applying the city override
    pub effective: Option<bool>,
}

/// Overview of the explicit entries stored for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleScopeSummary {
    pub role: String,
    /// Cities with at least one explicit entry, the global city included
    pub cities: Vec<String>,
    /// Explicit `true` entries across all cities
    pub granted: usize,
    /// Explicit `false` entries across all cities
    pub denied: usize,
}

/// In-memory scope storage for every role.
#[derive(Debug, Clone, Default)]
pub struct ScopeStore {
    roles: BTreeMap<String, BTreeMap<String, ScopeMap>>,
}

impl ScopeStore {
    /// Creates an empty store: every role/city resolves to an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the Admin role's global defaults.
    #[must_use]
    pub fn with_default_scopes() -> Self {
        let mut store = Self::new();
        store.set_role_scopes(
            ROLE_ADMIN,
            GLOBAL_CITY,
            DEFAULT_ADMIN_SCOPES.iter().map(|p| (*p, true)),
        );
        store
    }

    /// Merges `scopes` into the map stored for `(role, city)`.
    ///
    /// Supplied keys overwrite existing values; keys not supplied are kept.
    /// An empty merge leaves the store untouched.
    pub fn set_role_scopes<I, K>(&mut self, role: &str, city: &str, scopes: I)
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        let mut scopes = scopes.into_iter().peekable();
        if scopes.peek().is_none() {
            return;
        }

        let entry = self
            .roles
            .entry(role.to_string())
            .or_default()
            .entry(city.to_string())
            .or_default();

        let mut changed = 0usize;
        for (permission, value) in scopes {
            entry.insert(permission.into(), value);
            changed += 1;
        }

        debug!(role, city, changed, "Role scopes updated");
    }

    /// Sets every permission in `permissions` to `value` for `(role, city)`.
    pub fn set_all(&mut self, role: &str, city: &str, permissions: &[&str], value: bool) {
        self.set_role_scopes(role, city, permissions.iter().map(|p| (*p, value)));
    }

    /// Returns the role's global scope map (empty when never set).
    #[must_use]
    pub fn global_scope(&self, role: &str) -> ScopeMap {
        self.city_overrides(role, GLOBAL_CITY)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the entries set explicitly for `(role, city)`, if any.
    #[must_use]
    pub fn city_overrides(&self, role: &str, city: &str) -> Option<&ScopeMap> {
        self.roles.get(role).and_then(|cities| cities.get(city))
    }

    /// Resolves the merged permission map for a role at a city.
    ///
    /// Explicit city values win over global values; permissions set at
    /// neither level are absent. Querying the global city returns the global
    /// map alone.
    #[must_use]
    pub fn effective_scope(&self, role: &str, city: &str) -> ScopeMap {
        let mut effective = self.global_scope(role);
        if city == GLOBAL_CITY {
            return effective;
        }

        if let Some(overrides) = self.city_overrides(role, city) {
            effective.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        }
        effective
    }

    /// Resolves a single permission; `None` means unset.
    #[must_use]
    pub fn resolve(&self, role: &str, city: &str, permission: &str) -> Option<bool> {
        if city != GLOBAL_CITY
            && let Some(value) = self
                .city_overrides(role, city)
                .and_then(|m| m.get(permission))
        {
            return Some(*value);
        }

        self.city_overrides(role, GLOBAL_CITY)
            .and_then(|m| m.get(permission))
            .copied()
    }

    /// Builds the editor table for `(role, city)` over the permission
    /// catalog, keeping permissions whose key contains `filter`
    /// (case-insensitive).
    #[must_use]
    pub fn scope_rows(&self, role: &str, city: &str, filter: &str) -> Vec<ScopeRow> {
        let needle = filter.trim().to_lowercase();
        let is_global = city == GLOBAL_CITY;

        PERMISSIONS
            .iter()
            .filter(|p| p.to_lowercase().contains(&needle))
            .map(|p| {
                let global = self.resolve(role, GLOBAL_CITY, p);
                let city_value = if is_global {
                    None
                } else {
                    self.city_overrides(role, city)
                        .and_then(|m| m.get(*p))
                        .copied()
                };

                ScopeRow {
                    permission: (*p).to_string(),
                    global,
                    city: city_value,
                    effective: city_value.or(global),
                }
            })
            .collect()
    }

    /// Summarises the explicit entries of every role that has any.
    #[must_use]
    pub fn role_summaries(&self) -> Vec<RoleScopeSummary> {
        self.roles
            .iter()
            .filter_map(|(role, cities)| {
                let cities: Vec<(&String, &ScopeMap)> =
                    cities.iter().filter(|(_, m)| !m.is_empty()).collect();
                if cities.is_empty() {
                    return None;
                }

                let values = cities.iter().flat_map(|(_, m)| m.values());
                let granted = values.clone().filter(|v| **v).count();
                let denied = values.filter(|v| !**v).count();

                Some(RoleScopeSummary {
                    role: role.clone(),
                    cities: cities.iter().map(|(c, _)| (*c).clone()).collect(),
                    granted,
                    denied,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EVENTS_READ, ORDERS_READ, PAYOUTS_VIEW};

    #[test]
    fn test_empty_merge_does_not_register_role() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Ghost", "Kampala", Vec::<(String, bool)>::new());
        store.set_all("Ghost", GLOBAL_CITY, &[], true);

        assert!(store.role_summaries().is_empty());
        assert!(store.city_overrides("Ghost", "Kampala").is_none());
    }

    #[test]
    fn test_empty_merge_keeps_existing_entries() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Finance", "Kampala", [(EVENTS_READ, false)]);
        store.set_role_scopes("Finance", "Kampala", Vec::<(String, bool)>::new());

        let summaries = store.role_summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].cities, vec!["Kampala".to_string()]);
        assert_eq!(summaries[0].denied, 1);
    }

    #[test]
    fn test_city_false_overrides_global_true() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Finance", GLOBAL_CITY, [(EVENTS_READ, true), (PAYOUTS_VIEW, true)]);
        store.set_role_scopes("Finance", "Kampala", [(EVENTS_READ, false)]);

        let effective = store.effective_scope("Finance", "Kampala");
        assert_eq!(effective.get(EVENTS_READ), Some(&false));
        assert_eq!(effective.get(PAYOUTS_VIEW), Some(&true));

        let global = store.effective_scope("Finance", GLOBAL_CITY);
        assert_eq!(global.get(EVENTS_READ), Some(&true));
    }

    #[test]
    fn test_global_city_returns_global_map() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Support", GLOBAL_CITY, [("tickets.read", true)]);

        let effective = store.effective_scope("Support", GLOBAL_CITY);
        assert_eq!(effective.get("tickets.read"), Some(&true));
        assert_eq!(effective.len(), 1);
    }

    #[test]
    fn test_city_without_overrides_falls_back_to_global() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Support", GLOBAL_CITY, [(ORDERS_READ, true)]);

        let effective = store.effective_scope("Support", "Nairobi");
        assert_eq!(effective, store.global_scope("Support"));
    }

    #[test]
    fn test_unknown_role_and_city_resolve_empty() {
        let store = ScopeStore::new();
        assert!(store.effective_scope("Nobody", "Nowhere").is_empty());
        assert!(store.effective_scope("Nobody", GLOBAL_CITY).is_empty());
        assert_eq!(store.resolve("Nobody", "Nowhere", EVENTS_READ), None);
    }

    #[test]
    fn test_city_true_over_unset_global() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Organizer", "Entebbe", [(EVENTS_READ, true)]);

        assert_eq!(store.resolve("Organizer", "Entebbe", EVENTS_READ), Some(true));
        assert_eq!(store.resolve("Organizer", GLOBAL_CITY, EVENTS_READ), None);
        assert_eq!(store.resolve("Organizer", "Kampala", EVENTS_READ), None);
    }

    #[test]
    fn test_set_merges_without_discarding_keys() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Admin", GLOBAL_CITY, [(EVENTS_READ, true)]);
        store.set_role_scopes("Admin", GLOBAL_CITY, [(ORDERS_READ, false)]);
        store.set_role_scopes("Admin", GLOBAL_CITY, [(EVENTS_READ, false)]);

        let global = store.global_scope("Admin");
        assert_eq!(global.get(EVENTS_READ), Some(&false));
        assert_eq!(global.get(ORDERS_READ), Some(&false));
        assert_eq!(global.len(), 2);
    }

    #[test]
    fn test_global_city_query_ignores_other_cities() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Admin", "Kampala", [(EVENTS_READ, false)]);

        assert!(store.effective_scope("Admin", GLOBAL_CITY).is_empty());
    }

    #[test]
    fn test_set_all() {
        let mut store = ScopeStore::new();
        store.set_all("Read-only", "Mombasa", PERMISSIONS, false);

        let effective = store.effective_scope("Read-only", "Mombasa");
        assert_eq!(effective.len(), PERMISSIONS.len());
        assert!(effective.values().all(|v| !*v));
    }

    #[test]
    fn test_default_scopes_seed_admin() {
        let store = ScopeStore::with_default_scopes();
        let global = store.global_scope(ROLE_ADMIN);
        for permission in DEFAULT_ADMIN_SCOPES {
            assert_eq!(global.get(*permission), Some(&true));
        }
        assert!(store.global_scope("Finance").is_empty());
    }

    #[test]
    fn test_scope_rows_report_each_level() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Finance", GLOBAL_CITY, [(EVENTS_READ, true)]);
        store.set_role_scopes("Finance", "Kampala", [(EVENTS_READ, false), (ORDERS_READ, true)]);

        let rows = store.scope_rows("Finance", "Kampala", "");
        assert_eq!(rows.len(), PERMISSIONS.len());

        let events = rows.iter().find(|r| r.permission == EVENTS_READ).unwrap();
        assert_eq!(events.global, Some(true));
        assert_eq!(events.city, Some(false));
        assert_eq!(events.effective, Some(false));

        let orders = rows.iter().find(|r| r.permission == ORDERS_READ).unwrap();
        assert_eq!(orders.global, None);
        assert_eq!(orders.effective, Some(true));

        let payouts = rows.iter().find(|r| r.permission == PAYOUTS_VIEW).unwrap();
        assert_eq!(payouts.effective, None);
    }

    #[test]
    fn test_scope_rows_global_city_has_no_city_column() {
        let mut store = ScopeStore::new();
        store.set_role_scopes("Finance", GLOBAL_CITY, [(EVENTS_READ, true)]);

        let rows = store.scope_rows("Finance", GLOBAL_CITY, "events");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.city.is_none()));
        assert_eq!(rows[0].effective, Some(true));
    }

    #[test]
    fn test_scope_rows_filter_is_case_insensitive() {
        let store = ScopeStore::new();
        let rows = store.scope_rows("Admin", GLOBAL_CITY, "PAYOUTS");
        let names: Vec<_> = rows.iter().map(|r| r.permission.as_str()).collect();
        assert_eq!(names, vec!["payouts.view", "payouts.execute"]);
    }

    #[test]
    fn test_role_summaries() {
        let mut store = ScopeStore::with_default_scopes();
        store.set_role_scopes("Admin", "Nairobi", [(EVENTS_READ, false)]);

        let summaries = store.role_summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].role, "Admin");
        assert_eq!(summaries[0].cities, vec!["All".to_string(), "Nairobi".to_string()]);
        assert_eq!(summaries[0].granted, DEFAULT_ADMIN_SCOPES.len());
        assert_eq!(summaries[0].denied, 1);
    }

    #[test]
    fn test_scope_row_serializes_unset_as_null() {
        let row = ScopeRow {
            permission: EVENTS_READ.to_string(),
            global: None,
            city: Some(false),
            effective: Some(false),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""global":null"#));
        assert!(json.contains(r#""city":false"#));
    }
}
