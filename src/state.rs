use std::sync::Arc;

use tokio::sync::RwLock;

use choptop_access::ScopeStore;
use choptop_config::{CorsConfig, RowsConfig, ServerConfig};
use choptop_models::AnalyticsSnapshot;

use crate::modules::cms::service::ContentStore;
use crate::modules::journeys::service::JourneyStore;
use crate::modules::payments::service::PaymentLedger;

/// Everything a handler can reach. The stores are shared behind async
/// read/write locks; cloning the state only clones the handles.
#[derive(Clone, Debug)]
pub struct AppState {
    pub scopes: Arc<RwLock<ScopeStore>>,
    pub analytics: Arc<RwLock<AnalyticsSnapshot>>,
    pub content: Arc<RwLock<ContentStore>>,
    pub journeys: Arc<RwLock<JourneyStore>>,
    pub ledger: Arc<RwLock<PaymentLedger>>,
    pub rows_config: RowsConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(scopes: ScopeStore, rows_config: RowsConfig, cors_config: CorsConfig) -> Self {
        Self {
            scopes: Arc::new(RwLock::new(scopes)),
            analytics: Arc::new(RwLock::new(AnalyticsSnapshot::default())),
            content: Arc::new(RwLock::new(ContentStore::default())),
            journeys: Arc::new(RwLock::new(JourneyStore::default())),
            ledger: Arc::new(RwLock::new(PaymentLedger::default())),
            rows_config,
            cors_config,
        }
    }
}

pub fn init_app_state(server: &ServerConfig) -> AppState {
    let scopes = if server.seed_default_scopes {
        ScopeStore::with_default_scopes()
    } else {
        ScopeStore::new()
    };

    AppState::new(scopes, RowsConfig::from_env(), CorsConfig::from_env())
}
