use tracing::{debug, instrument};

use choptop_models::{AnalyticsEvent, AnalyticsSnapshot};
use choptop_observability::track_analytics_event;

use crate::state::AppState;

pub struct AnalyticsService;

impl AnalyticsService {
    /// Counts one console event. Recording never fails.
    #[instrument(skip(state))]
    pub async fn record(state: &AppState, event: AnalyticsEvent) -> AnalyticsSnapshot {
        let snapshot = {
            let mut counters = state.analytics.write().await;
            counters.record(&event);
            *counters
        };

        track_analytics_event(event.name());
        debug!(event = event.name(), "Analytics event recorded");

        snapshot
    }

    #[instrument(skip(state))]
    pub async fn snapshot(state: &AppState) -> AnalyticsSnapshot {
        *state.analytics.read().await
    }
}
