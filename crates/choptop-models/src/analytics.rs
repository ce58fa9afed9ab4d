//! Console analytics events and counters.
//!
//! Every screen action worth counting is one [`AnalyticsEvent`] variant. The
//! counters in [`AnalyticsSnapshot`] are updated through a single `match` in
//! [`AnalyticsSnapshot::record`], which never fails: counters saturate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recipients reached by one journey activation.
pub const ACTIVATION_SEND_BATCH: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    CmsPublish,
    CmsSchedule,
    CmsDraft,
    JourneysActivate,
    JourneysTest,
    JourneysSends {
        /// Messages sent; absent or zero counts as one
        #[serde(default)]
        count: Option<u64>,
    },
    DisputesEvidence,
}

impl AnalyticsEvent {
    /// Stable event name, used as a metrics label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CmsPublish => "cms_publish",
            Self::CmsSchedule => "cms_schedule",
            Self::CmsDraft => "cms_draft",
            Self::JourneysActivate => "journeys_activate",
            Self::JourneysTest => "journeys_test",
            Self::JourneysSends { .. } => "journeys_sends",
            Self::DisputesEvidence => "disputes_evidence",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CmsCounters {
    pub published: u64,
    pub scheduled: u64,
    pub drafts: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JourneyCounters {
    pub activated: u64,
    pub tested: u64,
    pub sends: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DisputeCounters {
    pub evidence: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsSnapshot {
    pub cms: CmsCounters,
    pub journeys: JourneyCounters,
    pub disputes: DisputeCounters,
}

impl AnalyticsSnapshot {
    pub fn record(&mut self, event: &AnalyticsEvent) {
        fn bump(counter: &mut u64, by: u64) {
            *counter = counter.saturating_add(by);
        }

        match event {
            AnalyticsEvent::CmsPublish => bump(&mut self.cms.published, 1),
            AnalyticsEvent::CmsSchedule => bump(&mut self.cms.scheduled, 1),
            AnalyticsEvent::CmsDraft => bump(&mut self.cms.drafts, 1),
            AnalyticsEvent::JourneysActivate => bump(&mut self.journeys.activated, 1),
            AnalyticsEvent::JourneysTest => bump(&mut self.journeys.tested, 1),
            AnalyticsEvent::JourneysSends { count } => {
                let by = count.filter(|c| *c > 0).unwrap_or(1);
                bump(&mut self.journeys.sends, by);
            }
            AnalyticsEvent::DisputesEvidence => bump(&mut self.disputes.evidence, 1),
        }
    }
}
