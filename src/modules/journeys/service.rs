use anyhow::anyhow;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use choptop_core::AppError;
use choptop_models::Journey;
use choptop_models::analytics::{ACTIVATION_SEND_BATCH, AnalyticsEvent};
use choptop_models::journeys::{
    CreateJourneyDto, DEFAULT_JOURNEY_NAME, JourneyFilterParams, JourneyStatus,
    JourneyTestResponse, UpdateJourneyDto, default_flow,
};

use crate::modules::analytics::service::AnalyticsService;
use crate::state::AppState;

/// Journeys in creation order.
#[derive(Debug, Default)]
pub struct JourneyStore {
    journeys: Vec<Journey>,
}

impl JourneyStore {
    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    fn get(&self, id: Uuid) -> Option<&Journey> {
        self.journeys.iter().find(|j| j.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Journey> {
        self.journeys.iter_mut().find(|j| j.id == id)
    }
}

fn not_found() -> AppError {
    AppError::not_found(anyhow!("Journey not found"))
}

pub struct JourneyService;

impl JourneyService {
    #[instrument(skip(state))]
    pub async fn list(state: &AppState, filters: JourneyFilterParams) -> Vec<Journey> {
        state
            .journeys
            .read()
            .await
            .journeys()
            .iter()
            .filter(|j| filters.status.is_none_or(|s| j.status == s))
            .cloned()
            .collect()
    }

    /// Creates a draft journey on the default flow template.
    #[instrument(skip(state))]
    pub async fn create(state: &AppState, dto: CreateJourneyDto) -> Journey {
        let now = Utc::now();
        let journey = Journey {
            id: Uuid::new_v4(),
            name: dto.name.unwrap_or_else(|| DEFAULT_JOURNEY_NAME.to_string()),
            trigger: dto.trigger.unwrap_or_default(),
            channel: dto.channel.unwrap_or_default(),
            segment: dto.segment.unwrap_or_default(),
            status: JourneyStatus::Draft,
            nodes: default_flow(),
            created_at: now,
            updated_at: now,
        };

        state.journeys.write().await.journeys.push(journey.clone());
        info!(id = %journey.id, name = %journey.name, "Journey created");

        journey
    }

    #[instrument(skip(state))]
    pub async fn get(state: &AppState, id: Uuid) -> Result<Journey, AppError> {
        state
            .journeys
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(not_found)
    }

    /// Saves the editor's settings; the status is left unchanged.
    #[instrument(skip(state))]
    pub async fn update(
        state: &AppState,
        id: Uuid,
        dto: UpdateJourneyDto,
    ) -> Result<Journey, AppError> {
        let mut store = state.journeys.write().await;
        let journey = store.get_mut(id).ok_or_else(not_found)?;

        if let Some(name) = dto.name {
            journey.name = name;
        }
        if let Some(trigger) = dto.trigger {
            journey.trigger = trigger;
        }
        if let Some(channel) = dto.channel {
            journey.channel = channel;
        }
        if let Some(segment) = dto.segment {
            journey.segment = segment;
        }
        journey.updated_at = Utc::now();

        Ok(journey.clone())
    }

    #[instrument(skip(state))]
    pub async fn send_test(state: &AppState, id: Uuid) -> Result<JourneyTestResponse, AppError> {
        let journey = Self::get(state, id).await?;

        AnalyticsService::record(state, AnalyticsEvent::JourneysTest).await;
        info!(id = %journey.id, channel = ?journey.channel, "Journey test sent");

        Ok(JourneyTestResponse {
            journey_id: journey.id,
            channel: journey.channel,
            message: format!("Test sent for \"{}\"", journey.name),
        })
    }

    /// Activates the journey and counts the first send batch.
    #[instrument(skip(state))]
    pub async fn activate(state: &AppState, id: Uuid) -> Result<Journey, AppError> {
        let journey = {
            let mut store = state.journeys.write().await;
            let journey = store.get_mut(id).ok_or_else(not_found)?;
            journey.status = JourneyStatus::Active;
            journey.updated_at = Utc::now();
            journey.clone()
        };

        AnalyticsService::record(state, AnalyticsEvent::JourneysActivate).await;
        AnalyticsService::record(
            state,
            AnalyticsEvent::JourneysSends {
                count: Some(ACTIVATION_SEND_BATCH),
            },
        )
        .await;
        info!(id = %journey.id, "Journey activated");

        Ok(journey)
    }
}
