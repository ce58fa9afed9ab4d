use anyhow::anyhow;
use chrono::Utc;
use rand::Rng;
use tracing::{info, instrument, warn};

use choptop_core::{AppError, paginate};
use choptop_models::analytics::AnalyticsEvent;
use choptop_models::cms::{
    City, ContentAction, ContentFilterParams, ContentPreview, ContentType, CreateContentDto,
    DEFAULT_AUTHOR, Locale, PLACEHOLDER_SLUG, PLACEHOLDER_TITLE, PaginatedContentResponse,
    UpdateContentDto,
};
use choptop_models::{ContentItem, ContentStatus, slugify};
use choptop_observability::track_content_transition;

use crate::modules::analytics::service::AnalyticsService;
use crate::state::AppState;

/// Rows shown by the editor list when the caller gives no sizing hint.
pub const CMS_PAGE_SIZE: i64 = 10;

const ID_ATTEMPTS: usize = 32;

/// Content items, newest first.
#[derive(Debug, Default)]
pub struct ContentStore {
    items: Vec<ContentItem>,
}

impl ContentStore {
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ContentItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Draws a `CMS-NNNN` id not used by any stored item.
    fn next_id<R: Rng>(&self, rng: &mut R) -> Option<String> {
        (0..ID_ATTEMPTS)
            .map(|_| format!("CMS-{}", rng.gen_range(1000..10000)))
            .find(|id| !self.contains(id))
    }

    fn insert_front(&mut self, item: ContentItem) {
        self.items.insert(0, item);
    }
}

/// Applies an edit to `item`. A title change regenerates the slug while the
/// slug is still the placeholder and the edit does not set one.
fn apply_update(item: &mut ContentItem, dto: UpdateContentDto) {
    if let Some(content_type) = dto.content_type {
        item.content_type = content_type;
    }
    if let Some(locale) = dto.locale {
        item.locale = locale;
    }
    if let Some(city) = dto.city {
        item.city = city;
    }
    if let Some(scheduled_at) = dto.scheduled_at {
        item.scheduled_at = scheduled_at;
    }

    if let Some(title) = dto.title {
        if dto.slug.is_none() && item.slug == PLACEHOLDER_SLUG {
            let slug = slugify(&title);
            if !slug.is_empty() {
                item.slug = slug;
            }
        }
        item.title = title;
    }
    if let Some(slug) = dto.slug {
        item.slug = slug;
    }
}

fn transition_event(action: ContentAction) -> Option<AnalyticsEvent> {
    match action {
        ContentAction::SaveDraft => Some(AnalyticsEvent::CmsDraft),
        ContentAction::SubmitForReview => None,
        ContentAction::Schedule => Some(AnalyticsEvent::CmsSchedule),
        ContentAction::Publish => Some(AnalyticsEvent::CmsPublish),
    }
}

pub struct CmsService;

impl CmsService {
    #[instrument(skip(state))]
    pub async fn list(state: &AppState, filters: ContentFilterParams) -> PaginatedContentResponse {
        let page_size = filters
            .pagination
            .page_size_or(state.rows_config.bounds, CMS_PAGE_SIZE);

        let matched: Vec<ContentItem> = {
            let store = state.content.read().await;
            store
                .items()
                .iter()
                .filter(|item| filters.matches(item))
                .cloned()
                .collect()
        };

        let (data, meta) = paginate(matched, filters.pagination.page(), page_size);
        PaginatedContentResponse { data, meta }
    }

    /// Adds a new item at the top of the list, filling unset fields with the
    /// editor's defaults.
    #[instrument(skip(state))]
    pub async fn create(state: &AppState, dto: CreateContentDto) -> Result<ContentItem, AppError> {
        let mut store = state.content.write().await;

        let id = store.next_id(&mut rand::thread_rng()).ok_or_else(|| {
            warn!(items = store.items().len(), "No free CMS id left");
            AppError::conflict(anyhow!("Could not allocate a content id"))
        })?;

        let title = dto.title.unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());
        let slug = if title == PLACEHOLDER_TITLE {
            PLACEHOLDER_SLUG.to_string()
        } else {
            let slug = slugify(&title);
            if slug.is_empty() { PLACEHOLDER_SLUG.to_string() } else { slug }
        };

        let item = ContentItem {
            id,
            content_type: dto.content_type.unwrap_or(ContentType::Article),
            title,
            slug,
            status: ContentStatus::Draft,
            locale: dto.locale.unwrap_or(Locale::EnUg),
            city: dto.city.unwrap_or(City::Kampala),
            scheduled_at: dto.scheduled_at.unwrap_or_else(|| Utc::now().naive_utc()),
            author: dto.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        };

        store.insert_front(item.clone());
        info!(id = %item.id, "Content item created");

        Ok(item)
    }

    #[instrument(skip(state))]
    pub async fn get(state: &AppState, id: &str) -> Result<ContentItem, AppError> {
        state
            .content
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(anyhow!("Content item not found")))
    }

    #[instrument(skip(state))]
    pub async fn update(
        state: &AppState,
        id: &str,
        dto: UpdateContentDto,
    ) -> Result<ContentItem, AppError> {
        let mut store = state.content.write().await;
        let item = store
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(anyhow!("Content item not found")))?;

        apply_update(item, dto);

        Ok(item.clone())
    }

    /// Moves an item to the action's status. Any status may move to any
    /// other; draft, schedule, and publish are counted in analytics.
    #[instrument(skip(state))]
    pub async fn apply_action(
        state: &AppState,
        id: &str,
        action: ContentAction,
    ) -> Result<ContentItem, AppError> {
        let item = {
            let mut store = state.content.write().await;
            let item = store
                .get_mut(id)
                .ok_or_else(|| AppError::not_found(anyhow!("Content item not found")))?;
            item.status = action.target_status();
            item.clone()
        };

        track_content_transition(item.status.label());
        if let Some(event) = transition_event(action) {
            AnalyticsService::record(state, event).await;
        }
        info!(id = %item.id, status = %item.status, "Content status changed");

        Ok(item)
    }

    #[instrument(skip(state))]
    pub async fn preview(state: &AppState, id: &str) -> Result<ContentPreview, AppError> {
        let item = Self::get(state, id).await?;
        Ok(ContentPreview {
            path: item.preview_path(),
            id: item.id,
            title: item.title,
            city: item.city,
        })
    }
}
