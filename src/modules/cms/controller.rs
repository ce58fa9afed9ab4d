use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use choptop_core::AppError;
use choptop_models::ContentItem;
use choptop_models::cms::{
    ContentAction, ContentFilterParams, ContentPreview, CreateContentDto,
    PaginatedContentResponse, UpdateContentDto,
};

use crate::modules::cms::service::CmsService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/cms",
    params(
        ("q" = Option<String>, Query, description = "Search over id, title, slug, city, locale, type and status"),
        ("status" = Option<String>, Query, description = "draft, in_review, scheduled or published"),
        ("content_type" = Option<String>, Query, description = "article, banner, category, guide or page"),
        ("locale" = Option<String>, Query, description = "en-UG, en-KE or sw-KE"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("page_size" = Option<i64>, Query, description = "Items per page (1-100, default: 10)"),
        ("viewport_height" = Option<f64>, Query, description = "Derive the page size from this height")
    ),
    responses(
        (status = 200, description = "Content items, newest first", body = PaginatedContentResponse)
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn get_content(
    State(state): State<AppState>,
    Query(filters): Query<ContentFilterParams>,
) -> Json<PaginatedContentResponse> {
    Json(CmsService::list(&state, filters).await)
}

#[utoipa::path(
    post,
    path = "/api/cms",
    request_body = CreateContentDto,
    responses(
        (status = 201, description = "Draft created", body = ContentItem),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "No content id available"),
        (status = 422, description = "Validation failed")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn create_content(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContentDto>,
) -> Result<(StatusCode, Json<ContentItem>), AppError> {
    let item = CmsService::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/cms/{id}",
    params(
        ("id" = String, Path, description = "Content id, e.g. CMS-1234")
    ),
    responses(
        (status = 200, description = "Content item", body = ContentItem),
        (status = 404, description = "Content item not found")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn get_content_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>, AppError> {
    let item = CmsService::get(&state, &id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/api/cms/{id}",
    params(
        ("id" = String, Path, description = "Content id")
    ),
    request_body = UpdateContentDto,
    responses(
        (status = 200, description = "Content item updated", body = ContentItem),
        (status = 404, description = "Content item not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateContentDto>,
) -> Result<Json<ContentItem>, AppError> {
    let item = CmsService::update(&state, &id, dto).await?;
    Ok(Json(item))
}

#[utoipa::path(
    get,
    path = "/api/cms/{id}/preview",
    params(
        ("id" = String, Path, description = "Content id")
    ),
    responses(
        (status = 200, description = "Public preview location", body = ContentPreview),
        (status = 404, description = "Content item not found")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn preview_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentPreview>, AppError> {
    let preview = CmsService::preview(&state, &id).await?;
    Ok(Json(preview))
}

async fn transition(
    state: &AppState,
    id: &str,
    action: ContentAction,
) -> Result<Json<ContentItem>, AppError> {
    let item = CmsService::apply_action(state, id, action).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/cms/{id}/draft",
    params(("id" = String, Path, description = "Content id")),
    responses(
        (status = 200, description = "Saved as draft", body = ContentItem),
        (status = 404, description = "Content item not found")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn save_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>, AppError> {
    transition(&state, &id, ContentAction::SaveDraft).await
}

#[utoipa::path(
    post,
    path = "/api/cms/{id}/review",
    params(("id" = String, Path, description = "Content id")),
    responses(
        (status = 200, description = "Submitted for review", body = ContentItem),
        (status = 404, description = "Content item not found")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn submit_for_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>, AppError> {
    transition(&state, &id, ContentAction::SubmitForReview).await
}

#[utoipa::path(
    post,
    path = "/api/cms/{id}/schedule",
    params(("id" = String, Path, description = "Content id")),
    responses(
        (status = 200, description = "Scheduled", body = ContentItem),
        (status = 404, description = "Content item not found")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn schedule_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>, AppError> {
    transition(&state, &id, ContentAction::Schedule).await
}

#[utoipa::path(
    post,
    path = "/api/cms/{id}/publish",
    params(("id" = String, Path, description = "Content id")),
    responses(
        (status = 200, description = "Published", body = ContentItem),
        (status = 404, description = "Content item not found")
    ),
    tag = "CMS"
)]
#[instrument(skip(state))]
pub async fn publish_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentItem>, AppError> {
    transition(&state, &id, ContentAction::Publish).await
}
