use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use choptop_access::{RoleScopeSummary, ScopeRow};
use choptop_core::AppError;

use crate::modules::scopes::model::{
    EffectiveScopeResponse, ScopeCatalog, ScopeRowsQuery, SetAllScopesDto, UpdateScopesDto,
};
use crate::modules::scopes::service::ScopeService;
use crate::state::AppState;
use crate::validator::{JsonBody, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/scopes/catalog",
    responses(
        (status = 200, description = "Roles, cities, and permissions", body = ScopeCatalog)
    ),
    tag = "Scopes"
)]
pub async fn get_catalog() -> Json<ScopeCatalog> {
    Json(ScopeService::catalog())
}

#[utoipa::path(
    get,
    path = "/api/scopes/roles",
    responses(
        (status = 200, description = "Explicit entries per configured role", body = Vec<RoleScopeSummary>)
    ),
    tag = "Scopes"
)]
#[instrument(skip(state))]
pub async fn get_role_summaries(State(state): State<AppState>) -> Json<Vec<RoleScopeSummary>> {
    Json(ScopeService::role_summaries(&state).await)
}

#[utoipa::path(
    get,
    path = "/api/scopes/{role}/{city}",
    params(
        ("role" = String, Path, description = "Role name, e.g. Finance"),
        ("city" = String, Path, description = "City name, or All for the global scope")
    ),
    responses(
        (status = 200, description = "Effective scope", body = EffectiveScopeResponse),
        (status = 400, description = "Blank role or city")
    ),
    tag = "Scopes"
)]
#[instrument(skip(state))]
pub async fn get_effective_scope(
    State(state): State<AppState>,
    Path((role, city)): Path<(String, String)>,
) -> Result<Json<EffectiveScopeResponse>, AppError> {
    let scope = ScopeService::effective_scope(&state, &role, &city).await?;
    Ok(Json(scope))
}

#[utoipa::path(
    put,
    path = "/api/scopes/{role}/{city}",
    params(
        ("role" = String, Path, description = "Role name"),
        ("city" = String, Path, description = "City name, or All for the global scope")
    ),
    request_body = UpdateScopesDto,
    responses(
        (status = 200, description = "Scopes merged; returns the new effective scope", body = EffectiveScopeResponse),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Blank permission key")
    ),
    tag = "Scopes"
)]
#[instrument(skip(state))]
pub async fn update_scopes(
    State(state): State<AppState>,
    Path((role, city)): Path<(String, String)>,
    ValidatedJson(dto): ValidatedJson<UpdateScopesDto>,
) -> Result<Json<EffectiveScopeResponse>, AppError> {
    let scope = ScopeService::update_scopes(&state, &role, &city, dto.scopes).await?;
    Ok(Json(scope))
}

#[utoipa::path(
    post,
    path = "/api/scopes/{role}/{city}/all",
    params(
        ("role" = String, Path, description = "Role name"),
        ("city" = String, Path, description = "City name, or All for the global scope")
    ),
    request_body = SetAllScopesDto,
    responses(
        (status = 200, description = "Every catalog permission set", body = EffectiveScopeResponse),
        (status = 400, description = "Malformed body")
    ),
    tag = "Scopes"
)]
#[instrument(skip(state))]
pub async fn set_all_scopes(
    State(state): State<AppState>,
    Path((role, city)): Path<(String, String)>,
    JsonBody(dto): JsonBody<SetAllScopesDto>,
) -> Result<Json<EffectiveScopeResponse>, AppError> {
    let scope = ScopeService::set_all(&state, &role, &city, dto.enabled).await?;
    Ok(Json(scope))
}

#[utoipa::path(
    get,
    path = "/api/scopes/{role}/{city}/rows",
    params(
        ("role" = String, Path, description = "Role name"),
        ("city" = String, Path, description = "City name, or All for the global scope"),
        ("q" = Option<String>, Query, description = "Case-insensitive permission filter")
    ),
    responses(
        (status = 200, description = "Scope editor rows", body = Vec<ScopeRow>)
    ),
    tag = "Scopes"
)]
#[instrument(skip(state))]
pub async fn get_scope_rows(
    State(state): State<AppState>,
    Path((role, city)): Path<(String, String)>,
    Query(query): Query<ScopeRowsQuery>,
) -> Result<Json<Vec<ScopeRow>>, AppError> {
    let rows = ScopeService::scope_rows(&state, &role, &city, query.q.as_deref()).await?;
    Ok(Json(rows))
}
