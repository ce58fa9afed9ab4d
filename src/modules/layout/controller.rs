use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use choptop_core::serde::{deserialize_optional_f64, deserialize_optional_i64};
use choptop_core::{RowBounds, calc_rows_for_height, secondary_page_size};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RowsQuery {
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub min: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub max: Option<i64>,
}

impl RowsQuery {
    /// Bounds from the query, each missing end taken from `defaults`.
    /// Negative values count as zero.
    fn bounds(&self, defaults: RowBounds) -> RowBounds {
        let to_u32 = |v: i64| u32::try_from(v.max(0)).unwrap_or(u32::MAX);
        RowBounds::new(
            self.min.map_or(defaults.min, to_u32),
            self.max.map_or(defaults.max, to_u32),
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RowsResponse {
    /// Height the rows were computed for; absent when none was given
    pub height: Option<f64>,
    pub bounds: RowBounds,
    /// Rows for the main table
    pub rows: u32,
    /// Rows for a secondary table on the same screen
    pub secondary_rows: u32,
}

#[utoipa::path(
    get,
    path = "/api/layout/rows",
    params(
        ("height" = Option<f64>, Query, description = "Viewport height in pixels"),
        ("min" = Option<u32>, Query, description = "Lower row bound (defaults to ROWS_MIN)"),
        ("max" = Option<u32>, Query, description = "Upper row bound (defaults to ROWS_MAX)")
    ),
    responses(
        (status = 200, description = "Rows per page for the viewport", body = RowsResponse)
    ),
    tag = "Layout"
)]
#[instrument(skip(state))]
pub async fn get_rows(
    State(state): State<AppState>,
    Query(query): Query<RowsQuery>,
) -> Json<RowsResponse> {
    let bounds = query.bounds(state.rows_config.bounds);
    let rows = match query.height {
        Some(height) => calc_rows_for_height(height, bounds),
        None => bounds.min,
    };

    Json(RowsResponse {
        height: query.height,
        bounds,
        rows,
        secondary_rows: secondary_page_size(rows),
    })
}
