//! Location endpoints
//!
//! - `GET /api/location` lists locations; `?mode=full` attaches hours
//! - `GET /api/location/{id}` returns one location with its hours

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::LocationId;
use crate::models::{ListMode, LocationDetails};
use crate::queries::{self, ApiResponse, LocationList};
use crate::state::AppState;

/// Query parameters for the listing
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub mode: Option<String>,
}

/// GET /api/location
async fn list_locations(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ApiResponse<LocationList>>, ApiError> {
    // An unparseable query string (e.g. a repeated `mode`) is not `full`
    let mode = match params {
        Ok(Query(params)) => ListMode::from_param(params.mode.as_deref()),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed location query");
            ListMode::Basic
        }
    };
    tracing::debug!(?mode, "listing locations");

    Ok(Json(queries::list_locations(state.store(), mode).await?))
}

/// GET /api/location/{id}
async fn get_location(
    State(state): State<AppState>,
    location: LocationId,
) -> Result<Json<ApiResponse<LocationDetails>>, ApiError> {
    let Some(id) = location.id else {
        return Ok(Json(queries::location_not_found()));
    };

    Ok(Json(
        queries::get_location(state.store(), id, &location.raw).await?,
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/location", get(list_locations))
        .route("/api/location/{id}", get(get_location))
}
