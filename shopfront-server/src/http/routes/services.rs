//! Service endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::models::Service;
use crate::queries::{self, ApiResponse};
use crate::state::AppState;

/// GET /api/services - all products flagged as services
async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Service>>>, ApiError> {
    Ok(Json(queries::list_services(state.store()).await?))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/services", get(list_services))
}
