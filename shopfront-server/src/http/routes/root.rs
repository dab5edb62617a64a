//! Liveness endpoints: `/` (API banner) and `/health`
//!
//! Neither touches the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::queries::ApiResponse;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
async fn index() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("The API is listening."))
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
