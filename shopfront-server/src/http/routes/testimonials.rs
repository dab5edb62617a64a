//! Testimonial endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::models::Testimonial;
use crate::queries::{self, ApiResponse};
use crate::state::AppState;

/// GET /api/testimonials
async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Testimonial>>>, ApiError> {
    Ok(Json(queries::list_testimonials(state.store()).await?))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/testimonials", get(list_testimonials))
}
