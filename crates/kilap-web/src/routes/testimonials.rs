//! Testimonial route handlers.

use axum::{extract::State, Json};
use kilap_core::testimonial::{self, model::Testimonial};

use super::ApiResult;
use crate::state::AppState;

pub async fn list_testimonials(State(state): State<AppState>) -> ApiResult<Json<Vec<Testimonial>>> {
    Ok(Json(testimonial::list_testimonials(state.store()).await?))
}
