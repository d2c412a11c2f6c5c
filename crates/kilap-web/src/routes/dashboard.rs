//! Back-office dashboard and data import handlers.

use axum::{extract::State, http::StatusCode, Json};
use kilap_core::dashboard::{self, model::DashboardSummary};
use kilap_core::seed::{self, SeedReport};

use super::ApiResult;
use crate::state::AppState;

pub async fn summary(State(state): State<AppState>) -> ApiResult<Json<DashboardSummary>> {
    Ok(Json(dashboard::summary(state.store()).await?))
}

/// Import the stock services and testimonials.
pub async fn seed(State(state): State<AppState>) -> ApiResult<(StatusCode, Json<SeedReport>)> {
    let report = seed::seed_all(state.store()).await?;
    Ok((StatusCode::CREATED, Json(report)))
}
