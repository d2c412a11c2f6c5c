//! Order tracking route handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use kilap_core::savings::{self, ResourceSavings};
use kilap_core::{tracking, Booking, KilapError, TrackingInfo};
use serde::Deserialize;

use super::ApiResult;
use crate::state::AppState;

/// Public tracking page: booking, oldest-first history and progress.
pub async fn track(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> ApiResult<Json<TrackingInfo>> {
    let info = tracking::track(state.store(), &order_number)
        .await?
        .ok_or_else(|| KilapError::not_found(format!("Order {}", order_number)))?;
    Ok(Json(info))
}

/// Admin lookup by order number.
pub async fn lookup(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> ApiResult<Json<Booking>> {
    let booking = tracking::lookup_by_order_number(state.store(), &order_number)
        .await?
        .ok_or_else(|| KilapError::not_found(format!("Order {}", order_number)))?;
    Ok(Json(booking))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRequest {
    pub service_name: String,
    pub pairs: u32,
}

pub async fn estimate_savings(
    body: Result<Json<SavingsRequest>, JsonRejection>,
) -> ApiResult<Json<ResourceSavings>> {
    let Json(req) = body?;
    Ok(Json(savings::estimate(&req.service_name, req.pairs)?))
}
