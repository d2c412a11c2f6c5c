//! Booking route handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use kilap_core::admin::{self, model::{BookingDetail, BookingFilter}};
use kilap_core::{booking, tracking, Booking, BookingInput, OrderStatus, StatusEntry};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiResult;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub order_number: String,
}

pub async fn create_booking(
    State(state): State<AppState>,
    body: Result<Json<BookingInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateBookingResponse>)> {
    let Json(req) = body?;
    let order_number = booking::create_booking(state.store(), req).await?;
    Ok((StatusCode::CREATED, Json(CreateBookingResponse { order_number })))
}

#[derive(Deserialize)]
pub struct ListBookingsParams {
    /// Exact status label, or `all`.
    pub status: Option<String>,
    /// Search over name, order number and phone.
    pub q: Option<String>,
}

pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
) -> ApiResult<Json<Vec<Booking>>> {
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(label) => Some(label.parse::<OrderStatus>()?),
    };
    let filter = BookingFilter {
        status,
        search: params.q,
    };
    Ok(Json(admin::list_bookings(state.store(), &filter).await?))
}

pub async fn get_booking_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingDetail>> {
    Ok(Json(admin::booking_detail(state.store(), &id).await?))
}

#[derive(Deserialize)]
pub struct AdvanceStatusRequest {
    pub status: String,
}

pub async fn advance_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AdvanceStatusRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StatusEntry>)> {
    let Json(req) = body?;
    let entry = tracking::advance_status(state.store(), &id, &req.status).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[derive(Serialize)]
pub struct ReconcileResponse {
    pub repaired: bool,
}

pub async fn reconcile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReconcileResponse>> {
    let repaired = tracking::reconcile(state.store(), &id).await?;
    if repaired {
        info!(booking_id = %id, "Status log repaired via admin");
    }
    Ok(Json(ReconcileResponse { repaired }))
}
