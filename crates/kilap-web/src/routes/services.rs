//! Service route handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use kilap_core::service::{self, model::{Service, ServiceInput}};

use super::ApiResult;
use crate::state::AppState;

pub async fn list_services(State(state): State<AppState>) -> ApiResult<Json<Vec<Service>>> {
    Ok(Json(service::list_services(state.store()).await?))
}

pub async fn create_service(
    State(state): State<AppState>,
    body: Result<Json<ServiceInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    let Json(req) = body?;
    let created = service::create_service(state.store(), req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ServiceInput>, JsonRejection>,
) -> ApiResult<Json<Service>> {
    let Json(req) = body?;
    Ok(Json(service::update_service(state.store(), &id, req).await?))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    service::delete_service(state.store(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
