//! Route handlers.

pub mod bookings;
pub mod dashboard;
pub mod services;
pub mod testimonials;
pub mod tracking;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kilap_core::KilapError;
use serde::Serialize;

/// JSON error body returned by every handler.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    /// Set when the first write of a two-step update landed and the second
    /// did not, so the client can warn instead of showing a plain failure.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub partial: bool,
    #[serde(rename = "bookingId", skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(rename = "orderNumber", skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
}

#[derive(Debug)]
pub struct ApiError(pub StatusCode, pub ErrorBody);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<KilapError> for ApiError {
    fn from(err: KilapError) -> Self {
        let status = match &err {
            KilapError::Validation(_) => StatusCode::BAD_REQUEST,
            KilapError::NotFound(_) => StatusCode::NOT_FOUND,
            KilapError::PartialFailure { .. } => StatusCode::BAD_GATEWAY,
            KilapError::Store(_) | KilapError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %err, "Request failed");
        }

        let (booking_id, order_number) = match &err {
            KilapError::PartialFailure {
                booking_id,
                order_number,
                ..
            } => (Some(booking_id.clone()), order_number.clone()),
            _ => (None, None),
        };

        ApiError(
            status,
            ErrorBody {
                partial: err.is_partial_failure(),
                error: err.to_string(),
                booking_id,
                order_number,
            },
        )
    }
}

/// Bodies that are not valid JSON for the target type are client errors too,
/// reported in the same JSON shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(
            StatusCode::BAD_REQUEST,
            ErrorBody {
                error: format!("Invalid request body: {}", rejection.body_text()),
                partial: false,
                booking_id: None,
                order_number: None,
            },
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilap_db::StoreError;
    use serde_json::Value;

    fn body_json(err: &ApiError) -> Value {
        serde_json::to_value(&err.1).unwrap()
    }

    #[test]
    fn test_partial_failure_is_502_with_ids() {
        let err = ApiError::from(KilapError::PartialFailure {
            booking_id: "b1".to_string(),
            order_number: Some("AB12CD34".to_string()),
            step: "initial status record",
            source: StoreError::OperationFailed("write refused".to_string()),
        });

        assert_eq!(err.0, StatusCode::BAD_GATEWAY);
        let body = body_json(&err);
        assert_eq!(body["partial"], true);
        assert_eq!(body["bookingId"], "b1");
        assert_eq!(body["orderNumber"], "AB12CD34");
        assert!(body["error"].as_str().unwrap().contains("initial status record"));
    }

    #[test]
    fn test_partial_failure_without_order_number() {
        let err = ApiError::from(KilapError::PartialFailure {
            booking_id: "b1".to_string(),
            order_number: None,
            step: "status log append",
            source: StoreError::OperationFailed("write refused".to_string()),
        });
        let body = body_json(&err);
        assert_eq!(body["partial"], true);
        assert!(body.get("orderNumber").is_none());
    }

    #[test]
    fn test_store_and_malformed_are_500() {
        let store = ApiError::from(KilapError::Store(StoreError::OperationFailed(
            "timeout".to_string(),
        )));
        assert_eq!(store.0, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&store);
        assert!(body.get("partial").is_none());
        assert!(body.get("bookingId").is_none());

        let malformed = ApiError::from(KilapError::Malformed("bad status".to_string()));
        assert_eq!(malformed.0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_errors() {
        assert_eq!(ApiError::from(KilapError::validation("x")).0, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(KilapError::not_found("x")).0, StatusCode::NOT_FOUND);
    }
}
