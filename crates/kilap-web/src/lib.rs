//! Kilap Web Server
//!
//! Axum-based JSON API for the public booking site and the admin back-office.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use kilap_db::SharedStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_routes = Router::new()
        // Services
        .route(
            "/services",
            get(routes::services::list_services).post(routes::services::create_service),
        )
        .route(
            "/services/{id}",
            put(routes::services::update_service).delete(routes::services::delete_service),
        )
        // Bookings
        .route("/bookings", get(routes::bookings::list_bookings))
        .route("/bookings/{id}", get(routes::bookings::get_booking_detail))
        .route("/bookings/{id}/status", post(routes::bookings::advance_status))
        .route("/bookings/{id}/reconcile", post(routes::bookings::reconcile))
        .route("/lookup/{order_number}", get(routes::tracking::lookup))
        // Back-office
        .route("/dashboard", get(routes::dashboard::summary))
        .route("/seed", post(routes::dashboard::seed));

    let public_routes = Router::new()
        .route("/services", get(routes::services::list_services))
        .route("/testimonials", get(routes::testimonials::list_testimonials))
        .route("/bookings", post(routes::bookings::create_booking))
        .route("/track/{order_number}", get(routes::tracking::track))
        .route("/savings", post(routes::tracking::estimate_savings))
        .nest("/admin", admin_routes);

    Router::new()
        .nest("/api", public_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(store: SharedStore, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use kilap_db::MemoryStore;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Arc::new(MemoryStore::new())))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn booking_form() -> Value {
        json!({
            "name": "Budi",
            "phone": "081234567890",
            "serviceId": "svc-1",
            "date": "2024-01-01",
            "address": "Jl. A"
        })
    }

    #[tokio::test]
    async fn test_create_and_track_booking() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/bookings", Some(booking_form())).await;
        assert_eq!(status, StatusCode::CREATED);
        let order_number = body["orderNumber"].as_str().unwrap().to_string();
        assert_eq!(order_number.len(), 8);

        let (status, body) = send(&app, "GET", &format!("/api/track/{}", order_number), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["booking"]["status"], "Order Diterima");
        assert_eq!(body["statuses"].as_array().unwrap().len(), 1);
        assert_eq!(body["progress"], 25);
    }

    #[tokio::test]
    async fn test_unknown_order_is_404() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/track/NOPE0000", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("NOPE0000"));
    }

    #[tokio::test]
    async fn test_missing_fields_is_400() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/bookings", Some(json!({ "name": "Budi" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("phone"));
        assert!(body.get("partial").is_none());
    }

    #[tokio::test]
    async fn test_admin_status_update() {
        let app = app();
        let (_, body) = send(&app, "POST", "/api/bookings", Some(booking_form())).await;
        let order_number = body["orderNumber"].as_str().unwrap().to_string();

        let (status, booking) =
            send(&app, "GET", &format!("/api/admin/lookup/{}", order_number), None).await;
        assert_eq!(status, StatusCode::OK);
        let id = booking["id"].as_str().unwrap().to_string();

        let uri = format!("/api/admin/bookings/{}/status", id);
        let (status, _) = send(&app, "POST", &uri, Some(json!({ "status": "Hilang" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, entry) = send(&app, "POST", &uri, Some(json!({ "status": "Selesai" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry["status"], "Selesai");

        let (status, detail) = send(&app, "GET", &format!("/api/admin/bookings/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["statuses"][0]["status"], "Selesai");
        assert_eq!(detail["progress"], 50);

        let (_, summary) = send(&app, "GET", "/api/admin/dashboard", None).await;
        assert_eq!(summary["completedBookings"], 1);
    }

    #[tokio::test]
    async fn test_status_filter_rejects_unknown_label() {
        let app = app();
        let (status, _) = send(&app, "GET", "/api/admin/bookings?status=Hilang", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/api/admin/bookings?status=all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_service_body_is_json_400() {
        let app = app();
        let (status, body) =
            send(&app, "POST", "/api/admin/services", Some(json!({ "name": "Cuci Kilat" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("price"));

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/services",
            Some(json!({ "name": "Cuci Kilat", "price": "murah" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, services) = send(&app, "GET", "/api/services", None).await;
        assert!(services.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_then_list_services() {
        let app = app();
        let (status, report) = send(&app, "POST", "/api/admin/seed", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(report["services"], 3);

        let (status, services) = send(&app, "GET", "/api/services", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(services.as_array().unwrap().len(), 3);

        let (_, testimonials) = send(&app, "GET", "/api/testimonials", None).await;
        assert_eq!(testimonials[0]["rating"], 5.0);
    }
}
