//! REST surface of the address directory
//!
//! | Method | Path              | Success        |
//! |--------|-------------------|----------------|
//! | GET    | `/addresses`      | 200 + list     |
//! | GET    | `/addresses/{id}` | 200 + address  |
//! | POST   | `/addresses`      | 201 + address  |
//! | PUT    | `/addresses/{id}` | 200 + address  |
//! | DELETE | `/addresses/{id}` | 204            |
//! | GET    | `/health`         | 200            |

mod handlers;
pub mod server;

use crate::core::directory::AddressDirectory;
use crate::utils::error::AddressError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use server::AddressServer;

/// `request_timeout` 需大於黑名單查詢的最長重試時間，由配置驗證保證
pub fn router(directory: Arc<AddressDirectory>, request_timeout: Duration) -> Router {
    Router::new()
        .route(
            "/addresses",
            get(handlers::list_addresses).post(handlers::create_address),
        )
        .route(
            "/addresses/{id}",
            get(handlers::get_address)
                .put(handlers::update_address)
                .delete(handlers::delete_address),
        )
        .route("/health", get(handlers::health))
        .with_state(directory)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error = match status {
            StatusCode::NOT_FOUND => "not_found",
            StatusCode::BAD_REQUEST => "bad_request",
            StatusCode::BAD_GATEWAY => "bad_gateway",
            _ => "internal_error",
        };

        if status.is_server_error() {
            tracing::error!("❌ Request failed: {} (Category: {:?})", self, self.category());
        }

        let body = ErrorBody {
            error,
            message: self.user_friendly_message(),
        };
        (status, Json(body)).into_response()
    }
}
