// ============================================================================
// API Module - HTTP surface of the booking service
// ============================================================================
//
// Handlers parse the request, call one store operation and render JSON.
// Every failure is an ApiError, rendered as `{"message": ...}`.
//
// ============================================================================

// Private module declarations
mod bookings;
mod error;
mod events;
mod middleware;
mod request;


use actix_web::{web, HttpResponse};

pub use error::ApiError;
pub use middleware::track_requests;

/// Register every route, including /metrics and /health.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(events::configure)
        .configure(bookings::configure)
        .configure(crate::metrics::configure)
        .default_service(web::to(route_not_found));
}

async fn route_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}
