use actix_web::{web, HttpResponse};
use prometheus::{Encoder, TextEncoder};

use crate::api::ApiError;
use crate::state::AppState;

/// Mount /metrics and /health on the API server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(metrics_handler))
        .route("/health", web::get().to(health_handler));
}

async fn metrics_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    state.refresh_record_gauges().await;

    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}

async fn health_handler(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "event-booking-api",
        "started_at": state.started_at.to_rfc3339(),
        "events": state.events.len().await,
        "bookings": state.bookings.len().await,
    }))
}
