use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

/// Request span, completion log and HTTP metrics for every request.
///
/// Routes are labelled by their pattern (`/event/{id}`), never by the raw
/// path, to keep metric cardinality bounded.
pub async fn track_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let state = req.app_data::<web::Data<AppState>>().cloned();
    let method = req.method().to_string();
    let route = req.match_pattern().unwrap_or_else(|| "unmatched".to_string());
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!("http_request", %request_id, %method, %route);
    let started = Instant::now();

    let response = next.call(req).instrument(span.clone()).await?;

    let status = response.status().as_u16();
    let elapsed = started.elapsed();
    span.in_scope(|| {
        tracing::info!(
            status,
            latency_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "Request completed"
        );
    });

    if let Some(state) = state {
        state
            .metrics
            .record_http_request(&method, &route, status, elapsed.as_secs_f64());
    }

    Ok(response)
}
