use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

use crate::domain::booking::BookingError;
use crate::domain::event::EventError;

// ============================================================================
// API Errors - every failure leaves the server as `{"message": ...}`
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Malformed JSON body.")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Route not found.")]
    RouteNotFound,

    #[error("Internal server error.")]
    Metrics(#[from] prometheus::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Event(EventError::MissingFields)
            | ApiError::Booking(BookingError::MissingFields)
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Event(EventError::NotFound)
            | ApiError::Booking(BookingError::EventNotFound | BookingError::NotFound)
            | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            ApiError::Metrics(source) => {
                tracing::error!(error = %source, "Failed to encode metrics");
            }
            ApiError::MalformedBody(source) => {
                tracing::debug!(error = %source, "Rejected request body");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), message = %self, "Request failed");
            }
        }

        HttpResponse::build(status).json(json!({ "message": self.to_string() }))
    }
}
