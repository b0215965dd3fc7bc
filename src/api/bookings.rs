use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::booking::{BookingChanges, BookingError, NewBooking};
use crate::state::{AppState, BOOKINGS};

use super::error::ApiError;
use super::request::{decode_body, parse_id};

// ============================================================================
// Booking Routes - all under /api/bookings
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/bookings")
            .route(web::get().to(list_bookings))
            .route(web::post().to(create_booking)),
    )
    .service(
        web::resource("/api/bookings/{id}")
            .route(web::get().to(get_booking))
            .route(web::put().to(update_booking))
            .route(web::delete().to(delete_booking)),
    );
}

async fn list_bookings(state: web::Data<AppState>) -> HttpResponse {
    let bookings = state.bookings.list().await;
    state.record(BOOKINGS, "list", None);
    HttpResponse::Ok().json(bookings)
}

async fn create_booking(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let new: NewBooking = decode_body(&body)?;

    let result = state.bookings.create(&state.events, new).await;
    state.record(BOOKINGS, "create", result.as_ref().err().map(BookingError::kind));
    let booking = result?;
    state.refresh_record_gauges().await;

    Ok(HttpResponse::Created().json(json!({
        "message": "Booking created successfully",
        "booking": booking,
    })))
}

async fn get_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path).ok_or(BookingError::NotFound)?;

    let result = state.bookings.get(id).await;
    state.record(BOOKINGS, "get", result.as_ref().err().map(BookingError::kind));

    Ok(HttpResponse::Ok().json(result?))
}

async fn update_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path).ok_or(BookingError::NotFound)?;
    let changes: BookingChanges = decode_body(&body)?;

    let result = state.bookings.update(id, changes).await;
    state.record(BOOKINGS, "update", result.as_ref().err().map(BookingError::kind));

    Ok(HttpResponse::Ok().json(json!({
        "message": "Booking updated successfully",
        "booking": result?,
    })))
}

async fn delete_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path).ok_or(BookingError::NotFound)?;

    let result = state.bookings.delete(id).await;
    state.record(BOOKINGS, "delete", result.as_ref().err().map(BookingError::kind));
    result?;
    state.refresh_record_gauges().await;

    Ok(HttpResponse::Ok().json(json!({ "message": "Booking cancelled successfully." })))
}
