use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::domain::event::{EventChanges, EventError, NewEvent};
use crate::state::{AppState, EVENTS};

use super::error::ApiError;
use super::request::{decode_body, parse_id};

// ============================================================================
// Event Routes
// ============================================================================
//
// GET    /events        list
// POST   /events/add    create
// GET    /event/{id}    fetch
// PUT    /event/{id}    partial update
// DELETE /event/{id}    cancel
//
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(list_events))
        .route("/events/add", web::post().to(create_event))
        .service(
            web::resource("/event/{id}")
                .route(web::get().to(get_event))
                .route(web::put().to(update_event))
                .route(web::delete().to(delete_event)),
        );
}

async fn list_events(state: web::Data<AppState>) -> HttpResponse {
    let events = state.events.list().await;
    state.record(EVENTS, "list", None);
    HttpResponse::Ok().json(events)
}

async fn create_event(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let new: NewEvent = decode_body(&body)?;

    let result = state.events.create(new).await;
    state.record(EVENTS, "create", result.as_ref().err().map(EventError::kind));
    let event = result?;
    state.refresh_record_gauges().await;

    Ok(HttpResponse::Created().json(json!({
        "message": "Event created successfully",
        "event": event,
    })))
}

async fn get_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path).ok_or(EventError::NotFound)?;

    let result = state.events.get(id).await;
    state.record(EVENTS, "get", result.as_ref().err().map(EventError::kind));

    Ok(HttpResponse::Ok().json(result?))
}

async fn update_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path).ok_or(EventError::NotFound)?;
    let changes: EventChanges = decode_body(&body)?;

    let result = state.events.update(id, changes).await;
    state.record(EVENTS, "update", result.as_ref().err().map(EventError::kind));

    Ok(HttpResponse::Ok().json(json!({
        "message": "Event updated successfully",
        "event": result?,
    })))
}

async fn delete_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path).ok_or(EventError::NotFound)?;

    let result = state.events.delete(id).await;
    state.record(EVENTS, "delete", result.as_ref().err().map(EventError::kind));
    result?;
    state.refresh_record_gauges().await;

    Ok(HttpResponse::Ok().json(json!({ "message": "Event cancelled successfully." })))
}
