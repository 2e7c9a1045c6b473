use crate::models::{EventCategory, NewEvent, ServiceError};
use crate::utils::seed_data::AppData;
use crate::utils::session_from_request;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use log::{error, info};
use serde_json::json;

// List all events, newest first
#[get("/events")]
async fn list_events(data: web::Data<AppData>) -> Result<HttpResponse, ServiceError> {
    info!("📋 Listing events");

    let events = data.events.list()?;

    info!("✅ Found {} events", events.len());

    Ok(HttpResponse::Ok().json(events))
}

// The home page highlight: the most recent innovation
#[get("/events/featured")]
async fn featured_event(data: web::Data<AppData>) -> Result<HttpResponse, ServiceError> {
    let innovations = data
        .events
        .list_filtered(|event| event.category == EventCategory::Innovation)?;

    match innovations.into_iter().next() {
        Some(event) => Ok(HttpResponse::Ok().json(event)),
        None => {
            error!("❌ No innovation event to feature");
            Err(ServiceError::NotFound)
        }
    }
}

// Add an event (moderators and administrators only)
#[post("/events")]
async fn create_event(
    req: HttpRequest,
    data: web::Data<AppData>,
    payload: web::Json<NewEvent>,
) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);

    info!("📝 Adding event: {}", payload.title);

    let event = data.events.insert(payload.into_inner(), &session)?;

    info!("✅ Event added: {}", event.id);

    Ok(HttpResponse::Ok().json(event))
}

// Delete an event (moderators and administrators only)
#[delete("/events/{id}")]
async fn delete_event(
    req: HttpRequest,
    data: web::Data<AppData>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);
    let id = path.into_inner();

    info!("🗑️ Deleting event: {}", id);

    let removed = data.events.remove_by_id(&id, &session)?;

    Ok(HttpResponse::Ok().json(json!({
        "removed": removed,
        "id": id
    })))
}

// Register all event routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_events)
        .service(featured_event)
        .service(create_event)
        .service(delete_event);
}
