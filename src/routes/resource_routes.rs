use crate::models::{NewResource, ResourceFilter, ServiceError};
use crate::utils::seed_data::{AppData, ACADEMIC_YEARS, SEMESTERS};
use crate::utils::session_from_request;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use log::info;
use serde_json::json;

// List resources matching the search/year/semester criteria; empty criteria
// return the whole collection, newest first
#[get("/resources")]
async fn list_resources(
    data: web::Data<AppData>,
    query: web::Query<ResourceFilter>,
) -> Result<HttpResponse, ServiceError> {
    let filter = query.into_inner();

    info!("📋 Listing resources: {:?}", filter);

    let resources = data.resources.list_filtered(|resource| filter.matches(resource))?;

    info!("✅ Found {} resources", resources.len());

    Ok(HttpResponse::Ok().json(resources))
}

// Reference lists for the filter and entry forms
#[get("/resources/filters")]
async fn get_filters() -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(json!({
        "years": ACADEMIC_YEARS,
        "semesters": SEMESTERS
    })))
}

// Add a resource (moderators and administrators only)
#[post("/resources")]
async fn create_resource(
    req: HttpRequest,
    data: web::Data<AppData>,
    payload: web::Json<NewResource>,
) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);

    info!("📝 Adding resource: {}", payload.title);

    let resource = data.resources.insert(payload.into_inner(), &session)?;

    info!("✅ Resource added: {}", resource.id);

    Ok(HttpResponse::Ok().json(resource))
}

// Delete a resource (moderators and administrators only). Deleting an
// unknown id is reported, not an error.
#[delete("/resources/{id}")]
async fn delete_resource(
    req: HttpRequest,
    data: web::Data<AppData>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);
    let id = path.into_inner();

    info!("🗑️ Deleting resource: {}", id);

    let removed = data.resources.remove_by_id(&id, &session)?;

    Ok(HttpResponse::Ok().json(json!({
        "removed": removed,
        "id": id
    })))
}

// Register all resource routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_resources)
        .service(get_filters)
        .service(create_resource)
        .service(delete_resource);
}
