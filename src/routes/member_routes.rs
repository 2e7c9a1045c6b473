use crate::models::{MemberGroup, NewMember, ServiceError};
use crate::utils::catalog::group_by_key;
use crate::utils::seed_data::AppData;
use crate::utils::session_from_request;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use log::info;
use serde_json::json;

// The member directory, grouped by mandate year, most recent bureau first
#[get("/members")]
async fn list_members(data: web::Data<AppData>) -> Result<HttpResponse, ServiceError> {
    info!("📋 Listing members");

    let members = data.members.list()?;
    let groups: Vec<MemberGroup> = group_by_key(members, |member| member.year.clone())
        .into_iter()
        .map(|(year, members)| MemberGroup { year, members })
        .collect();

    info!("✅ Found {} bureau years", groups.len());

    Ok(HttpResponse::Ok().json(groups))
}

// Add a member (moderators and administrators only)
#[post("/members")]
async fn create_member(
    req: HttpRequest,
    data: web::Data<AppData>,
    payload: web::Json<NewMember>,
) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);

    info!("📝 Adding member: {}", payload.name);

    let member = data.members.insert(payload.into_inner(), &session)?;

    info!("✅ Member added: {}", member.id);

    Ok(HttpResponse::Ok().json(member))
}

// Delete a member (moderators and administrators only)
#[delete("/members/{id}")]
async fn delete_member(
    req: HttpRequest,
    data: web::Data<AppData>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);
    let id = path.into_inner();

    info!("🗑️ Deleting member: {}", id);

    let removed = data.members.remove_by_id(&id, &session)?;

    Ok(HttpResponse::Ok().json(json!({
        "removed": removed,
        "id": id
    })))
}

// Register all member routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_members)
        .service(create_member)
        .service(delete_member);
}
