use crate::models::{LoginRequest, LoginResponse, ServiceError};
use crate::utils::{jwt, session_from_request, Session};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::{error, info};
use serde_json::json;

// Simulated login: the caller chooses a role and receives a token for the
// fixed synthetic user. No password is involved anywhere.
#[post("/auth/login")]
async fn login(request: web::Json<LoginRequest>) -> Result<HttpResponse, ServiceError> {
    info!("🔑 Simulated login with role: {:?}", request.role);

    let mut session = Session::anonymous();
    let user = session.login(request.role);

    // Generate JWT token carrying the session user
    let token = jwt::generate_token(&user)?;

    info!("✅ Session opened for: {}", user.name);

    // Return token in headers as well as response body
    let response = LoginResponse {
        token: token.clone(),
        user,
    };

    Ok(HttpResponse::Ok()
        .append_header(("Authorization", format!("Bearer {}", token)))
        .json(response))
}

// Close the simulated session. Tokens are stateless, so the server only
// acknowledges; the client discards its copy.
#[post("/auth/logout")]
async fn logout(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let mut session = session_from_request(&req);
    session.logout();

    info!("👋 Session closed");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Session closed"
    })))
}

// Get current user info (requires a session)
#[get("/auth/me")]
async fn me(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    let session = session_from_request(&req);

    if let Some(user) = session.user() {
        info!("✅ Found session user: {}", user.name);
        return Ok(HttpResponse::Ok().json(json!({
            "user": user,
            "canMutate": session.can_mutate()
        })));
    }

    error!("❌ Unauthorized access to /auth/me");
    Err(ServiceError::Unauthorized)
}

// Register all auth routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(logout)
        .service(me);
}
