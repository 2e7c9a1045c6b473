// crsp-service/src/models/mod.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use actix_web::{HttpResponse, ResponseError};

// Import the entity modules
pub mod resource;
pub use resource::*;

pub mod event;
pub use event::*;

pub mod member;
pub use member::*;

// Simulated user roles, serialized with the site's French display names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Étudiant")]
    Student,
    #[serde(rename = "Modérateur")]
    Moderator,
    #[serde(rename = "Administrateur")]
    Admin,
}

// User model for the simulated session
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

// Request to open a simulated session with a chosen role
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// JWT claims structure carrying the session user
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,  // Subject (user ID)
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub exp: usize,   // Expiration time
    pub iat: usize,   // Issued at
}

// Custom error types
#[derive(Debug)]
pub enum ServiceError {
    InternalServerError,
    BadRequest(String),
    ValidationError(String),
    Unauthorized,
    NotFound,
    Forbidden,
}

// Implement Display for ServiceError
impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::InternalServerError => write!(f, "Internal Server Error"),
            ServiceError::BadRequest(msg) => write!(f, "BadRequest: {}", msg),
            ServiceError::ValidationError(field) => write!(f, "Missing required field: {}", field),
            ServiceError::Unauthorized => write!(f, "Unauthorized"),
            ServiceError::NotFound => write!(f, "Not Found"),
            ServiceError::Forbidden => write!(f, "Forbidden"),
        }
    }
}

// Implement std::error::Error for ServiceError
impl std::error::Error for ServiceError {}

// Implement ResponseError for ServiceError
impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::InternalServerError =>
                HttpResponse::InternalServerError().json("Internal Server Error"),
            ServiceError::BadRequest(ref message) =>
                HttpResponse::BadRequest().json(message),
            ServiceError::ValidationError(ref field) =>
                HttpResponse::BadRequest().json(format!("Missing required field: {}", field)),
            ServiceError::Unauthorized =>
                HttpResponse::Unauthorized().json("Unauthorized"),
            ServiceError::NotFound =>
                HttpResponse::NotFound().json("Not Found"),
            ServiceError::Forbidden =>
                HttpResponse::Forbidden().json("Forbidden: You don't have permission to modify this content"),
        }
    }
}
