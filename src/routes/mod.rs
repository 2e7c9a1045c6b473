// src/routes/mod.rs
pub mod auth_routes;
pub mod resource_routes;
pub mod event_routes;
pub mod member_routes;
