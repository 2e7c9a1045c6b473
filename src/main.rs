//Third-party-dependencies
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use crsp_service::routes::{auth_routes, event_routes, member_routes, resource_routes};
use crsp_service::utils::seed_data::AppData;
use crsp_service::utils::Authentication;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // address the server will run on
    let address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:9090".to_string());

    // Collections are seeded once and shared across workers; a restart
    // resets everything to the seed
    let data = web::Data::new(AppData::seeded());

    info!("🚀 CRSP service started at {}", address);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive()) // the site frontend runs on its own origin
            .wrap(Authentication)
            .configure(auth_routes::init_routes)
            .configure(resource_routes::init_routes)
            .configure(event_routes::init_routes)
            .configure(member_routes::init_routes)
    })
        .bind(address)?
        .run()
        .await
}
