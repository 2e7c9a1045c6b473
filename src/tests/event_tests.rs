#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::models::UserRole;
    use crate::routes::event_routes;
    use crate::utils::seed_data::AppData;
    use crate::utils::{jwt, Authentication, Session};

    fn token_for(role: UserRole) -> String {
        let mut session = Session::anonymous();
        let user = session.login(role);
        jwt::generate_token(&user).unwrap()
    }

    #[actix_rt::test]
    async fn listing_returns_the_seeded_events() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(event_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/events").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        let events = response.as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["category"], "Innovation");
        assert_eq!(events[2]["category"], "Formation");
    }

    #[actix_rt::test]
    async fn featured_returns_the_first_innovation() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(event_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/events/featured").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(response["title"], "Lancement de \"Mon Calculateur\"");
        assert_eq!(response["category"], "Innovation");
    }

    #[actix_rt::test]
    async fn created_event_gets_the_placeholder_image_when_none_is_given() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(event_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/events")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Moderator))))
            .set_json(&json!({
                "title": "Journée Portes Ouvertes",
                "date": "20 Avril 2024",
                "description": "Visite des laboratoires et présentation des travaux du club.",
                "category": "Événement"
            }))
            .to_request();

        let created: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(created["imageUrl"], "https://picsum.photos/800/600");

        let request = test::TestRequest::get().uri("/events").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        let events = response.as_array().unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0]["title"], "Journée Portes Ouvertes");
    }

    #[actix_rt::test]
    async fn creating_without_a_date_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(event_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/events")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Admin))))
            .set_json(&json!({
                "title": "Journée Portes Ouvertes",
                "description": "Visite des laboratoires.",
                "category": "Événement"
            }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);

        let request = test::TestRequest::get().uri("/events").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response.as_array().unwrap().len(), 3);
    }

    #[actix_rt::test]
    async fn deleting_an_event_requires_the_capability() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(event_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::delete().uri("/events/1").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 403);

        let request = test::TestRequest::delete()
            .uri("/events/1")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Moderator))))
            .to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response["removed"], true);

        let request = test::TestRequest::get().uri("/events").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response.as_array().unwrap().len(), 2);
    }
}
