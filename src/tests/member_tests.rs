#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::json;

    use crate::models::UserRole;
    use crate::routes::member_routes;
    use crate::utils::seed_data::AppData;
    use crate::utils::{jwt, Authentication, Session};

    fn token_for(role: UserRole) -> String {
        let mut session = Session::anonymous();
        let user = session.login(role);
        jwt::generate_token(&user).unwrap()
    }

    #[actix_rt::test]
    async fn directory_is_grouped_by_mandate_year_descending() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(member_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::get().uri("/members").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        let groups = response.as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["year"], "2023-2024");
        assert_eq!(groups[1]["year"], "2022-2023");

        // Every seeded member appears in exactly one group
        let total: usize = groups
            .iter()
            .map(|group| group["members"].as_array().unwrap().len())
            .sum();
        assert_eq!(total, 4);

        // Insertion order within a group is preserved
        assert_eq!(groups[0]["members"][0]["name"], "Jean Dupont");
        assert_eq!(groups[0]["members"][1]["name"], "Marie Curie");
    }

    #[actix_rt::test]
    async fn a_new_mandate_year_becomes_the_leading_group() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(member_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/members")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Admin))))
            .set_json(&json!({
                "name": "Ada Lovelace",
                "role": "Présidente",
                "year": "2024-2025"
            }))
            .to_request();

        let created: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(created["photoUrl"], "https://picsum.photos/200/200");

        let request = test::TestRequest::get().uri("/members").to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        let groups = response.as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0]["year"], "2024-2025");
        assert_eq!(groups[0]["members"][0]["name"], "Ada Lovelace");
    }

    #[actix_rt::test]
    async fn creating_without_a_role_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(member_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/members")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Moderator))))
            .set_json(&json!({
                "name": "Ada Lovelace",
                "year": "2024-2025"
            }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
    }

    #[actix_rt::test]
    async fn deleting_a_member_requires_the_capability() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppData::seeded()))
                .wrap(Authentication)
                .configure(member_routes::init_routes),
        )
        .await;

        let request = test::TestRequest::delete()
            .uri("/members/3")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Student))))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 403);

        let request = test::TestRequest::delete()
            .uri("/members/3")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserRole::Admin))))
            .to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response["removed"], true);
    }
}
