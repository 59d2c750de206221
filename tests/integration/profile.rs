use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use portfolio_api::entity::profile;

use crate::common::{TestApp, routes};

fn john() -> serde_json::Value {
    json!({
        "name": "John Doe",
        "email": "john.doe@example.com",
        "education": "Bachelor of Science in Computer Science",
        "bio": "Experienced software engineer."
    })
}

mod get_profile {
    use super::*;

    #[tokio::test]
    async fn returns_404_when_no_profile_exists() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PROFILE).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "No profile found");
    }

    #[tokio::test]
    async fn omits_social_fields_when_no_social_links_row() {
        let app = TestApp::spawn().await;
        app.post(routes::PROFILE, &john()).await;

        let res = app.get(routes::PROFILE).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"], "John Doe");
        let obj = res.body.as_object().expect("object body");
        assert!(!obj.contains_key("github"));
        assert!(!obj.contains_key("linkedin"));
        assert!(!obj.contains_key("portfolio"));
    }

    #[tokio::test]
    async fn merges_social_links_when_present() {
        let app = TestApp::spawn().await;
        app.seed().await;

        let res = app.get(routes::PROFILE).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"], "John Doe");
        assert_eq!(res.body["github"], "https://github.com/johndoe");
        assert_eq!(res.body["linkedin"], "https://linkedin.com/in/johndoe");
        assert_eq!(res.body["portfolio"], "https://johndoe.com");
    }

    #[tokio::test]
    async fn reseeding_keeps_a_single_profile() {
        let app = TestApp::spawn().await;
        app.seed().await;
        app.seed().await;

        let count = profile::Entity::find()
            .count(&app.db)
            .await
            .expect("count profiles");
        assert_eq!(count, 1);

        let res = app.get(routes::PROFILE).await;
        assert_eq!(res.status, 200);
    }
}

mod create_profile {
    use super::*;

    #[tokio::test]
    async fn creates_a_profile_and_returns_201() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PROFILE, &john()).await;

        assert_eq!(res.status, 201);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["email"], "john.doe@example.com");
        assert_eq!(res.body["bio"], "Experienced software engineer.");
    }

    #[tokio::test]
    async fn missing_fields_are_reported_per_field() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PROFILE, &json!({})).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["name"][0], "This field is required.");
        assert_eq!(res.body["email"][0], "This field is required.");
        assert_eq!(res.body["education"][0], "This field is required.");
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let app = TestApp::spawn().await;

        let mut body = john();
        body["email"] = json!("not-an-email");
        let res = app.post(routes::PROFILE, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["email"][0], "Enter a valid email address.");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_creating_a_row() {
        let app = TestApp::spawn().await;
        app.post(routes::PROFILE, &john()).await;

        let mut body = john();
        body["name"] = json!("Jane Doe");
        let res = app.post(routes::PROFILE, &body).await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["email"][0],
            "profile with this email already exists."
        );

        let count = profile::Entity::find()
            .count(&app.db)
            .await
            .expect("count profiles");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn bio_is_optional_and_defaults_to_empty() {
        let app = TestApp::spawn().await;

        let mut body = john();
        body.as_object_mut().unwrap().remove("bio");
        let res = app.post(routes::PROFILE, &body).await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["bio"], "");
    }
}

mod update_profile {
    use super::*;

    #[tokio::test]
    async fn returns_404_when_no_profile_exists() {
        let app = TestApp::spawn().await;

        let res = app.put(routes::PROFILE, &john()).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn overwrites_the_first_profile() {
        let app = TestApp::spawn().await;
        app.post(routes::PROFILE, &john()).await;

        let res = app
            .put(
                routes::PROFILE,
                &json!({
                    "name": "John Q. Doe",
                    "email": "john.q@example.com",
                    "education": "MSc Computer Science",
                    "bio": "Updated bio."
                }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"], "John Q. Doe");

        let fetched = app.get(routes::PROFILE).await;
        assert_eq!(fetched.body["email"], "john.q@example.com");
        assert_eq!(fetched.body["bio"], "Updated bio.");
    }

    #[tokio::test]
    async fn partial_payload_is_rejected() {
        let app = TestApp::spawn().await;
        app.post(routes::PROFILE, &john()).await;

        let res = app.put(routes::PROFILE, &json!({"name": "Just a Name"})).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["email"][0], "This field is required.");
        assert_eq!(res.body["education"][0], "This field is required.");
    }

    #[tokio::test]
    async fn a_profile_may_keep_its_own_email() {
        let app = TestApp::spawn().await;
        app.post(routes::PROFILE, &john()).await;

        let res = app.put(routes::PROFILE, &john()).await;

        assert_eq!(res.status, 200);
    }

    #[tokio::test]
    async fn email_of_another_profile_is_rejected() {
        let app = TestApp::spawn().await;
        app.post(routes::PROFILE, &john()).await;

        let mut second = john();
        second["email"] = json!("jane@example.com");
        second["name"] = json!("Jane Doe");
        app.post(routes::PROFILE, &second).await;

        // First profile tries to take the second one's email.
        let mut update = john();
        update["email"] = json!("jane@example.com");
        let res = app.put(routes::PROFILE, &update).await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["email"][0],
            "profile with this email already exists."
        );
    }
}
