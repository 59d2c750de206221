use serde_json::{Value, json};

use crate::common::{TestApp, routes};

fn field_values<'a>(body: &'a Value, list: &str, field: &str) -> Vec<&'a str> {
    body[list]
        .as_array()
        .expect("array field")
        .iter()
        .map(|item| item[field].as_str().expect("string field"))
        .collect()
}

#[tokio::test]
async fn empty_query_returns_400_with_empty_result_lists() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let res = app.get(&format!("{}?q=", routes::SEARCH)).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["message"], "Query parameter 'q' is required");
    assert_eq!(res.body["projects"], json!([]));
    assert_eq!(res.body["skills"], json!([]));
    assert_eq!(res.body["work_experiences"], json!([]));
    assert_eq!(res.body["profiles"], json!([]));
}

#[tokio::test]
async fn missing_query_parameter_returns_400() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::SEARCH).await;

    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn whitespace_only_query_returns_400() {
    let app = TestApp::spawn().await;

    let res = app.get(&format!("{}?q=%20%20", routes::SEARCH)).await;

    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn react_matches_across_all_categories() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let res = app.get(&format!("{}?q=react", routes::SEARCH)).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        field_values(&res.body, "projects", "title"),
        vec!["E-commerce Platform", "Portfolio Website"]
    );
    assert_eq!(field_values(&res.body, "skills", "name"), vec!["React"]);
    assert_eq!(
        field_values(&res.body, "work_experiences", "company"),
        vec!["Startup Inc"]
    );
    assert!(res.body["profiles"].is_null());
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let lower = app.get(&format!("{}?q=react", routes::SEARCH)).await;
    let upper = app.get(&format!("{}?q=REACT", routes::SEARCH)).await;

    assert_eq!(lower.status, 200);
    assert_eq!(lower.text, upper.text);
}

#[tokio::test]
async fn profile_match_is_a_singular_object() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let res = app.get(&format!("{}?q=scalable", routes::SEARCH)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["profiles"]["name"], "John Doe");
    // Profile results never carry the flattened social fields.
    let profile = res.body["profiles"].as_object().expect("profile object");
    assert!(!profile.contains_key("github"));
    assert_eq!(res.body["projects"], json!([]));
    assert_eq!(res.body["skills"], json!([]));
}

#[tokio::test]
async fn project_skill_matches_are_deduplicated() {
    let app = TestApp::spawn().await;
    app.seed().await;

    // "Django" hits project titles/descriptions AND a related skill name;
    // each project must still appear exactly once.
    let res = app.get(&format!("{}?q=django", routes::SEARCH)).await;

    assert_eq!(res.status, 200);
    assert_eq!(
        field_values(&res.body, "projects", "title"),
        vec!["E-commerce Platform", "Task Management App"]
    );
}

#[tokio::test]
async fn like_wildcards_are_matched_literally() {
    let app = TestApp::spawn().await;
    app.seed().await;

    // An unescaped "%" would match every row.
    let res = app.get(&format!("{}?q=%25", routes::SEARCH)).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["projects"], json!([]));
    assert_eq!(res.body["skills"], json!([]));
    assert_eq!(res.body["work_experiences"], json!([]));
    assert!(res.body["profiles"].is_null());
}

#[tokio::test]
async fn identical_requests_return_identical_bodies() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let first = app.get(&format!("{}?q=django", routes::SEARCH)).await;
    let second = app.get(&format!("{}?q=django", routes::SEARCH)).await;

    assert_eq!(first.status, 200);
    assert_eq!(first.text, second.text);
}
