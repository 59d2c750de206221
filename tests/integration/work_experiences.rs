use crate::common::{TestApp, routes};

#[tokio::test]
async fn experiences_are_ordered_newest_first() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let res = app.get(routes::WORK_EXPERIENCES).await;

    assert_eq!(res.status, 200);
    let items = res.body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["company"], "Tech Corp");
    assert_eq!(items[0]["start_date"], "2020-01-01");
    assert_eq!(items[1]["company"], "Startup Inc");
    assert_eq!(items[1]["end_date"], "2019-12-31");
}

#[tokio::test]
async fn ongoing_position_has_null_end_date() {
    let app = TestApp::spawn().await;
    app.seed().await;

    let res = app.get(routes::WORK_EXPERIENCES).await;

    assert!(res.body[0]["end_date"].is_null());
}

#[tokio::test]
async fn empty_store_returns_an_empty_list() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::WORK_EXPERIENCES).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, serde_json::json!([]));
}
