mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_check_reports_ok() {
    let app = common::create_test_app();
    let (status, body) = common::get_json(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "devtools-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = common::create_test_app();
    let (status, body) = common::get_json(app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["status"], 404);
}
