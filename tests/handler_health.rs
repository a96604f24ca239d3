mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["store"]["message"], "0 repositories");
}

#[tokio::test]
async fn test_health_reports_store_size() {
    let server = common::make_server();
    common::create_repository(&server, "one").await;
    common::create_repository(&server, "two").await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["checks"]["store"]["message"],
        "2 repositories"
    );
}
