mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_reports_ok_and_version() {
    let server = common::test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
