mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_link_success() {
    let server = common::test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let code = body["short_code"].as_str().unwrap();

    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["original_url"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["expires_at"].is_null());
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

#[tokio::test]
async fn test_create_link_with_expiry() {
    let server = common::test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "expires_in_minutes": 60 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert!(body["expires_at"].is_string());
}

#[tokio::test]
async fn test_create_link_rejects_ftp_scheme() {
    let server = common::test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "ftp://example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_rejects_out_of_range_expiry() {
    let server = common::test_server();

    for minutes in [0, 525_601] {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": "https://example.com", "expires_in_minutes": minutes }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_created_codes_are_unique() {
    let server = common::test_server();
    let mut codes = HashSet::new();

    for i in 0..20 {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;

        response.assert_status(StatusCode::CREATED);
        codes.insert(response.json::<Value>()["short_code"]
            .as_str()
            .unwrap()
            .to_string());
    }

    assert_eq!(codes.len(), 20);
}

#[tokio::test]
async fn test_list_links_returns_everything() {
    let server = common::test_server();

    for i in 0..3 {
        server
            .post("/api/links")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_link_by_id() {
    let server = common::test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/links/{id}")).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["short_code"], created["short_code"]);
}

#[tokio::test]
async fn test_get_link_unknown_id_is_404() {
    let server = common::test_server();

    let response = server.get("/api/links/999").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_link_non_numeric_id_is_400() {
    let server = common::test_server();

    let response = server.get("/api/links/not-a-number").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_link_replaces_url() {
    let server = common::test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/links/{id}"))
        .json(&json!({ "url": "https://new.example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["original_url"], "https://new.example.com");
    assert_eq!(body["short_code"], created["short_code"]);
}

#[tokio::test]
async fn test_update_link_clears_expiry_with_null() {
    let server = common::test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "expires_in_minutes": 60 }))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/links/{id}"))
        .json(&json!({ "expires_at": null }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["expires_at"].is_null());
}

#[tokio::test]
async fn test_update_link_rejects_invalid_url() {
    let server = common::test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/links/{id}"))
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let server = common::test_server();

    let response = server
        .patch("/api/links/999")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_link() {
    let server = common::test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/links/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/links/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let server = common::test_server();

    let response = server.delete("/api/links/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
