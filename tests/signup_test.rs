//! Signup API integration tests
//!
//! Tests for POST /api/auth/signup against a mocked platform.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::MockServer;

use common::*;
use enrollgate::backend::auth::messages;

fn signup_body() -> Value {
    json!({
        "email": "ada@school.example",
        "password": "securepassword123",
        "full_name": "Ada Lovelace"
    })
}

async fn mount_account_tables(mock: &MockServer) {
    mount_insert(mock, "profiles").await;
    mount_insert(mock, "user_roles").await;
    mount_insert(mock, "teachers").await;
}

#[tokio::test]
async fn test_signup_success() {
    let mock = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_create_user(&mock, "ada@school.example", user_id).await;
    mount_account_tables(&mock).await;
    let server = test_server(&mock);

    let response = server.post("/api/auth/signup").json(&signup_body()).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true, "userId": user_id }));

    let profiles = inserted_rows(&mock, "profiles").await;
    assert_eq!(
        profiles,
        vec![json!({ "id": user_id, "full_name": "Ada Lovelace", "email": "ada@school.example" })]
    );
    assert_eq!(
        inserted_rows(&mock, "user_roles").await,
        vec![json!({ "user_id": user_id, "role": "teacher" })]
    );
    assert_eq!(
        inserted_rows(&mock, "teachers").await,
        vec![json!({ "profile_id": user_id })]
    );
}

#[tokio::test]
async fn test_signup_creates_confirmed_user_with_service_key() {
    let mock = MockServer::start().await;
    mount_create_user(&mock, "ada@school.example", Uuid::new_v4()).await;
    mount_account_tables(&mock).await;
    let server = test_server(&mock);

    server.post("/api/auth/signup").json(&signup_body()).await;

    let requests = requests_to(&mock, "POST", "/auth/v1/admin/users").await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.headers.get("apikey").unwrap(), SERVICE_KEY);
    assert_eq!(
        request.headers.get("authorization").unwrap(),
        format!("Bearer {}", SERVICE_KEY).as_str()
    );

    let body: Value = request.body_json().unwrap();
    assert_eq!(body["email_confirm"], true);
    assert_eq!(body["user_metadata"]["full_name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_signup_missing_field() {
    let mock = MockServer::start().await;
    let server = test_server(&mock);

    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "email": "ada@school.example", "password": "securepassword123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], messages::SIGNUP_FIELDS_REQUIRED);
    assert!(mock.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_signup_invalid_body() {
    let mock = MockServer::start().await;
    let server = test_server(&mock);

    let response = server.post("/api/auth/signup").text("not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], messages::INVALID_BODY);
}

#[tokio::test]
async fn test_signup_without_configuration() {
    let server = unconfigured_server();

    let response = server.post("/api/auth/signup").json(&signup_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], messages::CONFIGURATION_ERROR);
}

#[tokio::test]
async fn test_signup_email_taken() {
    let mock = MockServer::start().await;
    mount_create_user_failure(
        &mock,
        "ada@school.example",
        422,
        json!({
            "code": 422,
            "error_code": "email_exists",
            "msg": "A user with this email address has already been registered"
        }),
    )
    .await;
    let server = test_server(&mock);

    let response = server.post("/api/auth/signup").json(&signup_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "This email is already registered");
    assert!(inserted_rows(&mock, "profiles").await.is_empty());
}

#[tokio::test]
async fn test_signup_role_failure_is_not_rolled_back() {
    let mock = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_create_user(&mock, "ada@school.example", user_id).await;
    mount_insert(&mock, "profiles").await;
    mount_insert_failure(
        &mock,
        "user_roles",
        json!({ "user_id": user_id }),
        500,
        json!({ "code": "XX000", "message": "internal error" }),
    )
    .await;
    let server = test_server(&mock);

    let response = server.post("/api/auth/signup").json(&signup_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to assign role"));
    assert_eq!(delete_user_calls(&mock).await, 0);
    assert!(inserted_rows(&mock, "teachers").await.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_profile_is_rejected() {
    let mock = MockServer::start().await;
    let user_id = Uuid::new_v4();
    mount_create_user(&mock, "ada@school.example", user_id).await;
    mount_insert_failure(
        &mock,
        "profiles",
        json!({ "id": user_id }),
        409,
        json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"profiles_pkey\"",
            "details": format!("Key (id)=({}) already exists.", user_id)
        }),
    )
    .await;
    let server = test_server(&mock);

    let response = server.post("/api/auth/signup").json(&signup_body()).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to create profile"));
    assert!(inserted_rows(&mock, "user_roles").await.is_empty());
}
