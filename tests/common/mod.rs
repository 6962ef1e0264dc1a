//! Common test utilities and helpers
//!
//! Every integration test runs the real router against a `wiremock` server
//! standing in for the platform's auth API and REST gateway.
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{
    body_partial_json, header, method, path, query_param, query_param_contains,
};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use enrollgate::backend::platform::PlatformClient;
use enrollgate::backend::routes::create_router;
use enrollgate::backend::server::state::AppState;
use enrollgate::shared::config::PlatformConfig;

pub const ANON_KEY: &str = "test-anon-key";
pub const SERVICE_KEY: &str = "test-service-key";
pub const ADMIN_TOKEN: &str = "admin-access-token";

/// Configuration pointing at the mock platform
pub fn platform_config(mock: &MockServer) -> PlatformConfig {
    PlatformConfig::builder()
        .url(mock.uri())
        .anon_key(ANON_KEY)
        .service_role_key(SERVICE_KEY)
        .build()
        .unwrap()
}

/// Test server wired to the mock platform
pub fn test_server(mock: &MockServer) -> TestServer {
    let client = PlatformClient::new(platform_config(mock)).unwrap();
    TestServer::new(create_router(AppState::new(Some(client)))).unwrap()
}

/// Test server started without platform settings
pub fn unconfigured_server() -> TestServer {
    TestServer::new(create_router(AppState::new(None))).unwrap()
}

pub fn auth_user(id: Uuid, email: &str) -> Value {
    json!({
        "id": id,
        "aud": "authenticated",
        "email": email,
        "user_metadata": {}
    })
}

/// Admin create-user call for `email` returns `id`
pub async fn mount_create_user(mock: &MockServer, email: &str, id: Uuid) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/admin/users"))
        .and(body_partial_json(json!({ "email": email })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_user(id, email)))
        .mount(mock)
        .await;
}

/// Admin create-user call for `email` fails
pub async fn mount_create_user_failure(mock: &MockServer, email: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/admin/users"))
        .and(body_partial_json(json!({ "email": email })))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(mock)
        .await;
}

/// Every insert into `table` succeeds
pub async fn mount_insert(mock: &MockServer, table: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/rest/v1/{}", table)))
        .respond_with(ResponseTemplate::new(201))
        .mount(mock)
        .await;
}

/// Inserts into `table` whose body contains `row` fail; takes precedence over `mount_insert`
pub async fn mount_insert_failure(mock: &MockServer, table: &str, row: Value, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/rest/v1/{}", table)))
        .and(body_partial_json(row))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .with_priority(1)
        .mount(mock)
        .await;
}

/// Deleting `id` answers with `status`
pub async fn mount_delete_user(mock: &MockServer, id: Uuid, status: u16) {
    Mock::given(method("DELETE"))
        .and(path(format!("/auth/v1/admin/users/{}", id)))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({})))
        .mount(mock)
        .await;
}

/// `ADMIN_TOKEN` resolves to `admin_id`, who holds the admin role
pub async fn mount_admin_caller(mock: &MockServer, admin_id: Uuid) {
    mount_admin_token(mock, ADMIN_TOKEN, admin_id).await;
}

/// `token` resolves to `user_id`
pub async fn mount_token_user(mock: &MockServer, token: &str, user_id: Uuid) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_user(user_id, "caller@school.example")))
        .mount(mock)
        .await;
}

/// Admin role lookup for `user_id` returns `rows`
pub async fn mount_roles(mock: &MockServer, user_id: Uuid, rows: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/user_roles"))
        .and(query_param("user_id", format!("eq.{}", user_id).as_str()))
        .and(query_param("role", "eq.admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(mock)
        .await;
}

/// `admin_id` has `count` recent rows in the attempt log; new attempts are accepted
///
/// Only queries filtered to `admin_id` and bounded by `attempted_at=gte.`
/// match, so an unfiltered count finds no mock and fails open.
pub async fn mount_attempt_log(mock: &MockServer, admin_id: Uuid, count: usize) {
    let rows: Vec<Value> = (0..count).map(|n| json!({ "id": n })).collect();
    Mock::given(method("GET"))
        .and(path("/rest/v1/bulk_signup_attempts"))
        .and(query_param("admin_id", format!("eq.{}", admin_id).as_str()))
        .and(query_param_contains("attempted_at", "gte."))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(mock)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/bulk_signup_attempts"))
        .and(body_partial_json(json!({ "admin_id": admin_id })))
        .respond_with(ResponseTemplate::new(201))
        .mount(mock)
        .await;
}

/// `token` resolves to `admin_id`, who holds the admin role
pub async fn mount_admin_token(mock: &MockServer, token: &str, admin_id: Uuid) {
    mount_token_user(mock, token, admin_id).await;
    mount_roles(mock, admin_id, json!([{ "role": "admin" }])).await;
}

/// Requests the mock received for `http_method` on `request_path`
pub async fn requests_to(mock: &MockServer, http_method: &str, request_path: &str) -> Vec<Request> {
    mock.received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == http_method && r.url.path() == request_path)
        .collect()
}

/// JSON bodies of the inserts into `table`
pub async fn inserted_rows(mock: &MockServer, table: &str) -> Vec<Value> {
    requests_to(mock, "POST", &format!("/rest/v1/{}", table))
        .await
        .iter()
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}

/// Number of admin create-user calls
pub async fn create_user_calls(mock: &MockServer) -> usize {
    requests_to(mock, "POST", "/auth/v1/admin/users").await.len()
}

/// Number of admin delete-user calls for any id
pub async fn delete_user_calls(mock: &MockServer) -> usize {
    mock.received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == "DELETE" && r.url.path().starts_with("/auth/v1/admin/users/"))
        .count()
}
