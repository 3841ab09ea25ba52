//! `ApiClient` and `UserAdminApiAdapter` against a local axum fake of the
//! user backend.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use roster_client::infra::{
    ApiClient, UserAdminApiAdapter, UserAdminService,
    api_client::{CONNECTION_ERROR_MESSAGE, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE},
};
use roster_model::{CreateUserData, UpdateUserData, UserId};
use serde_json::{Value, json};

fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "first_name": "Test",
        "last_name": "User",
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00"
    })
}

async fn list_users(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page: u32 = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(10);
    Json(json!({
        "success": true,
        "data": [user_json(1, "alice")],
        "pagination": {
            "page": page, "per_page": per_page, "total": 1, "pages": 1,
            "has_next": false, "has_prev": false
        }
    }))
}

async fn get_user(Path(id): Path<i64>) -> impl IntoResponse {
    match id {
        1 => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": user_json(1, "alice") })),
        )
            .into_response(),
        2 => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "User not found" })),
        )
            .into_response(),
        3 => StatusCode::NOT_FOUND.into_response(),
        4 => (StatusCode::BAD_GATEWAY, "upstream exploded").into_response(),
        _ => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK.into_response()
        }
    }
}

async fn create_user(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Username already exists" })),
        );
    }
    let mut user = user_json(7, body["username"].as_str().unwrap_or_default());
    user["email"] = body["email"].clone();
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": user, "message": "User created" })),
    )
}

async fn update_user(Path(_id): Path<i64>, Json(_body): Json<Value>) -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, "not json at all")
}

async fn delete_user(Path(_id): Path<i64>) -> Json<Value> {
    Json(json!({ "success": true, "message": "User deleted" }))
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "success": false, "status": "unhealthy" })),
    )
}

async fn echo_content_type(headers: HeaderMap) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    Json(json!({ "success": true, "data": content_type }))
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/health", get(health))
        .route(
            "/api/content-type",
            get(echo_content_type).delete(echo_content_type),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn adapter(timeout: Duration) -> UserAdminApiAdapter {
    let base = spawn_backend().await;
    let client = ApiClient::new(base, timeout).unwrap();
    UserAdminApiAdapter::new(Arc::new(client))
}

#[tokio::test]
async fn list_sends_paging_query_and_passes_envelope_through() {
    let service = adapter(Duration::from_secs(2)).await;
    let response = service.list_users(3, 25).await;

    assert!(response.success);
    assert_eq!(response.data.as_ref().map(Vec::len), Some(1));
    let info = response.pagination_info().expect("pagination");
    assert_eq!((info.page, info.per_page), (3, 25));
}

#[tokio::test]
async fn get_by_id_success() {
    let service = adapter(Duration::from_secs(2)).await;
    let user = service.get_user(UserId(1)).await.into_data("x").unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.full_name(), "Test User");
}

#[tokio::test]
async fn backend_error_takes_precedence_over_404_mapping() {
    let service = adapter(Duration::from_secs(2)).await;
    let response = service.get_user(UserId(2)).await;
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("User not found"));
}

#[tokio::test]
async fn bare_404_maps_to_resource_not_found() {
    let service = adapter(Duration::from_secs(2)).await;
    let response = service.get_user(UserId(3)).await;
    assert_eq!(response.error.as_deref(), Some(NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn server_errors_map_to_internal_server_error() {
    let service = adapter(Duration::from_secs(2)).await;
    let response = service.get_user(UserId(4)).await;
    assert_eq!(response.error.as_deref(), Some(SERVER_ERROR_MESSAGE));

    let health = service.health_check().await;
    assert!(!health.success);
    assert_eq!(health.error.as_deref(), Some(SERVER_ERROR_MESSAGE));
}

#[tokio::test]
async fn create_posts_json_and_surfaces_validation_errors() {
    let service = adapter(Duration::from_secs(2)).await;
    let data = CreateUserData {
        username: "newbie".into(),
        email: "newbie@example.com".into(),
        first_name: "New".into(),
        last_name: "Bie".into(),
    };
    let created = service.create_user(data.clone()).await;
    assert_eq!(created.message.as_deref(), Some("User created"));
    let user = created.into_data("x").unwrap();
    assert_eq!(user.id, UserId(7));
    assert_eq!(user.email, "newbie@example.com");

    let taken = service
        .create_user(CreateUserData {
            username: "taken".into(),
            ..data
        })
        .await;
    assert_eq!(taken.error.as_deref(), Some("Username already exists"));
}

#[tokio::test]
async fn non_json_client_error_maps_to_connection_error() {
    let service = adapter(Duration::from_secs(2)).await;
    let response = service
        .update_user(
            UserId(1),
            UpdateUserData {
                email: Some("a@b.co".into()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(response.error.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
}

#[tokio::test]
async fn delete_tolerates_payloadless_success() {
    let service = adapter(Duration::from_secs(2)).await;
    let response = service.delete_user(UserId(1)).await;
    assert!(response.success);
    assert!(response.into_unit("x").is_ok());
}

#[tokio::test]
async fn timeout_becomes_connection_error() {
    let service = adapter(Duration::from_millis(200)).await;
    let response = service.get_user(UserId(99)).await;
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
}

#[tokio::test]
async fn unreachable_host_becomes_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(addr.to_string(), Duration::from_secs(2)).unwrap();
    let service = UserAdminApiAdapter::new(Arc::new(client));
    let response = service.list_users(1, 10).await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
}

#[tokio::test]
async fn bodyless_requests_still_send_json_content_type() {
    let base = spawn_backend().await;
    let client = ApiClient::new(base, Duration::from_secs(2)).unwrap();

    let on_get = client.get::<Option<String>>("/api/content-type").await;
    let on_delete = client.delete::<Option<String>>("/api/content-type").await;

    assert_eq!(
        on_get.data.flatten().as_deref(),
        Some("application/json")
    );
    assert_eq!(
        on_delete.data.flatten().as_deref(),
        Some("application/json")
    );
}
