//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, create_id, get};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["pending_migrations"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_registry_table_counts(pool: PgPool) {
    let camper_id = create_id(&pool, "/campers", json!({"name": "Alex", "age": 12})).await;
    let activity_id = create_id(&pool, "/activities", json!({"name": "Hiking", "difficulty": 1})).await;
    create_id(
        &pool,
        "/signups",
        json!({"time": 8, "camper_id": camper_id, "activity_id": activity_id}),
    )
    .await;
    create_id(&pool, "/episodes", json!({"date": "1/11/99", "number": 1})).await;

    let json = body_json(get(common::build_test_app(pool), "/health").await).await;

    assert_eq!(
        json["tables"],
        json!({
            "campers": 1,
            "activities": 1,
            "signups": 1,
            "episodes": 1,
            "guests": 0,
            "appearances": 0,
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Not found"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn request_id_from_client_is_echoed(pool: PgPool) {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/campers")
        .header("x-request-id", "camp-check-1")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "camp-check-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_body_is_rejected_with_errors_shape(pool: PgPool) {
    let name = "x".repeat(32 * 1024);
    let response = common::post_json(
        common::build_test_app(pool),
        "/campers",
        json!({"name": name, "age": 12}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["errors"][0].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("response must carry an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_configured_origin(pool: PgPool) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/campers")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = common::build_test_app(pool).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}
