//! Validation rejections at the HTTP boundary.
//!
//! Each case must fail with 400 before any row is written.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn short_project_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/projects", serde_json::json!({"name": "ab"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));

    let app = common::build_test_app(pool);
    let projects = body_json(get(app, "/projects").await).await;
    assert!(projects.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn overlong_project_description_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects",
        serde_json::json!({"name": "Ops", "description": "x".repeat(501)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_priority_out_of_range_returns_400(pool: PgPool) {
    let project_id = common::seed_project(&pool, "Ops").await;

    for bad in [0, 6] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/tasks",
            serde_json::json!({
                "title": "Build UI",
                "priority": bad,
                "project_id": project_id,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("priority"));
    }

    // No task reached the database.
    let app = common::build_test_app(pool);
    let tasks = body_json(get(app, "/tasks").await).await;
    assert!(tasks.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn short_task_title_returns_400(pool: PgPool) {
    let project_id = common::seed_project(&pool, "Ops").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/tasks",
        serde_json::json!({"title": "ab", "project_id": project_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn title_minimum_applies_before_trimming(pool: PgPool) {
    let project_id = common::seed_project(&pool, "Ops").await;

    // Four characters raw, one after trim: accepted and stored trimmed.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/tasks",
        serde_json::json!({"title": "  a ", "project_id": project_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["title"], "a");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_task_status_is_rejected(pool: PgPool) {
    let project_id = common::seed_project(&pool, "Ops").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/tasks",
        serde_json::json!({
            "title": "Build UI",
            "status": "NOT_A_STATUS",
            "project_id": project_id,
        }),
    )
    .await;
    // Enum membership is enforced at deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_validation_checks_supplied_fields_only(pool: PgPool) {
    let project_id = common::seed_project(&pool, "Ops").await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Build UI", "project_id": project_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = common::put_json(
        app,
        &format!("/tasks/{id}"),
        serde_json::json!({"priority": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
