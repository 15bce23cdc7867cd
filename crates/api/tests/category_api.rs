//! HTTP-level tests for the `/api/categories` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_category, create_project, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_category_returns_entity_with_defaults(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/categories", json!({"name": "Research"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Research");
    assert_eq!(json["color"], "blue");
    assert!(json["icon"].is_null());
    assert_eq!(json["sort_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_categories_are_listed_in_creation_order(pool: SqlitePool) {
    for name in ["A", "B", "C"] {
        create_category(&pool, name).await;
    }

    let response = get(common::build_test_app(pool), "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let listed: Vec<(&str, i64)> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["name"].as_str().unwrap(), c["sort_order"].as_i64().unwrap()))
        .collect();
    assert_eq!(listed, [("A", 1), ("B", 2), ("C", 3)]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_category_name_returns_409(pool: SqlitePool) {
    create_category(&pool, "Coding").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/categories", json!({"name": "Coding"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["detail"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_category_name_is_a_validation_error(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/categories", json!({"name": ""})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn client_supplied_sort_order_is_ignored_on_create(pool: SqlitePool) {
    create_category(&pool, "First").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        json!({"name": "Second", "sort_order": 99}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["sort_order"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_category_replaces_fields_but_keeps_position(pool: SqlitePool) {
    create_category(&pool, "Other").await;
    let id = create_category(&pool, "Old").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        json!({"name": "New", "color": "red", "icon": "star"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "New");
    assert_eq!(json["color"], "red");
    assert_eq!(json["icon"], "star");
    assert_eq!(json["sort_order"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_category_to_taken_name_returns_409(pool: SqlitePool) {
    create_category(&pool, "Taken").await;
    let id = create_category(&pool, "Mine").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        json!({"name": "Taken"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/categories/4242", json!({"name": "Ghost"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Category with id 4242 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_sets_sort_order_and_skips_unknown_ids(pool: SqlitePool) {
    let a = create_category(&pool, "A").await;
    let b = create_category(&pool, "B").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/categories/reorder",
        json!([
            {"id": a, "sort_order": 2},
            {"id": b, "sort_order": 1},
            {"id": 9999, "sort_order": 0}
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true}));

    let json = body_json(get(common::build_test_app(pool), "/api/categories").await).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["B", "A"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_with_malformed_body_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/categories/reorder",
        json!([{"id": "one", "sort_order": 1}]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_category_keeps_its_projects_uncategorized(pool: SqlitePool) {
    let category_id = create_category(&pool, "Doomed").await;
    let mut project_ids = Vec::new();
    for name in ["P1", "P2", "P3"] {
        project_ids.push(
            create_project(&pool, json!({"name": name, "category_id": category_id})).await,
        );
    }

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true}));

    for id in project_ids {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/projects/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["category_id"].is_null());
    }

    let json = body_json(get(common::build_test_app(pool), "/api/categories").await).await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_category_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/categories/77").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
