//! HTTP-level integration tests for the `/api/characters` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_character_returns_201_with_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/characters",
        json!({"name": "Ada", "userId": "u1", "age": 30}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_character_without_name_persists_nothing(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/characters", json!({"userId": "u1"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name and userId are required");
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/characters", json!({"name": "Ada"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/characters").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_character_with_negative_age_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/characters",
        json!({"name": "Ada", "userId": "u1", "age": -3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_json_returns_400_with_error_body(pool: SqlitePool) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method("POST")
        .uri("/api/characters")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_character_round_trip(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/characters",
            json!({"name": "Ada", "userId": "u1", "age": 30, "bio": "Engineer"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let fetched = body_json(get(app, &format!("/api/characters/{id}")).await).await;
    assert_eq!(fetched["name"], "Ada");
    assert_eq!(fetched["userId"], "u1");
    assert_eq!(fetched["age"], 30);
    assert_eq!(fetched["portrait"], "/img/default-portrait.jpg");

    // Full-record update with only the age changed.
    let mut body = fetched.clone();
    body["age"] = json!(31);
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/characters/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["changes"], 1);

    let app = common::build_test_app(pool);
    let after = body_json(get(app, &format!("/api/characters/{id}")).await).await;
    assert_eq!(after["age"], 31);
    assert_eq!(after["name"], "Ada");
    assert_eq!(after["userId"], "u1");
    assert_eq!(after["bio"], "Engineer");
    assert_eq!(after["portrait"], fetched["portrait"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_characters_filtered_by_user(pool: SqlitePool) {
    common::create_character(&pool, "A", "u1").await;
    common::create_character(&pool, "B", "u2").await;
    common::create_character(&pool, "C", "u1").await;

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/characters").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool.clone());
    let mine = body_json(get(app, "/api/characters?userId=u1").await).await;
    let names: Vec<_> = mine
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["A", "C"]);

    // An empty filter behaves like no filter.
    let app = common::build_test_app(pool);
    let unfiltered = body_json(get(app, "/api/characters?userId=").await).await;
    assert_eq!(unfiltered.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_character_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/characters/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Character with id 999999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_character_id_is_not_found(pool: SqlitePool) {
    for raw in ["abc", "99999999999999999999"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/characters/{raw}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], format!("Character with id {raw} not found"));

        let app = common::build_test_app(pool.clone());
        let response = delete(app, &format!("/api/characters/{raw}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let app = common::build_test_app(pool.clone());
        let response = put_json(
            app,
            &format!("/api/characters/{raw}"),
            json!({"name": "Ada", "userId": "u1"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_age_accepts_form_text(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/characters",
        json!({"name": "Ada", "userId": "u1", "age": "30", "description": "", "bio": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let aged = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/characters",
        json!({"name": "Bob", "userId": "u1", "age": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ageless = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let fetched = body_json(get(app, &format!("/api/characters/{aged}")).await).await;
    assert_eq!(fetched["age"], 30);

    let app = common::build_test_app(pool.clone());
    let fetched = body_json(get(app, &format!("/api/characters/{ageless}")).await).await;
    assert!(fetched["age"].is_null());

    // The browser form also sends the id back on update.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/characters/{ageless}"),
        json!({"id": ageless, "name": "Bob", "userId": "u1", "age": "41"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/characters/{ageless}")).await).await;
    assert_eq!(fetched["age"], 41);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_age_returns_validation_error(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/characters",
        json!({"name": "Ada", "userId": "u1", "age": "thirty"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Age must be a whole number, got 'thirty'");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/characters").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_character_errors(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/characters/4242",
        json!({"name": "Ghost", "userId": "u1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let id = common::create_character(&pool, "Ada", "u1").await;
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/characters/{id}"),
        json!({"name": "", "userId": "u1"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let unchanged = body_json(get(app, &format!("/api/characters/{id}")).await).await;
    assert_eq!(unchanged["name"], "Ada");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_character(pool: SqlitePool) {
    let id = common::create_character(&pool, "Ada", "u1").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/characters/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], 1);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/characters/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/characters/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_character_removes_their_posts(pool: SqlitePool) {
    let ada = common::create_character(&pool, "Ada", "u1").await;
    let bob = common::create_character(&pool, "Bob", "u2").await;
    let scene = common::create_scene(&pool, "Tavern", &[ada, bob]).await;

    for (character_id, content) in [(ada, "Hello"), (bob, "Hi"), (ada, "Bye")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/posts",
            json!({"sceneId": scene, "characterId": character_id, "content": content}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/characters/{ada}")).await;

    let app = common::build_test_app(pool.clone());
    let posts = body_json(get(app, &format!("/api/scenes/{scene}/posts")).await).await;
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["characterId"], bob);

    let app = common::build_test_app(pool);
    let scene_json = body_json(get(app, &format!("/api/scenes/{scene}")).await).await;
    assert_eq!(common::character_ids(&scene_json), vec![bob]);
}
