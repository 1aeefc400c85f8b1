//! HTTP-level integration tests for wallposts and reactions.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, seed_member};
use sqlx::PgPool;

async fn seed_project(pool: &PgPool, title: &str, owner_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": title, "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Creation and variant tagging
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_text_wallpost(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;
    let project_id = seed_project(&pool, "Wall Project", author_id).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/wallposts/text"),
        serde_json::json!({"author_id": author_id, "text": "First post!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["type"], "text");
    assert_eq!(json["text"], "First post!");
    assert_eq!(json["project_id"], project_id);
    assert_eq!(json["author"]["username"], "bram");
    assert_eq!(json["reactions"], serde_json::json!([]));
    assert_eq!(
        json["url"],
        format!("/api/v1/wallposts/{}", json["id"].as_i64().unwrap())
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_media_wallpost_computes_embed(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;
    let project_id = seed_project(&pool, "Video Project", author_id).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/wallposts/media"),
        serde_json::json!({
            "author_id": author_id,
            "title": "Kickoff",
            "video_url": "https://www.youtube.com/watch?v=abc123"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["type"], "media");
    assert_eq!(json["title"], "Kickoff");
    assert!(json["video_html"]
        .as_str()
        .unwrap()
        .contains("youtube.com/embed/abc123"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_on_missing_project_returns_404(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects/999999/wallposts/text",
        serde_json::json!({"author_id": author_id, "text": "lost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_text_returns_400(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;
    let project_id = seed_project(&pool, "Strict Wall", author_id).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/wallposts/text"),
        serde_json::json!({"author_id": author_id, "text": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_mixes_variants_newest_first(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;
    let project_id = seed_project(&pool, "Mixed Wall", author_id).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/projects/{project_id}/wallposts/text"),
        serde_json::json!({"author_id": author_id, "text": "older"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/projects/{project_id}/wallposts/media"),
        serde_json::json!({"author_id": author_id, "title": "newer"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}/wallposts")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["type"], "media");
    assert_eq!(posts[1]["type"], "text");
}

// ---------------------------------------------------------------------------
// Detail and deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_and_delete_wallpost(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;
    let project_id = seed_project(&pool, "Ephemeral Wall", author_id).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{project_id}/wallposts/text"),
            serde_json::json!({"author_id": author_id, "text": "delete me"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/wallposts/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/wallposts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/wallposts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reactions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reactions_round_trip(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;
    let reader_id = seed_member(&pool, "carla").await;
    let project_id = seed_project(&pool, "Reactive Wall", author_id).await;

    let app = common::build_test_app(pool.clone());
    let post = body_json(
        post_json(
            app,
            &format!("/api/v1/projects/{project_id}/wallposts/text"),
            serde_json::json!({"author_id": author_id, "text": "react to this"}),
        )
        .await,
    )
    .await;
    let post_id = post["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/wallposts/{post_id}/reactions"),
        serde_json::json!({"author_id": reader_id, "text": "love it"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let reaction = body_json(response).await;
    let reaction_id = reaction["id"].as_i64().unwrap();

    // Reactions come back nested in the wallpost view with authors.
    let app = common::build_test_app(pool.clone());
    let detail = body_json(get(app, &format!("/api/v1/wallposts/{post_id}")).await).await;
    assert_eq!(detail["reactions"][0]["text"], "love it");
    assert_eq!(detail["reactions"][0]["author"]["username"], "carla");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/reactions/{reaction_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let remaining =
        body_json(get(app, &format!("/api/v1/wallposts/{post_id}/reactions")).await).await;
    assert_eq!(remaining, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reactions_on_missing_wallpost_returns_404(pool: PgPool) {
    let author_id = seed_member(&pool, "bram").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/wallposts/999999/reactions",
        serde_json::json!({"author_id": author_id, "text": "into the void"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
