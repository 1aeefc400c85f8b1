//! HTTP-level integration tests for the project lifecycle endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json, put_json, seed_member};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_returns_201_with_pitch(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Clean Water For All", "owner_id": owner_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Clean Water For All");
    assert_eq!(json["slug"], "clean-water-for-all");
    assert_eq!(json["phase_id"], 1);
    assert_eq!(json["sync"]["pitch_created"], true);

    // The cascade attached a blank pitch in the `new` status.
    let id = json["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let pitch_resp = get(app, &format!("/api/v1/projects/{id}/pitch")).await;
    assert_eq!(pitch_resp.status(), StatusCode::OK);

    let pitch = body_json(pitch_resp).await;
    assert_eq!(pitch["status_id"], 1);
    assert_eq!(pitch["tags"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_title_returns_409(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;
    let payload = serde_json::json!({"title": "Same Name", "owner_id": owner_id});

    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/projects", payload.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json(app, "/api/v1/projects", payload).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_title_does_not_touch_slug(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Original Title", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"title": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Renamed");
    assert_eq!(json["slug"], "original-title");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_returns_204_then_404(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Short Lived", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Phase transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_advances_to_plan_and_copies_pitch(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Solar Kiosk", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Fill in the pitch before approving.
    let app = common::build_test_app(pool.clone());
    let pitch_resp = put_json(
        app,
        &format!("/api/v1/projects/{id}/pitch"),
        serde_json::json!({
            "pitch": "Power for the market square",
            "description": "A solar kiosk run by the local cooperative.",
            "country": "Kenya",
            "tags": ["energy", "solar"]
        }),
    )
    .await;
    assert_eq!(pitch_resp.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/projects/{id}/pitch/approve")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["phase_id"], 2);
    assert_eq!(json["sync"]["pitch_approved"], true);
    assert_eq!(json["sync"]["phase_advanced"], true);
    assert_eq!(json["sync"]["plan_created"], true);

    // The plan mirrors the approved pitch, tags included.
    let app = common::build_test_app(pool);
    let plan_resp = get(app, &format!("/api/v1/projects/{id}/plan")).await;
    assert_eq!(plan_resp.status(), StatusCode::OK);

    let plan = body_json(plan_resp).await;
    assert_eq!(plan["pitch"], "Power for the market square");
    assert_eq!(plan["country"], "Kenya");
    assert_eq!(plan["tags"], serde_json::json!(["energy", "solar"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_twice_is_a_noop(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Twice Approved", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let first = post_empty(app, &format!("/api/v1/projects/{id}/pitch/approve")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let second = post_empty(app, &format!("/api/v1/projects/{id}/pitch/approve")).await;
    assert_eq!(second.status(), StatusCode::OK);

    let json = body_json(second).await;
    assert_eq!(json["phase_id"], 2);
    // Converged: nothing left for the cascade to do.
    for flag in [
        "pitch_created",
        "pitch_reset",
        "plan_created",
        "plan_synced",
        "pitch_approved",
        "phase_advanced",
    ] {
        assert_eq!(json["sync"][flag], false, "flag {flag} should be false");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_phase_regression_returns_400(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "No Way Back", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/projects/{id}/pitch/approve")).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"phase_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_phase_returns_400(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Phase Nine", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({"phase_id": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_plan_is_404_before_approval(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Still Pitching", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}/plan")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pitch_approval_via_put_advances_phase(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Any Path", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Approving through the generic update runs the same cascade as
    // the dedicated approve endpoint.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/pitch"),
        serde_json::json!({"status_id": 4}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let pitch = body_json(response).await;
    assert_eq!(pitch["status_id"], 4);

    let app = common::build_test_app(pool.clone());
    let project = body_json(get(app, &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(project["phase_id"], 2);

    let app = common::build_test_app(pool);
    let plan_resp = get(app, &format!("/api/v1/projects/{id}/plan")).await;
    assert_eq!(plan_resp.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_pitch_status_returns_400(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Bad Status", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/pitch"),
        serde_json::json!({"status_id": 99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("status_id"));

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/pitch"),
        serde_json::json!({"need_id": 9}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("need_id"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_plan_status_returns_400(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Bad Plan Status", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_empty(app, &format!("/api/v1/projects/{id}/pitch/approve")).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/plan"),
        serde_json::json!({"status_id": 99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("status_id"));
}

// ---------------------------------------------------------------------------
// Project sub-resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_budget_lines_round_trip(pool: PgPool) {
    let owner_id = seed_member(&pool, "anna").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "Budgeted", "owner_id": owner_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{id}/budget-lines"),
        serde_json::json!({"description": "Solar panels", "amount": "1200.50"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let line = body_json(response).await;
    let line_id = line["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, &format!("/api/v1/projects/{id}/budget-lines")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["description"], "Solar panels");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/budget-lines/{line_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
