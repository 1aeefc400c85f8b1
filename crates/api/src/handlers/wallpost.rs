//! Handlers for wallposts.
//!
//! Project-scoped endpoints bind the created post's parent to the path
//! project regardless of anything in the payload, and 404 when the
//! project does not resolve. The list and detail endpoints serialize
//! through [`WallPostView`] so every post carries its `"type"` tag.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::models::wallpost::{CreateMediaWallPost, CreateTextWallPost, WallPostParent};
use fundra_db::repositories::{ProjectRepo, WallPostRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::wallpost::WallPostView;

/// GET /api/v1/projects/{project_id}/wallposts
///
/// Mixed text/media list, newest first.
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<WallPostView>>> {
    require_project(&state, project_id).await?;

    let parent = WallPostParent::Project(project_id);
    let details = WallPostRepo::list_for_parent(&state.pool, parent).await?;

    let now = Utc::now();
    let views = details
        .into_iter()
        .map(|detail| WallPostView::from_detail(detail, now))
        .collect();
    Ok(Json(views))
}

/// POST /api/v1/projects/{project_id}/wallposts/text
pub async fn create_text(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTextWallPost>,
) -> AppResult<(StatusCode, Json<WallPostView>)> {
    input.validate()?;
    require_project(&state, project_id).await?;

    let parent = WallPostParent::Project(project_id);
    let post = WallPostRepo::create_text(&state.pool, parent, &input).await?;
    let view = load_view(&state, post.id()).await?;

    tracing::info!(project_id, wallpost_id = post.id(), "Text wallpost created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// POST /api/v1/projects/{project_id}/wallposts/media
pub async fn create_media(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMediaWallPost>,
) -> AppResult<(StatusCode, Json<WallPostView>)> {
    input.validate()?;
    require_project(&state, project_id).await?;

    let parent = WallPostParent::Project(project_id);
    let post = WallPostRepo::create_media(&state.pool, parent, &input).await?;
    let view = load_view(&state, post.id()).await?;

    tracing::info!(project_id, wallpost_id = post.id(), "Media wallpost created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/wallposts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WallPostView>> {
    let view = load_view(&state, id).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/wallposts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = WallPostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WallPost",
            id,
        }))
    }
}

async fn require_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<WallPostView> {
    let detail = WallPostRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WallPost",
            id,
        }))?;
    Ok(WallPostView::from_detail(detail, Utc::now()))
}
