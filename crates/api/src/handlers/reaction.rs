//! Handlers for reactions on wallposts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::models::reaction::{CreateReaction, Reaction, ReactionDetail};
use fundra_db::repositories::{ReactionRepo, WallPostRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/wallposts/{wallpost_id}/reactions
///
/// Oldest first, with author summaries.
pub async fn list_for_wallpost(
    State(state): State<AppState>,
    Path(wallpost_id): Path<DbId>,
) -> AppResult<Json<Vec<ReactionDetail>>> {
    require_wallpost(&state, wallpost_id).await?;

    let reactions = ReactionRepo::list_for_wallpost(&state.pool, wallpost_id).await?;
    Ok(Json(reactions))
}

/// POST /api/v1/wallposts/{wallpost_id}/reactions
pub async fn create(
    State(state): State<AppState>,
    Path(wallpost_id): Path<DbId>,
    Json(input): Json<CreateReaction>,
) -> AppResult<(StatusCode, Json<Reaction>)> {
    input.validate()?;
    require_wallpost(&state, wallpost_id).await?;

    let reaction = ReactionRepo::create(&state.pool, wallpost_id, &input).await?;
    Ok((StatusCode::CREATED, Json(reaction)))
}

/// DELETE /api/v1/reactions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ReactionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Reaction",
            id,
        }))
    }
}

async fn require_wallpost(state: &AppState, wallpost_id: DbId) -> AppResult<()> {
    WallPostRepo::find_by_id(&state.pool, wallpost_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WallPost",
            id: wallpost_id,
        }))?;
    Ok(())
}
