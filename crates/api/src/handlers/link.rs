//! Handlers for project links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::models::link::{CreateProjectLink, ProjectLink};
use fundra_db::repositories::LinkRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/links
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectLink>>> {
    let links = LinkRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(links))
}

/// POST /api/v1/projects/{project_id}/links
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectLink>,
) -> AppResult<(StatusCode, Json<ProjectLink>)> {
    input.validate()?;

    let link = LinkRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// DELETE /api/v1/links/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LinkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectLink",
            id,
        }))
    }
}
