//! Handlers for the `/projects` resource.
//!
//! Creates and updates run the phase synchronization cascade so the
//! pitch/plan records always match the project's phase. The response
//! for mutating endpoints carries the project together with the
//! cascade's [`PhaseSyncReport`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::lifecycle::{synchronize_project_phase, PhaseSyncReport};
use fundra_db::models::project::{CreateProject, Project, UpdateProject};
use fundra_db::models::status::ProjectPhase;
use fundra_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A project plus the report of what the phase cascade did to it.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub sync: PhaseSyncReport,
}

/// POST /api/v1/projects
///
/// Creates the project in the `pitch` phase; the cascade attaches a
/// blank pitch before the response is built.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    input.validate()?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    let sync = synchronize_project_phase(&state.pool, project.id, true).await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok((StatusCode::CREATED, Json(ProjectResponse { project, sync })))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// A `phase_id` in the payload must name a known phase and must not
/// move the project backwards. After the write the cascade runs and
/// its report is returned alongside the project.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    input.validate()?;

    if let Some(next_id) = input.phase_id {
        let current = ProjectRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            }))?;

        let next = ProjectPhase::from_id(next_id).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "phase_id: {next_id} is not a known project phase"
            )))
        })?;
        let current_phase = ProjectPhase::from_id(current.phase_id).ok_or_else(|| {
            AppError::InternalError(format!(
                "project {id} has unknown phase {}",
                current.phase_id
            ))
        })?;

        if !current_phase.allows_transition(next) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "phase_id: cannot move project from {current_phase:?} back to {next:?}"
            ))));
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let sync = synchronize_project_phase(&state.pool, id, false).await?;

    // The cascade may have advanced records; re-read for the response.
    let project = match ProjectRepo::find_by_id(&state.pool, id).await? {
        Some(fresh) => fresh,
        None => project,
    };

    Ok(Json(ProjectResponse { project, sync }))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes the project and everything hanging off it, including its
/// wallposts (which have no FK to the project).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
