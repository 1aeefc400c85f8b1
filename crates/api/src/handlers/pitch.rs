//! Handlers for the project-scoped pitch resource.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::lifecycle::approve_pitch;
use fundra_db::models::pitch::{ProjectPitchWithTags, UpdateProjectPitch};
use fundra_db::models::status::{PitchStatus, ProjectNeed};
use fundra_db::repositories::{PitchRepo, ProjectRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::project::ProjectResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/pitch
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ProjectPitchWithTags>> {
    let pitch = PitchRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectPitch",
            id: project_id,
        }))?;
    let tags = TagRepo::list_for_pitch(&state.pool, pitch.id).await?;

    Ok(Json(ProjectPitchWithTags { pitch, tags }))
}

/// PUT /api/v1/projects/{project_id}/pitch
///
/// Field edits plus an optional replacement tag set. A `status_id` of
/// `approved` routes through the phase cascade, so approving here has
/// the same effect as the dedicated approve endpoint; other statuses
/// are applied as-is.
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateProjectPitch>,
) -> AppResult<Json<ProjectPitchWithTags>> {
    input.validate()?;

    if let Some(need_id) = input.need_id {
        if ProjectNeed::from_id(need_id).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "need_id: {need_id} is not a known project need"
            ))));
        }
    }
    let status = input
        .status_id
        .map(|status_id| {
            PitchStatus::from_id(status_id).ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "status_id: {status_id} is not a known pitch status"
                )))
            })
        })
        .transpose()?;

    let mut pitch = PitchRepo::update(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectPitch",
            id: project_id,
        }))?;

    match status {
        // Approval via any path advances the owning project; run the
        // full cascade rather than writing the status directly.
        Some(PitchStatus::Approved) => {
            approve_pitch(&state.pool, project_id).await?;
            pitch = PitchRepo::find_by_project(&state.pool, project_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "ProjectPitch",
                    id: project_id,
                }))?;
        }
        Some(status) => {
            pitch = PitchRepo::set_status(&state.pool, project_id, status.id())
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "ProjectPitch",
                    id: project_id,
                }))?;
        }
        None => {}
    }

    if let Some(tags) = &input.tags {
        TagRepo::set_for_pitch(&state.pool, pitch.id, tags).await?;
    }
    let tags = TagRepo::list_for_pitch(&state.pool, pitch.id).await?;

    Ok(Json(ProjectPitchWithTags { pitch, tags }))
}

/// POST /api/v1/projects/{project_id}/pitch/approve
///
/// Marks the pitch approved, advances the project to the `plan` phase,
/// and runs the cascade until it converges. Responds with the project
/// and the cascade report.
pub async fn approve(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let sync = approve_pitch(&state.pool, project_id).await?;

    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    tracing::info!(project_id, ?sync, "Pitch approved");
    Ok(Json(ProjectResponse { project, sync }))
}
