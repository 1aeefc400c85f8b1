//! Handlers for the project-scoped plan resource.
//!
//! A plan only exists once the project has reached the `plan` phase;
//! before that both endpoints report 404.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::models::plan::{ProjectPlanWithTags, UpdateProjectPlan};
use fundra_db::models::status::{PlanStatus, ProjectNeed};
use fundra_db::repositories::{PlanRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/plan
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ProjectPlanWithTags>> {
    let plan = PlanRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectPlan",
            id: project_id,
        }))?;
    let tags = TagRepo::list_for_plan(&state.pool, plan.id).await?;

    Ok(Json(ProjectPlanWithTags { plan, tags }))
}

/// PUT /api/v1/projects/{project_id}/plan
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateProjectPlan>,
) -> AppResult<Json<ProjectPlanWithTags>> {
    input.validate()?;

    if let Some(need_id) = input.need_id {
        if ProjectNeed::from_id(need_id).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "need_id: {need_id} is not a known project need"
            ))));
        }
    }
    if let Some(status_id) = input.status_id {
        if PlanStatus::from_id(status_id).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "status_id: {status_id} is not a known plan status"
            ))));
        }
    }

    let plan = PlanRepo::update(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectPlan",
            id: project_id,
        }))?;

    if let Some(tags) = &input.tags {
        TagRepo::set_for_plan(&state.pool, plan.id, tags).await?;
    }
    let tags = TagRepo::list_for_plan(&state.pool, plan.id).await?;

    Ok(Json(ProjectPlanWithTags { plan, tags }))
}
