//! Handlers for project budget lines.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::models::budget_line::{BudgetLine, CreateBudgetLine};
use fundra_db::repositories::BudgetLineRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/budget-lines
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<BudgetLine>>> {
    let lines = BudgetLineRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(lines))
}

/// POST /api/v1/projects/{project_id}/budget-lines
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateBudgetLine>,
) -> AppResult<(StatusCode, Json<BudgetLine>)> {
    input.validate()?;

    let line = BudgetLineRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(line)))
}

/// DELETE /api/v1/budget-lines/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BudgetLineRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BudgetLine",
            id,
        }))
    }
}
