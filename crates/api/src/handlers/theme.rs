//! Handlers for the `/themes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_db::models::theme::{CreateProjectTheme, ProjectTheme};
use fundra_db::repositories::ThemeRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/themes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectTheme>>> {
    let themes = ThemeRepo::list(&state.pool).await?;
    Ok(Json(themes))
}

/// POST /api/v1/themes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectTheme>,
) -> AppResult<(StatusCode, Json<ProjectTheme>)> {
    input.validate()?;

    let theme = ThemeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(theme)))
}
