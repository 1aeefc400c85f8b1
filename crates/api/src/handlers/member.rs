//! Handlers for the `/members` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_core::error::CoreError;
use fundra_core::types::DbId;
use fundra_db::models::member::{CreateMember, Member};
use fundra_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/members
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    input.validate()?;

    let member = MemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/members
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = MemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/v1/members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Member>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;
    Ok(Json(member))
}
