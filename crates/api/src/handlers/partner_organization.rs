//! Handlers for the `/partner-organizations` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_db::models::organization::{CreatePartnerOrganization, PartnerOrganization};
use fundra_db::repositories::PartnerOrganizationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/partner-organizations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PartnerOrganization>>> {
    let organizations = PartnerOrganizationRepo::list(&state.pool).await?;
    Ok(Json(organizations))
}

/// POST /api/v1/partner-organizations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePartnerOrganization>,
) -> AppResult<(StatusCode, Json<PartnerOrganization>)> {
    input.validate()?;

    let organization = PartnerOrganizationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(organization)))
}
