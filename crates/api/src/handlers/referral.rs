//! Handlers for the `/referrals` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_db::models::referral::{CreateReferral, Referral};
use fundra_db::repositories::ReferralRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/referrals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Referral>>> {
    let referrals = ReferralRepo::list(&state.pool).await?;
    Ok(Json(referrals))
}

/// POST /api/v1/referrals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReferral>,
) -> AppResult<(StatusCode, Json<Referral>)> {
    input.validate()?;

    let referral = ReferralRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(referral)))
}
