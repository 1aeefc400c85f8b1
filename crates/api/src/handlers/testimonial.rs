//! Handlers for project testimonials.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use fundra_core::types::DbId;
use fundra_db::models::testimonial::{CreateTestimonial, Testimonial};
use fundra_db::repositories::TestimonialRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/testimonials
///
/// Newest first.
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(testimonials))
}

/// POST /api/v1/projects/{project_id}/testimonials
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    input.validate()?;

    let testimonial = TestimonialRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}
