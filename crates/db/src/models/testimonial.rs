//! Testimonial model and DTOs.
//!
//! Any member can write something nice about a project.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub project_id: DbId,
    pub member_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    pub member_id: DbId,
    #[validate(length(min = 1))]
    pub description: String,
}
