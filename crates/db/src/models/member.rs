//! Member entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

/// A member row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
}

/// Lightweight author info nested inside wallpost and testimonial
/// representations. Skips audit columns the caller does not need.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberSummary {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for creating a new member.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
