//! Reaction model and DTOs.
//!
//! Short comments attached to a wallpost, listed oldest first.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

use crate::models::member::MemberSummary;

/// A row from the `reactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reaction {
    pub id: DbId,
    pub wallpost_id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
}

/// A reaction with its author summary, nested inside wallpost
/// representations.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionDetail {
    pub id: DbId,
    pub wallpost_id: DbId,
    pub author: MemberSummary,
    pub text: String,
    pub created_at: Timestamp,
}

/// DTO for creating a reaction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReaction {
    pub author_id: DbId,
    #[validate(length(min = 1))]
    pub text: String,
}
