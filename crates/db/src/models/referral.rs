//! Referral model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::DbId;

/// A row from the `referrals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Referral {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub description: String,
}

/// DTO for creating a referral.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReferral {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub description: Option<String>,
}
