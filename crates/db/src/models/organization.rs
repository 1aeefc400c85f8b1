//! Partner organization model and DTOs.
//!
//! Some projects run in cooperation with a partner organization;
//! projects and plans reference these rows optionally.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::DbId;

/// A row from the `partner_organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartnerOrganization {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a partner organization. The slug is derived
/// from the name.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartnerOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
