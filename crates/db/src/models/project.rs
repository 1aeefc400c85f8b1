//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A project row from the `projects` table.
///
/// `phase_id` references the `project_phases` lookup table and is
/// decoded via [`crate::models::status::ProjectPhase`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub owner_id: DbId,
    pub team_member_id: Option<DbId>,
    pub partner_organization_id: Option<DbId>,
    pub phase_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(max = 255))]
    pub title: String,
    pub owner_id: DbId,
    pub team_member_id: Option<DbId>,
    pub partner_organization_id: Option<DbId>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// A `phase_id` change is validated against the monotonic phase order
/// and triggers the lifecycle cascade.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub team_member_id: Option<DbId>,
    pub partner_organization_id: Option<DbId>,
    pub phase_id: Option<StatusId>,
}
