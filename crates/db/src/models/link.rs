//! Project link model and DTOs.
//!
//! Links connected to a project, listed in their explicit ordering.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

/// A row from the `project_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectLink {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub url: String,
    pub description: String,
    pub ordering: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a project link.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectLink {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(url)]
    pub url: String,
    pub description: Option<String>,
    pub ordering: i32,
}
