//! Project theme model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::DbId;

/// A theme row from the `project_themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectTheme {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// DTO for creating a theme. The slug is derived from the name.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectTheme {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
}
