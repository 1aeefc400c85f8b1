//! Repository for the `project_themes` table.

use sqlx::PgPool;

use fundra_core::slug::slugify;
use fundra_core::types::DbId;

use crate::models::theme::{CreateProjectTheme, ProjectTheme};

/// Column list for project_themes queries.
const COLUMNS: &str = "id, name, slug, description";

/// Provides CRUD operations for project themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Insert a new theme, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectTheme,
    ) -> Result<ProjectTheme, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_themes (name, slug, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectTheme>(&query)
            .bind(&input.name)
            .bind(slugify(&input.name))
            .bind(input.description.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find a theme by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectTheme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_themes WHERE id = $1");
        sqlx::query_as::<_, ProjectTheme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List themes ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectTheme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_themes ORDER BY name ASC");
        sqlx::query_as::<_, ProjectTheme>(&query)
            .fetch_all(pool)
            .await
    }
}
