//! Repository for the `project_links` table.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::link::{CreateProjectLink, ProjectLink};

/// Column list for project_links queries.
const COLUMNS: &str = "id, project_id, name, url, description, ordering, created_at";

/// Provides CRUD operations for a project's links.
pub struct LinkRepo;

impl LinkRepo {
    /// Insert a new link for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectLink,
    ) -> Result<ProjectLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_links (project_id, name, url, description, ordering) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectLink>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.url)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.ordering)
            .fetch_one(pool)
            .await
    }

    /// List a project's links by their explicit ordering.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_links \
             WHERE project_id = $1 \
             ORDER BY ordering ASC, id ASC"
        );
        sqlx::query_as::<_, ProjectLink>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a link by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
