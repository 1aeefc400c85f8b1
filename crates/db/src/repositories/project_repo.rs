//! Repository for the `projects` table.

use sqlx::PgPool;

use fundra_core::slug::slug_for;
use fundra_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::status::ProjectPhase;
use crate::models::wallpost::ParentType;

/// Column list for projects queries.
const COLUMNS: &str = "id, title, slug, owner_id, team_member_id, \
    partner_organization_id, phase_id, created_at, updated_at";

/// Provides CRUD operations for projects.
///
/// Creation only writes the project row itself; callers are expected
/// to run [`crate::lifecycle::synchronize_project_phase`] afterwards
/// so the pitch sub-record exists.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project in the `pitch` phase, returning the created row.
    ///
    /// The id is drawn from the sequence up front so the slug fallback
    /// for unusable titles can be identity-derived. The slug is always
    /// non-empty; a duplicate slug surfaces as a unique violation on
    /// `uq_projects_slug`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) =
            sqlx::query_as("SELECT nextval(pg_get_serial_sequence('projects', 'id'))")
                .fetch_one(&mut *tx)
                .await?;

        let slug = slug_for(&input.title, id);

        let query = format!(
            "INSERT INTO projects \
                (id, title, slug, owner_id, team_member_id, partner_organization_id, phase_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&slug)
            .bind(input.owner_id)
            .bind(input.team_member_id)
            .bind(input.partner_organization_id)
            .bind(ProjectPhase::Pitch.id())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY title ASC, id ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update an existing project. Returns the updated row, or `None` if
    /// not found. Phase validation happens before this call; the cascade
    /// runs after it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title                   = COALESCE($1, title), \
                team_member_id          = COALESCE($2, team_member_id), \
                partner_organization_id = COALESCE($3, partner_organization_id), \
                phase_id                = COALESCE($4, phase_id), \
                updated_at              = now() \
             WHERE id = $5 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.team_member_id)
            .bind(input.partner_organization_id)
            .bind(input.phase_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and everything it owns. Returns `true` if a row
    /// was deleted.
    ///
    /// Pitch, plan, budget lines, links and testimonials cascade via
    /// foreign keys; wallposts reference the project polymorphically and
    /// are removed explicitly in the same transaction.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM wallposts WHERE parent_type = $1 AND parent_id = $2")
            .bind(ParentType::Project.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
