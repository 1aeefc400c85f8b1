//! Repository for the `project_pitches` table.
//!
//! Pitch rows are created by the lifecycle cascade, never directly
//! through this repository.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::pitch::{ProjectPitch, UpdateProjectPitch};
use crate::models::status::StatusId;

/// Column list for project_pitches queries.
pub(crate) const COLUMNS: &str = "id, project_id, status_id, title, pitch, description, \
    need_id, theme_id, latitude, longitude, country, image, video_url, \
    created_at, updated_at";

/// Provides read/update operations for project pitches.
pub struct PitchRepo;

impl PitchRepo {
    /// Find a pitch by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectPitch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_pitches WHERE id = $1");
        sqlx::query_as::<_, ProjectPitch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the pitch belonging to a project.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectPitch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_pitches WHERE project_id = $1");
        sqlx::query_as::<_, ProjectPitch>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a pitch's descriptive fields. Returns the updated row, or
    /// `None` if the project has no pitch. Status changes go through
    /// [`Self::set_status`] or the lifecycle cascade.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        input: &UpdateProjectPitch,
    ) -> Result<Option<ProjectPitch>, sqlx::Error> {
        let query = format!(
            "UPDATE project_pitches SET \
                title       = COALESCE($1, title), \
                pitch       = COALESCE($2, pitch), \
                description = COALESCE($3, description), \
                need_id     = COALESCE($4, need_id), \
                theme_id    = COALESCE($5, theme_id), \
                latitude    = COALESCE($6, latitude), \
                longitude   = COALESCE($7, longitude), \
                country     = COALESCE($8, country), \
                image       = COALESCE($9, image), \
                video_url   = COALESCE($10, video_url), \
                updated_at  = now() \
             WHERE project_id = $11 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectPitch>(&query)
            .bind(&input.title)
            .bind(&input.pitch)
            .bind(&input.description)
            .bind(input.need_id)
            .bind(input.theme_id)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.country)
            .bind(&input.image)
            .bind(&input.video_url)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a pitch's status directly. Returns the updated row, or `None`
    /// if the project has no pitch.
    pub async fn set_status(
        pool: &PgPool,
        project_id: DbId,
        status_id: StatusId,
    ) -> Result<Option<ProjectPitch>, sqlx::Error> {
        let query = format!(
            "UPDATE project_pitches SET status_id = $1, updated_at = now() \
             WHERE project_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectPitch>(&query)
            .bind(status_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
