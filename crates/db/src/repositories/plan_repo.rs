//! Repository for the `project_plans` table.
//!
//! Plan rows are created by the lifecycle cascade when a project
//! reaches the `plan` phase.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::plan::{ProjectPlan, UpdateProjectPlan};

/// Column list for project_plans queries.
pub(crate) const COLUMNS: &str = "id, project_id, status_id, title, pitch, description, \
    social_impact, effects, for_who, future, reach, need_id, theme_id, \
    latitude, longitude, country, image, video_url, partner_organization_id, \
    created_at, updated_at";

/// Provides read/update operations for project plans.
pub struct PlanRepo;

impl PlanRepo {
    /// Find a plan by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_plans WHERE id = $1");
        sqlx::query_as::<_, ProjectPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the plan belonging to a project.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_plans WHERE project_id = $1");
        sqlx::query_as::<_, ProjectPlan>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a plan's fields. Returns the updated row, or `None` if the
    /// project has no plan yet.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        input: &UpdateProjectPlan,
    ) -> Result<Option<ProjectPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE project_plans SET \
                title                   = COALESCE($1, title), \
                pitch                   = COALESCE($2, pitch), \
                description             = COALESCE($3, description), \
                social_impact           = COALESCE($4, social_impact), \
                effects                 = COALESCE($5, effects), \
                for_who                 = COALESCE($6, for_who), \
                future                  = COALESCE($7, future), \
                reach                   = COALESCE($8, reach), \
                need_id                 = COALESCE($9, need_id), \
                theme_id                = COALESCE($10, theme_id), \
                latitude                = COALESCE($11, latitude), \
                longitude               = COALESCE($12, longitude), \
                country                 = COALESCE($13, country), \
                image                   = COALESCE($14, image), \
                video_url               = COALESCE($15, video_url), \
                partner_organization_id = COALESCE($16, partner_organization_id), \
                status_id               = COALESCE($17, status_id), \
                updated_at              = now() \
             WHERE project_id = $18 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectPlan>(&query)
            .bind(&input.title)
            .bind(&input.pitch)
            .bind(&input.description)
            .bind(&input.social_impact)
            .bind(&input.effects)
            .bind(&input.for_who)
            .bind(&input.future)
            .bind(input.reach)
            .bind(input.need_id)
            .bind(input.theme_id)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.country)
            .bind(&input.image)
            .bind(&input.video_url)
            .bind(input.partner_organization_id)
            .bind(input.status_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
