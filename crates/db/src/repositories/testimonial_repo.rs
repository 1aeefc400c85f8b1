//! Repository for the `testimonials` table.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::testimonial::{CreateTestimonial, Testimonial};

/// Column list for testimonials queries.
const COLUMNS: &str = "id, project_id, member_id, description, created_at, updated_at";

/// Provides CRUD operations for project testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (project_id, member_id, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(project_id)
            .bind(input.member_id)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List a project's testimonials, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials \
             WHERE project_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
