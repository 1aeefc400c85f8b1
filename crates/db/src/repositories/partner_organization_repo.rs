//! Repository for the `partner_organizations` table.

use sqlx::PgPool;

use fundra_core::slug::slugify;
use fundra_core::types::DbId;

use crate::models::organization::{CreatePartnerOrganization, PartnerOrganization};

/// Column list for partner_organizations queries.
const COLUMNS: &str = "id, name, slug";

/// Provides CRUD operations for partner organizations.
pub struct PartnerOrganizationRepo;

impl PartnerOrganizationRepo {
    /// Insert a new partner organization, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePartnerOrganization,
    ) -> Result<PartnerOrganization, sqlx::Error> {
        let query = format!(
            "INSERT INTO partner_organizations (name, slug) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PartnerOrganization>(&query)
            .bind(&input.name)
            .bind(slugify(&input.name))
            .fetch_one(pool)
            .await
    }

    /// Find a partner organization by its primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PartnerOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partner_organizations WHERE id = $1");
        sqlx::query_as::<_, PartnerOrganization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List partner organizations ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<PartnerOrganization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partner_organizations ORDER BY name ASC");
        sqlx::query_as::<_, PartnerOrganization>(&query)
            .fetch_all(pool)
            .await
    }
}
