//! Repository for the `referrals` table.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::referral::{CreateReferral, Referral};

/// Column list for referrals queries.
const COLUMNS: &str = "id, name, email, description";

/// Provides CRUD operations for referrals.
pub struct ReferralRepo;

impl ReferralRepo {
    /// Insert a new referral, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReferral) -> Result<Referral, sqlx::Error> {
        let query = format!(
            "INSERT INTO referrals (name, email, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Referral>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.description.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find a referral by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Referral>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM referrals WHERE id = $1");
        sqlx::query_as::<_, Referral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List referrals ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Referral>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM referrals ORDER BY name ASC");
        sqlx::query_as::<_, Referral>(&query).fetch_all(pool).await
    }
}
