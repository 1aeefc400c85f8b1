//! Repository for the `members` table.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::member::{CreateMember, Member, MemberSummary};

/// Column list for members queries.
const COLUMNS: &str = "id, username, first_name, last_name, created_at";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (username, first_name, last_name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.username)
            .bind(input.first_name.as_deref().unwrap_or(""))
            .bind(input.last_name.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    /// Find a member by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the author summary nested in wallpost representations.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MemberSummary>, sqlx::Error> {
        sqlx::query_as::<_, MemberSummary>(
            "SELECT id, username, first_name, last_name FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List members ordered by username.
    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY username ASC");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }
}
