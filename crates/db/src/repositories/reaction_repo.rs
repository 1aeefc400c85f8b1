//! Repository for the `reactions` table.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::member::MemberSummary;
use crate::models::reaction::{CreateReaction, Reaction, ReactionDetail};

/// Column list for reactions queries.
const COLUMNS: &str = "id, wallpost_id, author_id, text, created_at";

/// Provides CRUD operations for wallpost reactions.
pub struct ReactionRepo;

impl ReactionRepo {
    /// Insert a new reaction on a wallpost, returning the created row.
    pub async fn create(
        pool: &PgPool,
        wallpost_id: DbId,
        input: &CreateReaction,
    ) -> Result<Reaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO reactions (wallpost_id, author_id, text) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reaction>(&query)
            .bind(wallpost_id)
            .bind(input.author_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a reaction by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reactions WHERE id = $1");
        sqlx::query_as::<_, Reaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a wallpost's reactions with author summaries, oldest first.
    pub async fn list_for_wallpost(
        pool: &PgPool,
        wallpost_id: DbId,
    ) -> Result<Vec<ReactionDetail>, sqlx::Error> {
        let rows: Vec<ReactionRow> = sqlx::query_as(
            "SELECT r.id, r.wallpost_id, r.text, r.created_at, \
                    m.id AS author_id, m.username, m.first_name, m.last_name \
             FROM reactions r \
             JOIN members m ON m.id = r.author_id \
             WHERE r.wallpost_id = $1 \
             ORDER BY r.created_at ASC, r.id ASC",
        )
        .bind(wallpost_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(ReactionRow::into_detail).collect())
    }

    /// Delete a reaction by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Internal helper struct for the reaction + author join.
#[derive(Debug, sqlx::FromRow)]
struct ReactionRow {
    id: DbId,
    wallpost_id: DbId,
    text: String,
    created_at: fundra_core::types::Timestamp,
    author_id: DbId,
    username: String,
    first_name: String,
    last_name: String,
}

impl ReactionRow {
    fn into_detail(self) -> ReactionDetail {
        ReactionDetail {
            id: self.id,
            wallpost_id: self.wallpost_id,
            author: MemberSummary {
                id: self.author_id,
                username: self.username,
                first_name: self.first_name,
                last_name: self.last_name,
            },
            text: self.text,
            created_at: self.created_at,
        }
    }
}
