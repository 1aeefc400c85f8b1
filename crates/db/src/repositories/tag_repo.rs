//! Repository for the `tags` table and its pitch/plan junctions.
//!
//! Tags are exposed to callers as a set of strings; names are
//! normalized to lowercase and created on first use.

use sqlx::PgPool;

use fundra_core::types::DbId;

/// Provides tag-set operations for pitches and plans.
pub struct TagRepo;

impl TagRepo {
    /// List a pitch's tags, alphabetically.
    pub async fn list_for_pitch(pool: &PgPool, pitch_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT t.name FROM tags t \
             JOIN pitch_tags pt ON pt.tag_id = t.id \
             WHERE pt.pitch_id = $1 \
             ORDER BY t.name ASC",
        )
        .bind(pitch_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// List a plan's tags, alphabetically.
    pub async fn list_for_plan(pool: &PgPool, plan_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT t.name FROM tags t \
             JOIN plan_tags pt ON pt.tag_id = t.id \
             WHERE pt.plan_id = $1 \
             ORDER BY t.name ASC",
        )
        .bind(plan_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Replace a pitch's tag set.
    pub async fn set_for_pitch(
        pool: &PgPool,
        pitch_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let tag_ids = Self::ensure_tags(&mut tx, names).await?;

        sqlx::query("DELETE FROM pitch_tags WHERE pitch_id = $1")
            .bind(pitch_id)
            .execute(&mut *tx)
            .await?;
        for tag_id in tag_ids {
            sqlx::query("INSERT INTO pitch_tags (pitch_id, tag_id) VALUES ($1, $2)")
                .bind(pitch_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }

    /// Replace a plan's tag set.
    pub async fn set_for_plan(
        pool: &PgPool,
        plan_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let tag_ids = Self::ensure_tags(&mut tx, names).await?;

        sqlx::query("DELETE FROM plan_tags WHERE plan_id = $1")
            .bind(plan_id)
            .execute(&mut *tx)
            .await?;
        for tag_id in tag_ids {
            sqlx::query("INSERT INTO plan_tags (plan_id, tag_id) VALUES ($1, $2)")
                .bind(plan_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }

    /// Create any missing tags and return the ids for `names`,
    /// deduplicated after normalization.
    async fn ensure_tags(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        names: &[String],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut ids = Vec::with_capacity(names.len());
        let mut seen = Vec::with_capacity(names.len());

        for name in names {
            let normalized = name.trim().to_lowercase();
            if normalized.is_empty() || seen.contains(&normalized) {
                continue;
            }
            let (id,): (DbId,) = sqlx::query_as(
                "INSERT INTO tags (name) VALUES ($1) \
                 ON CONFLICT ON CONSTRAINT uq_tags_name \
                 DO UPDATE SET name = EXCLUDED.name \
                 RETURNING id",
            )
            .bind(&normalized)
            .fetch_one(&mut **tx)
            .await?;
            ids.push(id);
            seen.push(normalized);
        }

        Ok(ids)
    }
}
