//! Repository for the `budget_lines` table.

use sqlx::PgPool;

use fundra_core::types::DbId;

use crate::models::budget_line::{BudgetLine, CreateBudgetLine};

/// Column list for budget_lines queries.
const COLUMNS: &str = "id, project_id, description, amount";

/// Provides CRUD operations for a project's budget sheet.
pub struct BudgetLineRepo;

impl BudgetLineRepo {
    /// Insert a new budget line for a project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateBudgetLine,
    ) -> Result<BudgetLine, sqlx::Error> {
        let query = format!(
            "INSERT INTO budget_lines (project_id, description, amount) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetLine>(&query)
            .bind(project_id)
            .bind(&input.description)
            .bind(input.amount)
            .fetch_one(pool)
            .await
    }

    /// List a project's budget lines in insertion order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BudgetLine>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budget_lines WHERE project_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, BudgetLine>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a budget line by its ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budget_lines WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
