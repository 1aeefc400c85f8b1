//! Budget line model and DTOs.
//!
//! Entries to a project's requested-budget sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::DbId;

/// A row from the `budget_lines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetLine {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub amount: Decimal,
}

/// DTO for creating a budget line.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBudgetLine {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    pub amount: Decimal,
}
