//! Project plan entity model and DTOs.
//!
//! A plan is created lazily when its project reaches the `plan` phase;
//! the descriptive fields are copied from the approved pitch by the
//! lifecycle cascade.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A plan row from the `project_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectPlan {
    pub id: DbId,
    pub project_id: DbId,
    pub status_id: StatusId,
    pub title: String,
    pub pitch: String,
    pub description: String,
    pub social_impact: String,
    pub effects: String,
    pub for_who: String,
    pub future: String,
    pub reach: Option<i32>,
    pub need_id: StatusId,
    pub theme_id: Option<DbId>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub country: Option<String>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub partner_organization_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A plan together with its tag set, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPlanWithTags {
    #[serde(flatten)]
    pub plan: ProjectPlan,
    pub tags: Vec<String>,
}

/// DTO for updating a plan. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectPlan {
    #[validate(length(max = 100))]
    pub title: Option<String>,
    pub pitch: Option<String>,
    pub description: Option<String>,
    pub social_impact: Option<String>,
    pub effects: Option<String>,
    pub for_who: Option<String>,
    pub future: Option<String>,
    pub reach: Option<i32>,
    pub need_id: Option<StatusId>,
    pub theme_id: Option<DbId>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub country: Option<String>,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[validate(length(max = 100))]
    pub video_url: Option<String>,
    pub partner_organization_id: Option<DbId>,
    pub status_id: Option<StatusId>,
    pub tags: Option<Vec<String>>,
}
