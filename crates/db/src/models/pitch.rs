//! Project pitch entity model and DTOs.
//!
//! Every project has exactly one pitch (created by the lifecycle
//! cascade). The pitch's tag set lives in the `pitch_tags` junction
//! and is exposed alongside the row via [`ProjectPitchWithTags`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use fundra_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A pitch row from the `project_pitches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectPitch {
    pub id: DbId,
    pub project_id: DbId,
    pub status_id: StatusId,
    pub title: String,
    pub pitch: String,
    pub description: String,
    pub need_id: StatusId,
    pub theme_id: Option<DbId>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub country: Option<String>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A pitch together with its tag set, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPitchWithTags {
    #[serde(flatten)]
    pub pitch: ProjectPitch,
    pub tags: Vec<String>,
}

/// DTO for updating a pitch. All fields are optional.
///
/// `status_id` accepts the submitted/rejected review statuses;
/// approval goes through the dedicated approve operation so the
/// phase cascade always runs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProjectPitch {
    #[validate(length(max = 100))]
    pub title: Option<String>,
    pub pitch: Option<String>,
    pub description: Option<String>,
    pub need_id: Option<StatusId>,
    pub theme_id: Option<DbId>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub country: Option<String>,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[validate(length(max = 100))]
    pub video_url: Option<String>,
    pub status_id: Option<StatusId>,
    pub tags: Option<Vec<String>>,
}
