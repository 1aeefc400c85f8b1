//! Project lifecycle orchestration.
//!
//! A project's phase and its pitch/plan sub-records are kept consistent
//! by [`synchronize_project_phase`], called explicitly by the write
//! paths instead of firing from hidden save hooks. The whole cascade
//! runs in a single transaction with the project row locked, so two
//! concurrent cascades over the same project serialize instead of
//! interleaving their pitch/plan writes.
//!
//! The rules, in order:
//!
//! 1. A project with no pitch gets one, copying the project's title.
//! 2. In the `pitch` phase an existing pitch's status is reset to `new`.
//! 3. In the `plan` phase (updates only) a plan is created if absent,
//!    its descriptive fields are copied from the pitch, its status is
//!    set to `new`, and the pitch is marked `approved`.
//!
//! Approving a pitch ([`approve_pitch`]) advances the project to the
//! `plan` phase and re-runs the cascade to a fixpoint. Re-running the
//! cascade on an already-converged project performs no writes, which
//! is what bounds the recursion.

use sqlx::{PgPool, Postgres, Transaction};

use fundra_core::types::DbId;

use crate::models::status::{PitchStatus, PlanStatus, ProjectPhase, StatusId};

/// Error type for the lifecycle cascade.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("project {0} not found")]
    ProjectNotFound(DbId),

    #[error("project {0} has no pitch")]
    PitchNotFound(DbId),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// What a cascade run created or updated. All flags false means the
/// run was a no-op, i.e. the project was already converged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PhaseSyncReport {
    /// A pitch was created for the project.
    pub pitch_created: bool,
    /// An existing pitch's status was reset to `new`.
    pub pitch_reset: bool,
    /// A plan was created for the project.
    pub plan_created: bool,
    /// The plan's descriptive fields or tags were (re)copied from the pitch.
    pub plan_synced: bool,
    /// The pitch's status was set to `approved`.
    pub pitch_approved: bool,
    /// The project's phase was advanced to `plan`.
    pub phase_advanced: bool,
}

impl PhaseSyncReport {
    /// True when the run performed no writes.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    fn merge(&mut self, other: PhaseSyncReport) {
        self.pitch_created |= other.pitch_created;
        self.pitch_reset |= other.pitch_reset;
        self.plan_created |= other.plan_created;
        self.plan_synced |= other.plan_synced;
        self.pitch_approved |= other.pitch_approved;
        self.phase_advanced |= other.phase_advanced;
    }
}

/// Run the phase cascade for a project in one transaction.
///
/// `is_new` marks the save that created the project: the plan-phase
/// rule (3) only applies to updates.
pub async fn synchronize_project_phase(
    pool: &PgPool,
    project_id: DbId,
    is_new: bool,
) -> Result<PhaseSyncReport, LifecycleError> {
    let mut tx = pool.begin().await?;
    let report = sync_in_tx(&mut tx, project_id, is_new).await?;
    tx.commit().await.map_err(LifecycleError::Db)?;
    Ok(report)
}

/// Approve a project's pitch and advance the project to the `plan`
/// phase, running the cascade to a fixpoint. Idempotent: approving an
/// already-approved pitch of a plan-phase project reports a no-op.
pub async fn approve_pitch(
    pool: &PgPool,
    project_id: DbId,
) -> Result<PhaseSyncReport, LifecycleError> {
    let mut tx = pool.begin().await?;
    let mut report = PhaseSyncReport::default();

    let project = lock_project(&mut tx, project_id).await?;
    let phase = decode_phase(project.phase_id)?;

    let pitch: Option<(DbId, StatusId)> =
        sqlx::query_as("SELECT id, status_id FROM project_pitches WHERE project_id = $1 FOR UPDATE")
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?;
    let (pitch_id, status_id) = pitch.ok_or(LifecycleError::PitchNotFound(project_id))?;

    if PitchStatus::from_id(status_id) != Some(PitchStatus::Approved) {
        sqlx::query("UPDATE project_pitches SET status_id = $1, updated_at = now() WHERE id = $2")
            .bind(PitchStatus::Approved.id())
            .bind(pitch_id)
            .execute(&mut *tx)
            .await?;
        report.pitch_approved = true;
    }

    if phase.allows_transition(ProjectPhase::Plan) && phase != ProjectPhase::Plan {
        sqlx::query("UPDATE projects SET phase_id = $1, updated_at = now() WHERE id = $2")
            .bind(ProjectPhase::Plan.id())
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        report.phase_advanced = true;
    }

    // Fixpoint: the first pass does the plan sync, the second verifies
    // convergence without writing.
    for _ in 0..2 {
        let pass = sync_in_tx(&mut tx, project_id, false).await?;
        let done = pass.is_noop();
        report.merge(pass);
        if done {
            break;
        }
    }

    tx.commit().await.map_err(LifecycleError::Db)?;
    tracing::info!(
        project_id,
        ?report,
        "pitch approved, project phase synchronized"
    );
    Ok(report)
}

/// The cascade body. Requires the caller's transaction; the project row
/// is locked for the duration.
async fn sync_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
    is_new: bool,
) -> Result<PhaseSyncReport, LifecycleError> {
    let mut report = PhaseSyncReport::default();

    let project = lock_project(tx, project_id).await?;
    let phase = decode_phase(project.phase_id)?;

    let pitch: Option<PitchFields> = sqlx::query_as(&format!(
        "SELECT {PITCH_FIELDS} FROM project_pitches WHERE project_id = $1 FOR UPDATE"
    ))
    .bind(project_id)
    .fetch_optional(&mut **tx)
    .await?;

    // Rule 1: every project has a pitch, titled after the project.
    let pitch = match pitch {
        Some(pitch) => pitch,
        None => {
            let created: PitchFields = sqlx::query_as(&format!(
                "INSERT INTO project_pitches (project_id, title, status_id) \
                 VALUES ($1, $2, $3) \
                 RETURNING {PITCH_FIELDS}"
            ))
            .bind(project_id)
            .bind(truncated_title(&project.title))
            .bind(PitchStatus::New.id())
            .fetch_one(&mut **tx)
            .await?;
            report.pitch_created = true;
            created
        }
    };

    // Rule 2: a pitch-phase save resets the pitch for review. The plan,
    // if any, is left as stored: the reference only touched it in memory.
    if phase == ProjectPhase::Pitch
        && !report.pitch_created
        && PitchStatus::from_id(pitch.status_id) != Some(PitchStatus::New)
    {
        sqlx::query("UPDATE project_pitches SET status_id = $1, updated_at = now() WHERE id = $2")
            .bind(PitchStatus::New.id())
            .bind(pitch.id)
            .execute(&mut **tx)
            .await?;
        report.pitch_reset = true;
    }

    // Rule 3: a plan-phase update materializes the plan from the pitch.
    if !is_new && phase == ProjectPhase::Plan {
        if report.pitch_created {
            // Advisory only; the reference constructs this failure and
            // discards it, so the cascade proceeds with an empty pitch.
            tracing::warn!(
                project_id,
                "plan requires an approved pitch, but none existed; plan will be synced from a blank pitch"
            );
        }

        let plan_id: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM project_plans WHERE project_id = $1 FOR UPDATE")
                .bind(project_id)
                .fetch_optional(&mut **tx)
                .await?;
        let plan_id = match plan_id {
            Some((id,)) => id,
            None => {
                let (id,): (DbId,) = sqlx::query_as(
                    "INSERT INTO project_plans (project_id, status_id) VALUES ($1, $2) RETURNING id",
                )
                .bind(project_id)
                .bind(PlanStatus::New.id())
                .fetch_one(&mut **tx)
                .await?;
                report.plan_created = true;
                id
            }
        };

        // Copy the pitch's descriptive fields onto the plan and reset its
        // status. Guarded with IS DISTINCT FROM so a converged plan is
        // untouched and the fixpoint terminates.
        let updated = sqlx::query(
            "UPDATE project_plans SET \
                country     = $1, \
                title       = $2, \
                description = $3, \
                image       = $4, \
                latitude    = $5, \
                longitude   = $6, \
                need_id     = $7, \
                pitch       = $8, \
                video_url   = $9, \
                theme_id    = $10, \
                status_id   = $11, \
                updated_at  = now() \
             WHERE id = $12 AND ( \
                country     IS DISTINCT FROM $1 OR \
                title       IS DISTINCT FROM $2 OR \
                description IS DISTINCT FROM $3 OR \
                image       IS DISTINCT FROM $4 OR \
                latitude    IS DISTINCT FROM $5 OR \
                longitude   IS DISTINCT FROM $6 OR \
                need_id     IS DISTINCT FROM $7 OR \
                pitch       IS DISTINCT FROM $8 OR \
                video_url   IS DISTINCT FROM $9 OR \
                theme_id    IS DISTINCT FROM $10 OR \
                status_id   IS DISTINCT FROM $11)",
        )
        .bind(&pitch.country)
        .bind(&pitch.title)
        .bind(&pitch.description)
        .bind(&pitch.image)
        .bind(pitch.latitude)
        .bind(pitch.longitude)
        .bind(pitch.need_id)
        .bind(&pitch.pitch)
        .bind(&pitch.video_url)
        .bind(pitch.theme_id)
        .bind(PlanStatus::New.id())
        .bind(plan_id)
        .execute(&mut **tx)
        .await?;
        if updated.rows_affected() > 0 {
            report.plan_synced = true;
        }

        if sync_tags(tx, pitch.id, plan_id).await? {
            report.plan_synced = true;
        }

        // Rule 3e: reaching the plan phase implies the pitch was approved.
        if PitchStatus::from_id(pitch.status_id) != Some(PitchStatus::Approved) {
            sqlx::query(
                "UPDATE project_pitches SET status_id = $1, updated_at = now() WHERE id = $2",
            )
            .bind(PitchStatus::Approved.id())
            .bind(pitch.id)
            .execute(&mut **tx)
            .await?;
            report.pitch_approved = true;
        }
    }

    Ok(report)
}

/// Copy the pitch's tag set onto the plan when they differ.
async fn sync_tags(
    tx: &mut Transaction<'_, Postgres>,
    pitch_id: DbId,
    plan_id: DbId,
) -> Result<bool, LifecycleError> {
    let pitch_tags: Vec<(DbId,)> =
        sqlx::query_as("SELECT tag_id FROM pitch_tags WHERE pitch_id = $1 ORDER BY tag_id")
            .bind(pitch_id)
            .fetch_all(&mut **tx)
            .await?;
    let plan_tags: Vec<(DbId,)> =
        sqlx::query_as("SELECT tag_id FROM plan_tags WHERE plan_id = $1 ORDER BY tag_id")
            .bind(plan_id)
            .fetch_all(&mut **tx)
            .await?;

    if pitch_tags == plan_tags {
        return Ok(false);
    }

    sqlx::query("DELETE FROM plan_tags WHERE plan_id = $1")
        .bind(plan_id)
        .execute(&mut **tx)
        .await?;
    sqlx::query(
        "INSERT INTO plan_tags (plan_id, tag_id) \
         SELECT $1, tag_id FROM pitch_tags WHERE pitch_id = $2",
    )
    .bind(plan_id)
    .bind(pitch_id)
    .execute(&mut **tx)
    .await?;
    Ok(true)
}

const PITCH_FIELDS: &str = "id, status_id, title, pitch, description, need_id, theme_id, \
    latitude, longitude, country, image, video_url";

/// The pitch columns rule 3 copies onto the plan.
#[derive(Debug, sqlx::FromRow)]
struct PitchFields {
    id: DbId,
    status_id: StatusId,
    title: String,
    pitch: String,
    description: String,
    need_id: StatusId,
    theme_id: Option<DbId>,
    latitude: Option<rust_decimal::Decimal>,
    longitude: Option<rust_decimal::Decimal>,
    country: Option<String>,
    image: Option<String>,
    video_url: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    phase_id: StatusId,
    title: String,
}

async fn lock_project(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
) -> Result<ProjectRow, LifecycleError> {
    sqlx::query_as("SELECT phase_id, title FROM projects WHERE id = $1 FOR UPDATE")
        .bind(project_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(LifecycleError::ProjectNotFound(project_id))
}

fn decode_phase(phase_id: StatusId) -> Result<ProjectPhase, LifecycleError> {
    ProjectPhase::from_id(phase_id).ok_or_else(|| {
        LifecycleError::Db(sqlx::Error::Decode(
            format!("unknown project phase id: {phase_id}").into(),
        ))
    })
}

/// The pitch title column is shorter than the project title column.
fn truncated_title(title: &str) -> String {
    let mut title = title.to_string();
    if title.len() > 100 {
        let mut cut = 100;
        while !title.is_char_boundary(cut) {
            cut -= 1;
        }
        title.truncate(cut);
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_is_noop() {
        assert!(PhaseSyncReport::default().is_noop());
    }

    #[test]
    fn any_flag_makes_report_non_noop() {
        let report = PhaseSyncReport {
            plan_synced: true,
            ..Default::default()
        };
        assert!(!report.is_noop());
    }

    #[test]
    fn merge_accumulates_flags() {
        let mut report = PhaseSyncReport {
            pitch_created: true,
            ..Default::default()
        };
        report.merge(PhaseSyncReport {
            plan_created: true,
            ..Default::default()
        });
        assert!(report.pitch_created);
        assert!(report.plan_created);
        assert!(!report.pitch_approved);
    }

    #[test]
    fn truncated_title_respects_char_boundaries() {
        assert_eq!(truncated_title("short"), "short");
        let long = "å".repeat(80);
        let truncated = truncated_title(&long);
        assert!(truncated.len() <= 100);
        assert!(truncated.chars().all(|c| c == 'å'));
    }
}
