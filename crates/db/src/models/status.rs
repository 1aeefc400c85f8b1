//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding database table (`project_phases`, `pitch_statuses`,
//! `plan_statuses`, `project_needs`).

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Decode a database status ID, `None` for unknown values.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle phase.
    ProjectPhase {
        Pitch = 1,
        Plan = 2,
        Campaign = 3,
        Results = 4,
    }
}

define_status_enum! {
    /// Pitch review status.
    PitchStatus {
        New = 1,
        Submitted = 2,
        Rejected = 3,
        Approved = 4,
    }
}

define_status_enum! {
    /// Plan review status.
    PlanStatus {
        New = 1,
        Submitted = 2,
        Rejected = 3,
        NeedsWork = 4,
        Approved = 5,
    }
}

define_status_enum! {
    /// What a project asks its backers for.
    ProjectNeed {
        Skills = 1,
        Finance = 2,
        Both = 3,
    }
}

impl ProjectPhase {
    /// Phases advance monotonically; regressions are rejected.
    /// Staying in the same phase is allowed so re-saves stay idempotent.
    pub fn allows_transition(self, next: ProjectPhase) -> bool {
        next.id() >= self.id()
    }
}
