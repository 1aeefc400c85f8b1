//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod budget_line;
pub mod link;
pub mod member;
pub mod organization;
pub mod pitch;
pub mod plan;
pub mod project;
pub mod reaction;
pub mod referral;
pub mod status;
pub mod testimonial;
pub mod theme;
pub mod wallpost;
