//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod budget_line_repo;
pub mod link_repo;
pub mod member_repo;
pub mod partner_organization_repo;
pub mod pitch_repo;
pub mod plan_repo;
pub mod project_repo;
pub mod reaction_repo;
pub mod referral_repo;
pub mod tag_repo;
pub mod testimonial_repo;
pub mod theme_repo;
pub mod wallpost_repo;

pub use budget_line_repo::BudgetLineRepo;
pub use link_repo::LinkRepo;
pub use member_repo::MemberRepo;
pub use partner_organization_repo::PartnerOrganizationRepo;
pub use pitch_repo::PitchRepo;
pub use plan_repo::PlanRepo;
pub use project_repo::ProjectRepo;
pub use reaction_repo::ReactionRepo;
pub use referral_repo::ReferralRepo;
pub use tag_repo::TagRepo;
pub use testimonial_repo::TestimonialRepo;
pub use theme_repo::ThemeRepo;
pub use wallpost_repo::WallPostRepo;
