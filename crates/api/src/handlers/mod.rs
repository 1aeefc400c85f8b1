pub mod budget_line;
pub mod link;
pub mod member;
pub mod partner_organization;
pub mod pitch;
pub mod plan;
pub mod project;
pub mod reaction;
pub mod referral;
pub mod testimonial;
pub mod theme;
pub mod wallpost;
