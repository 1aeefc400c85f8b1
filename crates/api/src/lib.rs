//! HTTP API for the fundra backend.
//!
//! Exposes the project lifecycle (pitch/plan cascade), wallposts and
//! reactions, and the supporting resources (members, themes, partner
//! organizations, referrals, budget lines, links, testimonials) as a
//! JSON REST surface under `/api/v1`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
