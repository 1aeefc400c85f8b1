//! Route definitions for the flat directory resources: themes,
//! partner organizations, and referrals.

use axum::routing::get;
use axum::Router;

use crate::handlers::{partner_organization, referral, theme};
use crate::state::AppState;

/// Routes mounted at `/themes`.
pub fn theme_router() -> Router<AppState> {
    Router::new().route("/", get(theme::list).post(theme::create))
}

/// Routes mounted at `/partner-organizations`.
pub fn partner_organization_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(partner_organization::list).post(partner_organization::create),
    )
}

/// Routes mounted at `/referrals`.
pub fn referral_router() -> Router<AppState> {
    Router::new().route("/", get(referral::list).post(referral::create))
}
