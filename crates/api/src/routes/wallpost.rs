//! Route definitions for the `/wallposts` resource.
//!
//! Creation is project-scoped and lives under `/projects` (see
//! [`crate::routes::project`]); this module covers detail access and
//! the nested reactions.

use axum::routing::get;
use axum::Router;

use crate::handlers::{reaction, wallpost};
use crate::state::AppState;

/// Routes mounted at `/wallposts`.
///
/// ```text
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// GET    /{id}/reactions  -> list_for_wallpost
/// POST   /{id}/reactions  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(wallpost::get_by_id).delete(wallpost::delete))
        .route(
            "/{id}/reactions",
            get(reaction::list_for_wallpost).post(reaction::create),
        )
}
