//! Route definitions for the `/projects` resource.
//!
//! Also nests the pitch/plan lifecycle records and the project-scoped
//! sub-resources (budget lines, links, testimonials, wallposts) under
//! `/projects/{project_id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{budget_line, link, pitch, plan, project, testimonial, wallpost};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{project_id}/pitch                -> get_by_project
/// PUT    /{project_id}/pitch                -> update
/// POST   /{project_id}/pitch/approve        -> approve
///
/// GET    /{project_id}/plan                 -> get_by_project
/// PUT    /{project_id}/plan                 -> update
///
/// GET    /{project_id}/budget-lines         -> list_for_project
/// POST   /{project_id}/budget-lines         -> create
/// GET    /{project_id}/links                -> list_for_project
/// POST   /{project_id}/links                -> create
/// GET    /{project_id}/testimonials         -> list_for_project
/// POST   /{project_id}/testimonials         -> create
///
/// GET    /{project_id}/wallposts            -> list_for_project
/// POST   /{project_id}/wallposts/text       -> create_text
/// POST   /{project_id}/wallposts/media      -> create_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{project_id}/pitch",
            get(pitch::get_by_project).put(pitch::update),
        )
        .route("/{project_id}/pitch/approve", post(pitch::approve))
        .route(
            "/{project_id}/plan",
            get(plan::get_by_project).put(plan::update),
        )
        .route(
            "/{project_id}/budget-lines",
            get(budget_line::list_for_project).post(budget_line::create),
        )
        .route(
            "/{project_id}/links",
            get(link::list_for_project).post(link::create),
        )
        .route(
            "/{project_id}/testimonials",
            get(testimonial::list_for_project).post(testimonial::create),
        )
        .route("/{project_id}/wallposts", get(wallpost::list_for_project))
        .route("/{project_id}/wallposts/text", post(wallpost::create_text))
        .route("/{project_id}/wallposts/media", post(wallpost::create_media))
}
