pub mod directory;
pub mod health;
pub mod member;
pub mod project;
pub mod wallpost;

use axum::routing::delete;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                list, create
/// /projects/{id}                           get, update, delete
/// /projects/{project_id}/pitch             get, update
/// /projects/{project_id}/pitch/approve     approve (POST)
/// /projects/{project_id}/plan              get, update
/// /projects/{project_id}/budget-lines      list, create
/// /projects/{project_id}/links             list, create
/// /projects/{project_id}/testimonials      list, create
/// /projects/{project_id}/wallposts         list
/// /projects/{project_id}/wallposts/text    create text post (POST)
/// /projects/{project_id}/wallposts/media   create media post (POST)
///
/// /wallposts/{id}                          get, delete
/// /wallposts/{id}/reactions                list, create
///
/// /reactions/{id}                          delete
/// /budget-lines/{id}                       delete
/// /links/{id}                              delete
///
/// /members                                 list, create
/// /members/{id}                            get
/// /themes                                  list, create
/// /partner-organizations                   list, create
/// /referrals                               list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Project routes (also nests pitch, plan, and project-scoped
        // sub-resources including wallpost creation).
        .nest("/projects", project::router())
        // Wallpost detail and nested reactions.
        .nest("/wallposts", wallpost::router())
        // Flat deletes for rows addressed by their own id.
        .route("/reactions/{id}", delete(handlers::reaction::delete))
        .route("/budget-lines/{id}", delete(handlers::budget_line::delete))
        .route("/links/{id}", delete(handlers::link::delete))
        // Members.
        .nest("/members", member::router())
        // Directory resources.
        .nest("/themes", directory::theme_router())
        .nest(
            "/partner-organizations",
            directory::partner_organization_router(),
        )
        .nest("/referrals", directory::referral_router())
}
