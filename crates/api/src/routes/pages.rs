//! HTML pages, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::{admin, site};
use crate::state::AppState;

/// ```text
/// GET  /       -> landing_page
/// GET  /admin  -> show_editor
/// POST /admin  -> submit_editor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::landing_page))
        .route("/admin", get(admin::show_editor).post(admin::submit_editor))
}
