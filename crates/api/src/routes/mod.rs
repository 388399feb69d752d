pub mod content;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /content    fetch the content document (defaults when none stored)
/// POST /content    replace the content document
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/content", content::router())
}
