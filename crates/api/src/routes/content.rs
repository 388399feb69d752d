use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content document routes mounted at `/api/content`.
///
/// ```text
/// GET  /  -> get_content
/// POST /  -> replace_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(content::get_content).post(content::replace_content))
}
