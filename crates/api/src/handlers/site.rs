use axum::extract::State;
use maud::Markup;
use vela_core::content::{default_content, merge_over_defaults, SiteContent};

use crate::handlers::content::fetch_document;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Render the public landing page. Store or document problems are logged
/// and the page falls back to the default content.
pub async fn landing_page(State(state): State<AppState>) -> Markup {
    let content = load_content(&state).await;
    views::site::landing_page(&content)
}

async fn load_content(state: &AppState) -> SiteContent {
    match fetch_document(&state.pool).await {
        Ok(Some(document)) => merge_over_defaults(&document).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored content is malformed, rendering defaults");
            default_content()
        }),
        Ok(None) => default_content(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load content, rendering defaults");
            default_content()
        }
    }
}
