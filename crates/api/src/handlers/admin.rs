//! Handlers for the admin editor.
//!
//! The editor page is a single form. `GET` loads the stored document into a
//! fresh session; `POST` rebuilds the session from the submitted form,
//! performs the pressed action, and renders the form again. Only the `save`
//! action touches the store.

use axum::extract::State;
use axum::Form;
use maud::Markup;
use vela_core::document::content_document;
use vela_core::editor::form::{EditorForm, FormAction};
use vela_core::editor::EditorSession;
use vela_db::DbPool;

use crate::error::AppResult;
use crate::handlers::content::{fetch_document, store_document};
use crate::state::AppState;
use crate::views;

/// GET /admin
pub async fn show_editor(State(state): State<AppState>) -> AppResult<Markup> {
    let mut session = EditorSession::start();

    let loaded: AppResult<()> = match fetch_document(&state.pool).await {
        Ok(document) => session.loaded(document.as_ref()).map_err(Into::into),
        Err(e) => Err(e),
    };
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "Editor could not load content, using defaults");
        session.load_failed()?;
    }

    Ok(views::admin::editor_page(&session, &state.config.upload))
}

/// POST /admin
pub async fn submit_editor(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Markup> {
    let form = EditorForm::decode(&pairs)?;
    let mut session = EditorSession::resume(form.content, form.tab);

    match form.action {
        FormAction::Redisplay => {}
        FormAction::SwitchTab(tab) => session.switch_tab(tab)?,
        FormAction::Edit(edit) => session.apply(&edit)?,
        FormAction::Save => save(&mut session, &state.pool).await?,
    }

    Ok(views::admin::editor_page(&session, &state.config.upload))
}

async fn save(session: &mut EditorSession, pool: &DbPool) -> AppResult<()> {
    let payload = session.begin_save()?;
    let document = content_document(&payload)?;

    match store_document(pool, &document).await {
        Ok(()) => session.save_succeeded()?,
        Err(e) => {
            tracing::error!(error = %e, "Editor save failed");
            session.save_failed()?;
        }
    }
    Ok(())
}
