//! Handlers for the content document API.
//!
//! The document is passed through verbatim in both directions: the only
//! server-side change is the forced `_id`.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use vela_core::document::{default_document, from_payload, CONTENT_KEY};
use vela_db::repositories::ContentRepo;
use vela_db::DbPool;

use crate::error::{AppError, AppResult, StoreAction};
use crate::state::AppState;

/// GET /api/content
///
/// Return the stored document, or the default document when nothing has
/// been saved yet.
pub async fn get_content(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let document = fetch_document(&state.pool)
        .await?
        .unwrap_or_else(default_document);
    Ok(Json(document))
}

/// POST /api/content
///
/// Replace the whole document with the request body.
///
/// The body is parsed as JSON regardless of `Content-Type`; anything that
/// is not a JSON object is a validation error.
pub async fn replace_content(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let document = from_payload(&body)?;
    store_document(&state.pool, &document).await?;
    Ok(Json(json!({ "success": true })))
}

/// Load the stored document, `None` when the store is empty.
pub async fn fetch_document(pool: &DbPool) -> AppResult<Option<Value>> {
    let row = ContentRepo::find(pool, CONTENT_KEY)
        .await
        .map_err(AppError::store(StoreAction::Fetch))?;
    Ok(row.map(|r| r.document))
}

/// Upsert a document that already carries its identity.
pub async fn store_document(pool: &DbPool, document: &Value) -> AppResult<()> {
    let row = ContentRepo::replace(pool, CONTENT_KEY, document)
        .await
        .map_err(AppError::store(StoreAction::Update))?;

    tracing::info!(
        id = %row.id,
        updated_at = %row.updated_at,
        "Content document replaced",
    );
    Ok(())
}
