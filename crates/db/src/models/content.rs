//! Site content row.

use sqlx::FromRow;
use vela_core::types::Timestamp;

/// A row from the `site_content` table.
///
/// `document` holds the whole stored content, `_id` member included.
#[derive(Debug, Clone, FromRow)]
pub struct ContentRow {
    pub id: String,
    pub document: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
