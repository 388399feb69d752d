//! Repository for the `site_content` table.
//!
//! The table holds one row per content key; the application only ever uses
//! [`vela_core::document::CONTENT_KEY`].

use sqlx::PgPool;

use crate::models::content::ContentRow;

/// Column list for `site_content` queries.
const COLUMNS: &str = "id, document, created_at, updated_at";

/// Provides data access for the content document.
pub struct ContentRepo;

impl ContentRepo {
    /// Fetch the document stored under `key`.
    ///
    /// Returns `None` if nothing has been saved yet.
    pub async fn find(pool: &PgPool, key: &str) -> Result<Option<ContentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content WHERE id = $1");
        sqlx::query_as::<_, ContentRow>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert the document under `key`, or overwrite it completely.
    ///
    /// Last writer wins; there is no version check. The document is sent as
    /// JSON text so that `json` accepts every valid JSON string.
    pub async fn replace(
        pool: &PgPool,
        key: &str,
        document: &serde_json::Value,
    ) -> Result<ContentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_content (id, document) \
             VALUES ($1, $2::json) \
             ON CONFLICT (id) DO UPDATE SET \
                 document = EXCLUDED.document, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentRow>(&query)
            .bind(key)
            .bind(document.to_string())
            .fetch_one(pool)
            .await
    }
}
