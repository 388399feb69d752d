//! The stored content document and its fixed identity.
//!
//! Exactly one document exists. It is keyed by [`CONTENT_KEY`] and carries
//! that key in its `_id` member no matter what a client submitted.

use serde_json::Value;

use crate::content::{default_content, SiteContent};
use crate::error::CoreError;

/// Identity of the singleton content record.
pub const CONTENT_KEY: &str = "landing_page";

/// Document member that carries the identity key.
pub const ID_FIELD: &str = "_id";

/// Stamp the identity key onto a client payload.
///
/// The payload is otherwise taken as-is: no shape or field checks. Only a
/// JSON object can carry the key, so anything else is a validation error.
pub fn with_identity(payload: Value) -> Result<Value, CoreError> {
    match payload {
        Value::Object(mut map) => {
            map.insert(ID_FIELD.to_string(), Value::String(CONTENT_KEY.to_string()));
            Ok(Value::Object(map))
        }
        other => Err(CoreError::Validation(format!(
            "Content payload must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Parse a raw request body and stamp the identity key onto it.
///
/// The body is read as JSON whatever its declared media type.
pub fn from_payload(body: &[u8]) -> Result<Value, CoreError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| CoreError::Validation(format!("Content payload is not valid JSON: {e}")))?;
    with_identity(payload)
}

/// Serialize editor content into a storable document.
pub fn content_document(content: &SiteContent) -> Result<Value, CoreError> {
    let value =
        serde_json::to_value(content).map_err(|e| CoreError::MalformedDocument(e.to_string()))?;
    with_identity(value)
}

/// The document returned when nothing has been stored yet.
pub fn default_document() -> Value {
    content_document(&default_content()).unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
