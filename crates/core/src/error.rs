#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed content document: {0}")]
    MalformedDocument(String),

    #[error("Invalid editor transition: {0}")]
    InvalidTransition(String),
}
