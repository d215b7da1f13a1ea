use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID {id} is not exist")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Icon file {0} is not exist")]
    FileNotFound(String),

    #[error("Invalid icon file type {content_type}. Expected one of {allowed}")]
    UnsupportedMediaType {
        content_type: String,
        allowed: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
