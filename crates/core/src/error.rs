use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A join row referenced a parent that does not exist. The message names
    /// both foreign keys and deliberately does not say which one failed.
    #[error("Invalid {first} or {second}")]
    InvalidReference {
        first: &'static str,
        second: &'static str,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
