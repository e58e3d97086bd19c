use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid score: {0}")]
    InvalidScore(String),

    #[error("Duplicate vote: {0}")]
    DuplicateVote(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
