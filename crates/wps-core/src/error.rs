//! Domain errors

use thiserror::Error;
use validator::ValidationErrors;
use wps_shared::EntityId;

use crate::domain::Slot;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Company profile not found")]
    ProfileNotFound,

    #[error("Company profile already exists")]
    ProfileAlreadyExists,

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{0} has already been added")]
    AlreadyAdded(String),

    #[error("Maximum of 3 {} {noun} allowed", .slot.label())]
    SlotLimitReached { slot: Slot, noun: &'static str },

    #[error("This action requires administrator access")]
    Forbidden,

    #[error("{0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        DomainError::NotFound { entity, id }
    }

    /// Errors raised before any backend call is made.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            DomainError::AlreadyAdded(_)
                | DomainError::SlotLimitReached { .. }
                | DomainError::Forbidden
                | DomainError::ValidationError(_)
        )
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        DomainError::ValidationError(message)
    }
}
