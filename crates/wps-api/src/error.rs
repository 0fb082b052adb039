// ============================================================================
// WPS API - Error Mapping
// File: crates/wps-api/src/error.rs
// ============================================================================
//! Maps domain and wizard errors onto HTTP statuses and the JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;
use wps_core::{DomainError, WizardError};
use wps_shared::EntityId;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("{prompt}")]
    ConfirmationRequired {
        attribute_id: EntityId,
        prompt: &'static str,
    },

    #[error("Wizard session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    LoadFailed(&'static str),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(e) | ApiError::Wizard(WizardError::Domain(e)) => domain_status(e),
            ApiError::Wizard(WizardError::Validation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
            }
            ApiError::Wizard(WizardError::Submitting) => (StatusCode::CONFLICT, "SUBMITTING"),
            ApiError::Wizard(WizardError::NotAtFinalStep) => {
                (StatusCode::CONFLICT, "NOT_AT_FINAL_STEP")
            }
            ApiError::Wizard(WizardError::Closed) => (StatusCode::GONE, "WIZARD_CLOSED"),
            ApiError::ConfirmationRequired { .. } => {
                (StatusCode::CONFLICT, "CONFIRMATION_REQUIRED")
            }
            ApiError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::InvalidRole(_) | ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST")
            }
            ApiError::LoadFailed(_) => (StatusCode::BAD_GATEWAY, "LOAD_FAILED"),
        }
    }
}

fn domain_status(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::ProfileNotFound | DomainError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        }
        DomainError::ProfileAlreadyExists => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
        DomainError::AlreadyAdded(_) => (StatusCode::CONFLICT, "ALREADY_ADDED"),
        DomainError::SlotLimitReached { .. } => (StatusCode::CONFLICT, "SLOT_LIMIT_REACHED"),
        DomainError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        DomainError::ValidationError(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
        DomainError::DatabaseError(_) => (StatusCode::BAD_GATEWAY, "DATABASE_ERROR"),
        DomainError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("{}: {}", code, self);
        } else {
            tracing::warn!("{}: {}", code, self);
        }

        let body = Json(ApiResponse::<()>::error(code, &self.to_string()));
        (status, body).into_response()
    }
}
