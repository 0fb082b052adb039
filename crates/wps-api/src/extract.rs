//! Request extractors

use axum::{extract::FromRequestParts, http::request::Parts};
use wps_core::Capability;
use wps_shared::constants::ROLE_HEADER;

use crate::error::ApiError;
use crate::state::AppState;

/// Caller capability taken from the role header, or the configured default
/// when the header is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role(pub Capability);

impl FromRequestParts<AppState> for Role {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ROLE_HEADER) else {
            return Ok(Role(state.default_capability));
        };

        let raw = value
            .to_str()
            .map_err(|_| ApiError::InvalidRole("<non-ascii>".to_string()))?;
        Capability::from_str(raw)
            .map(Role)
            .ok_or_else(|| ApiError::InvalidRole(raw.to_string()))
    }
}
