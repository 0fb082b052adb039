// ============================================================================
// WPS API - Workspace Attribute Handlers
// File: crates/wps-api/src/handlers/attributes.rs
// ============================================================================

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use wps_core::services::{ConfirmationAnswer, DeleteOutcome};
use wps_core::views::{AttributeListView, ImportanceInput};
use wps_core::{Industry, IndustryWeighting, PredefinedAttribute, Slot, WorkspaceAttribute};
use wps_shared::EntityId;

use super::{ok, ApiResult};
use crate::error::ApiError;
use crate::extract::Role;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddAttributeRequest {
    pub name: PredefinedAttribute,
    pub slot: Slot,
}

/// Importance as typed into the editor: a number or raw text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImportanceValue {
    Number(i32),
    Text(String),
}

impl ImportanceValue {
    pub fn value(&self) -> i32 {
        match self {
            ImportanceValue::Number(n) => *n,
            ImportanceValue::Text(raw) => ImportanceInput::parse(raw),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportanceRequest {
    pub importance: ImportanceValue,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub confirm: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub outcome: DeleteOutcome,
}

#[derive(Debug, Deserialize)]
pub struct WeightingQuery {
    pub industry: String,
}

pub async fn list_attributes(State(state): State<AppState>) -> ApiResult<Vec<WorkspaceAttribute>> {
    ok(state.services.attributes.list().await?)
}

pub async fn attributes_view(
    State(state): State<AppState>,
    Role(capability): Role,
) -> ApiResult<AttributeListView> {
    let attributes = state.services.attributes.list().await?;
    ok(AttributeListView::build(&attributes, capability))
}

pub async fn get_attribute(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> ApiResult<WorkspaceAttribute> {
    ok(state.services.attributes.get(id).await?)
}

pub async fn add_attribute(
    State(state): State<AppState>,
    Role(capability): Role,
    Json(payload): Json<AddAttributeRequest>,
) -> ApiResult<WorkspaceAttribute> {
    ok(state
        .services
        .attributes
        .add(capability, payload.name, payload.slot)
        .await?)
}

pub async fn update_attribute_importance(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
    Json(payload): Json<ImportanceRequest>,
) -> ApiResult<WorkspaceAttribute> {
    ok(state
        .services
        .attributes
        .update_importance(capability, id, payload.importance.value())
        .await?)
}

pub async fn toggle_attribute(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
) -> ApiResult<WorkspaceAttribute> {
    ok(state.services.attributes.toggle_primary(capability, id).await?)
}

/// DELETE /api/v1/attributes/{id}?confirm=true|false
///
/// Without `confirm` nothing is deleted and the warning prompt comes back
/// as a 409.
pub async fn delete_attribute(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<DeleteResponse> {
    let confirmation = state.services.attributes.request_delete(capability, id)?;
    let Some(confirmed) = query.confirm else {
        return Err(ApiError::ConfirmationRequired {
            attribute_id: confirmation.attribute_id(),
            prompt: confirmation.prompt(),
        });
    };

    let outcome = state
        .services
        .attributes
        .resolve_delete(capability, confirmation, ConfirmationAnswer::from(confirmed))
        .await?;
    ok(DeleteResponse { outcome })
}

/// GET /api/v1/weightings?industry=Technology
pub async fn list_weightings(
    State(state): State<AppState>,
    Query(query): Query<WeightingQuery>,
) -> ApiResult<Vec<IndustryWeighting>> {
    let industry = Industry::from_str(&query.industry)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown industry: {}", query.industry)))?;
    ok(state.services.attributes.industry_weightings(industry).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_text_is_parsed_and_clamped() {
        let typed: ImportanceRequest = serde_json::from_str(r#"{"importance": "250"}"#).unwrap();
        assert_eq!(typed.importance.value(), 100);

        let junk: ImportanceRequest = serde_json::from_str(r#"{"importance": "abc"}"#).unwrap();
        assert_eq!(junk.importance.value(), 0);

        let number: ImportanceRequest = serde_json::from_str(r#"{"importance": 42}"#).unwrap();
        assert_eq!(number.importance.value(), 42);
    }
}
