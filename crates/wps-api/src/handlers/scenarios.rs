// ============================================================================
// WPS API - Scenario Handlers
// File: crates/wps-api/src/handlers/scenarios.rs
// ============================================================================

use axum::extract::{Path, State};
use serde::Serialize;
use tracing::warn;

use wps_core::views::{ScenarioDetailView, ScenarioListView, SCENARIO_LOAD_ERROR};
use wps_core::{DomainError, Scenario, ScenarioDetails};
use wps_shared::EntityId;

use super::{ok, ApiResult};
use crate::error::ApiError;
use crate::extract::Role;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScenarioDetailResponse {
    pub details: ScenarioDetails,
    pub view: ScenarioDetailView,
}

pub async fn list_scenarios(State(state): State<AppState>) -> ApiResult<Vec<Scenario>> {
    ok(state.services.scenarios.list().await?)
}

pub async fn scenarios_view(
    State(state): State<AppState>,
    Role(capability): Role,
) -> ApiResult<ScenarioListView> {
    let scenarios = state.services.scenarios.list().await?;
    ok(ScenarioListView::build(&scenarios, capability))
}

pub async fn get_scenario(State(state): State<AppState>, Path(id): Path<EntityId>) -> ApiResult<Scenario> {
    ok(state.services.scenarios.get(id).await?)
}

/// GET /api/v1/scenarios/{id}/detail
///
/// Backend failures surface as the load-error message; a missing scenario
/// stays a 404.
pub async fn scenario_detail(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> ApiResult<ScenarioDetailResponse> {
    let details = state.services.scenarios.details(id).await.map_err(|e| match e {
        DomainError::NotFound { .. } => ApiError::Domain(e),
        other => {
            warn!("Scenario {} failed to load: {}", id, other);
            ApiError::LoadFailed(SCENARIO_LOAD_ERROR)
        }
    })?;
    let view = ScenarioDetailView::build(&details);
    ok(ScenarioDetailResponse { details, view })
}
