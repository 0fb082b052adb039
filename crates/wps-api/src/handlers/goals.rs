use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use wps_core::views::GoalListView;
use wps_core::{CompanyGoal, PredefinedGoal, Slot};
use wps_shared::EntityId;

use super::attributes::ImportanceRequest;
use super::{ok, ApiResult};
use crate::extract::Role;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddGoalRequest {
    pub name: PredefinedGoal,
    pub slot: Slot,
}

pub async fn list_goals(State(state): State<AppState>) -> ApiResult<Vec<CompanyGoal>> {
    ok(state.services.goals.list().await?)
}

pub async fn goals_view(State(state): State<AppState>, Role(capability): Role) -> ApiResult<GoalListView> {
    let goals = state.services.goals.list().await?;
    ok(GoalListView::build(&goals, capability))
}

pub async fn get_goal(State(state): State<AppState>, Path(id): Path<EntityId>) -> ApiResult<CompanyGoal> {
    ok(state.services.goals.get(id).await?)
}

pub async fn add_goal(
    State(state): State<AppState>,
    Role(capability): Role,
    Json(payload): Json<AddGoalRequest>,
) -> ApiResult<CompanyGoal> {
    ok(state.services.goals.add(capability, payload.name, payload.slot).await?)
}

pub async fn update_goal_importance(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
    Json(payload): Json<ImportanceRequest>,
) -> ApiResult<CompanyGoal> {
    ok(state
        .services
        .goals
        .update_importance(capability, id, payload.importance.value())
        .await?)
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
) -> ApiResult<CompanyGoal> {
    ok(state.services.goals.toggle_primary(capability, id).await?)
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
) -> ApiResult<()> {
    ok(state.services.goals.remove(capability, id).await?)
}
