use axum::{
    extract::{Path, State},
    Json,
};

use wps_core::{NewSpace, Space, SpaceUpdate};
use wps_shared::EntityId;

use super::{ok, ApiResult};
use crate::extract::Role;
use crate::state::AppState;

pub async fn list_spaces(State(state): State<AppState>) -> ApiResult<Vec<Space>> {
    ok(state.services.spaces.list().await?)
}

pub async fn get_space(State(state): State<AppState>, Path(id): Path<EntityId>) -> ApiResult<Space> {
    ok(state.services.spaces.get(id).await?)
}

pub async fn create_space(
    State(state): State<AppState>,
    Role(capability): Role,
    Json(payload): Json<NewSpace>,
) -> ApiResult<Space> {
    ok(state.services.spaces.create(capability, payload).await?)
}

pub async fn update_space(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
    Json(payload): Json<SpaceUpdate>,
) -> ApiResult<Space> {
    ok(state.services.spaces.update(capability, id, payload).await?)
}

pub async fn delete_space(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
) -> ApiResult<()> {
    ok(state.services.spaces.remove(capability, id).await?)
}
