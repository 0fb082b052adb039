use axum::{
    extract::{Path, State},
    Json,
};

use wps_core::{LineOfBusiness, LineOfBusinessUpdate, NewLineOfBusiness};
use wps_shared::EntityId;

use super::{ok, ApiResult};
use crate::extract::Role;
use crate::state::AppState;

pub async fn list_lobs(State(state): State<AppState>) -> ApiResult<Vec<LineOfBusiness>> {
    ok(state.services.lobs.list().await?)
}

pub async fn get_lob(State(state): State<AppState>, Path(id): Path<EntityId>) -> ApiResult<LineOfBusiness> {
    ok(state.services.lobs.get(id).await?)
}

pub async fn create_lob(
    State(state): State<AppState>,
    Role(capability): Role,
    Json(payload): Json<NewLineOfBusiness>,
) -> ApiResult<LineOfBusiness> {
    ok(state.services.lobs.create(capability, payload).await?)
}

pub async fn update_lob(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
    Json(payload): Json<LineOfBusinessUpdate>,
) -> ApiResult<LineOfBusiness> {
    ok(state.services.lobs.update(capability, id, payload).await?)
}

pub async fn delete_lob(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<EntityId>,
) -> ApiResult<()> {
    ok(state.services.lobs.remove(capability, id).await?)
}
