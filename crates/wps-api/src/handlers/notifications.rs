use axum::extract::State;
use wps_core::Toast;

use super::{ok, ApiResult};
use crate::state::AppState;

/// GET /api/v1/notifications. Returns and clears the pending toasts.
pub async fn drain_notifications(State(state): State<AppState>) -> ApiResult<Vec<Toast>> {
    ok(state.toasts.drain())
}
