//! HTTP handlers, one module per resource.

pub mod health;
pub mod company;
pub mod attributes;
pub mod goals;
pub mod lines_of_business;
pub mod spaces;
pub mod scenarios;
pub mod wizard;
pub mod navigation;
pub mod notifications;

use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::response::ApiResponse;

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

pub(crate) fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}
