use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use wps_core::views::{DashboardView, Route, SidebarView};

use super::{ok, ApiResult};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct ResolvedRoute {
    pub route: Route,
    pub title: &'static str,
}

/// GET /api/v1/navigation
pub async fn sidebar() -> ApiResult<SidebarView> {
    ok(SidebarView::build())
}

/// GET /api/v1/navigation/resolve?path=/scenarios/3
pub async fn resolve_route(Query(query): Query<ResolveQuery>) -> ApiResult<ResolvedRoute> {
    let route = Route::parse(&query.path)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown route: {}", query.path)))?;
    ok(ResolvedRoute {
        title: route.title(),
        route,
    })
}

/// GET /api/v1/dashboard
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<DashboardView> {
    let services = &state.services;
    let (profile, lobs, spaces, scenarios) = tokio::try_join!(
        services.profile.get(),
        services.lobs.list(),
        services.spaces.list(),
        services.scenarios.list(),
    )?;
    ok(DashboardView::build(profile.as_ref(), &lobs, &spaces, &scenarios))
}
