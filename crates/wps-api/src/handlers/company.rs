// ============================================================================
// WPS API - Company Profile Handlers
// File: crates/wps-api/src/handlers/company.rs
// ============================================================================

use axum::{extract::State, Json};

use wps_core::views::CompanyInformationView;
use wps_core::{CompanyProfile, NewCompanyProfile, ProfileUpdate};

use super::{ok, ApiResult};
use crate::extract::Role;
use crate::state::AppState;

/// GET /api/v1/company. `data` is null until the profile is initialized.
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Option<CompanyProfile>> {
    ok(state.services.profile.get().await?)
}

/// POST /api/v1/company
pub async fn initialize_profile(
    State(state): State<AppState>,
    Role(capability): Role,
    Json(payload): Json<NewCompanyProfile>,
) -> ApiResult<CompanyProfile> {
    ok(state.services.profile.initialize(capability, payload).await?)
}

/// PATCH /api/v1/company
pub async fn update_profile(
    State(state): State<AppState>,
    Role(capability): Role,
    Json(payload): Json<ProfileUpdate>,
) -> ApiResult<CompanyProfile> {
    ok(state.services.profile.update(capability, payload).await?)
}

/// GET /api/v1/company/view
pub async fn profile_view(
    State(state): State<AppState>,
    Role(capability): Role,
) -> ApiResult<CompanyInformationView> {
    let profile = state.services.profile.require().await?;
    ok(CompanyInformationView::build(&profile, capability))
}
