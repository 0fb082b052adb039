// ============================================================================
// WPS API - Scenario Wizard Handlers
// File: crates/wps-api/src/handlers/wizard.rs
// Description: Server-held wizard sessions keyed by uuid
// ============================================================================
//! Each session wraps one `ScenarioWizard` behind a mutex. The lock is never
//! held across an await: a submission takes the draft under the lock, writes
//! it unlocked, then re-locks to record the outcome.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use wps_core::services::ScenarioSubmission;
use wps_core::wizard::{BasicInfoPatch, FinancialPatch, WizardStep, WizardView};
use wps_core::ScenarioWizard;
use wps_shared::EntityId;

use super::{ok, ApiResult};
use crate::error::ApiError;
use crate::extract::Role;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct WizardSessionResponse {
    pub id: Uuid,
    pub step: WizardStep,
    pub open: bool,
    pub view: WizardView,
}

impl WizardSessionResponse {
    fn of(id: Uuid, wizard: &ScenarioWizard) -> Self {
        Self {
            id,
            step: wizard.step(),
            open: wizard.is_open(),
            view: wizard.view(),
        }
    }
}

/// One edit to the wizard form.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WizardEdit {
    BasicInfo(BasicInfoPatch),
    ToggleLob {
        lob_id: EntityId,
    },
    ToggleSpace {
        space_id: EntityId,
    },
    SetRating {
        attribute_id: EntityId,
        lob_id: EntityId,
        rating: i32,
    },
    SetFinancial {
        space_id: EntityId,
        monthly_cost: Option<f64>,
        lease_term_months: Option<i32>,
        start_date: Option<NaiveDate>,
    },
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub submission: ScenarioSubmission,
}

/// POST /api/v1/scenarios/wizard
pub async fn open_wizard(State(state): State<AppState>) -> ApiResult<WizardSessionResponse> {
    let (id, session) = state.open_wizard();
    info!("Wizard session {} opened", id);
    let wizard = session.lock();
    ok(WizardSessionResponse::of(id, &wizard))
}

/// GET /api/v1/scenarios/wizard/{id}
pub async fn get_wizard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<WizardSessionResponse> {
    let session = state.wizard(id)?;
    let wizard = session.lock();
    ok(WizardSessionResponse::of(id, &wizard))
}

/// PATCH /api/v1/scenarios/wizard/{id}
pub async fn edit_wizard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<WizardEdit>,
) -> ApiResult<WizardSessionResponse> {
    let session = state.wizard(id)?;
    let mut wizard = session.lock();
    match edit {
        WizardEdit::BasicInfo(patch) => wizard.set_basic_info(patch)?,
        WizardEdit::ToggleLob { lob_id } => {
            wizard.toggle_lob(lob_id)?;
        }
        WizardEdit::ToggleSpace { space_id } => {
            wizard.toggle_space(space_id)?;
        }
        WizardEdit::SetRating {
            attribute_id,
            lob_id,
            rating,
        } => wizard.set_rating(attribute_id, lob_id, rating)?,
        WizardEdit::SetFinancial {
            space_id,
            monthly_cost,
            lease_term_months,
            start_date,
        } => wizard.set_financial(
            space_id,
            FinancialPatch {
                monthly_cost,
                lease_term_months,
                start_date,
            },
        )?,
    }
    ok(WizardSessionResponse::of(id, &wizard))
}

/// POST /api/v1/scenarios/wizard/{id}/next
pub async fn next_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<WizardSessionResponse> {
    let session = state.wizard(id)?;
    let mut wizard = session.lock();
    wizard.next()?;
    ok(WizardSessionResponse::of(id, &wizard))
}

/// POST /api/v1/scenarios/wizard/{id}/back
pub async fn previous_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<WizardSessionResponse> {
    let session = state.wizard(id)?;
    let mut wizard = session.lock();
    wizard.back()?;
    ok(WizardSessionResponse::of(id, &wizard))
}

/// POST /api/v1/scenarios/wizard/{id}/submit
///
/// A successful submission closes and discards the session. A failed one
/// leaves it open on the final step.
pub async fn submit_wizard(
    State(state): State<AppState>,
    Role(capability): Role,
    Path(id): Path<Uuid>,
) -> ApiResult<SubmitResponse> {
    let session = state.wizard(id)?;
    let draft = session.lock().begin_submit()?;

    let result = state
        .services
        .scenarios
        .create_from_submission(capability, &draft)
        .await;

    session.lock().finish_submit(&result);
    let submission = result?;
    state.wizards.remove(id);
    info!("Wizard session {} submitted scenario {}", id, submission.scenario.id);
    ok(SubmitResponse { submission })
}

/// DELETE /api/v1/scenarios/wizard/{id}
pub async fn close_wizard(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    let session = state.wizard(id)?;
    session.lock().close()?;
    state.wizards.remove(id);
    ok(())
}
