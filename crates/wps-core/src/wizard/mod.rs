// ============================================================================
// WPS Core - Scenario Creation Wizard
// File: crates/wps-core/src/wizard/mod.rs
// ============================================================================
//! Five-step linear wizard that accumulates a scenario and submits it.
//!
//! Submission is split into [`ScenarioWizard::begin_submit`] and
//! [`ScenarioWizard::finish_submit`] so a caller that shares the wizard behind
//! a lock can release it while the backend calls run. While a submission is
//! in flight every navigation and close request is rejected.

pub mod form;
pub mod steps;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use wps_shared::EntityId;

pub use form::{
    BasicInfoPatch, FinancialInput, FinancialPatch, RatingInput, ScenarioForm, SubmissionDraft,
};
pub use steps::{StepIndicator, WizardStep, WizardView};

use crate::capability::Capability;
use crate::error::DomainError;
use crate::notify::{Notifier, Toast};
use crate::services::{ScenarioService, ScenarioSubmission};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("A scenario is being created; please wait")]
    Submitting,

    #[error("Scenarios can only be created from the final step")]
    NotAtFinalStep,

    #[error("The wizard has been closed")]
    Closed,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct ScenarioWizard {
    form: ScenarioForm,
    step: WizardStep,
    submitting: bool,
    open: bool,
    notifier: Arc<dyn Notifier>,
}

impl ScenarioWizard {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            form: ScenarioForm::default(),
            step: WizardStep::BasicInfo,
            submitting: false,
            open: true,
            notifier,
        }
    }

    pub fn form(&self) -> &ScenarioForm {
        &self.form
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> WizardView {
        WizardView::build(self.step, self.submitting, &self.form)
    }

    fn ensure_editable(&self) -> Result<(), WizardError> {
        if self.submitting {
            return Err(WizardError::Submitting);
        }
        if !self.open {
            return Err(WizardError::Closed);
        }
        Ok(())
    }

    pub fn set_basic_info(&mut self, patch: BasicInfoPatch) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.form.apply_basic_info(patch);
        Ok(())
    }

    pub fn toggle_lob(&mut self, lob_id: EntityId) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        Ok(self.form.toggle_lob(lob_id))
    }

    pub fn toggle_space(&mut self, space_id: EntityId) -> Result<bool, WizardError> {
        self.ensure_editable()?;
        Ok(self.form.toggle_space(space_id))
    }

    pub fn set_rating(
        &mut self,
        attribute_id: EntityId,
        lob_id: EntityId,
        rating: i32,
    ) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.form.set_rating(attribute_id, lob_id, rating);
        Ok(())
    }

    pub fn set_financial(
        &mut self,
        space_id: EntityId,
        patch: FinancialPatch,
    ) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.form.set_financial(space_id, patch);
        Ok(())
    }

    fn reject(&self, step: WizardStep, message: &'static str) -> WizardError {
        warn!(step = step.number(), "Wizard validation failed: {}", message);
        self.notifier.notify(Toast::validation(message));
        WizardError::Validation(message)
    }

    /// Advances one step if the current step validates. A failed validation
    /// raises a "Validation Error" toast and leaves the step unchanged.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_editable()?;
        if let Err(message) = self.step.validate(&self.form) {
            return Err(self.reject(self.step, message));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        debug!(step = self.step.number(), "Wizard advanced");
        Ok(self.step)
    }

    /// Goes back one step without validating. Stays on step 1.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_editable()?;
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        Ok(self.step)
    }

    pub fn close(&mut self) -> Result<(), WizardError> {
        if self.submitting {
            return Err(WizardError::Submitting);
        }
        self.open = false;
        Ok(())
    }

    /// Marks the wizard as submitting and returns the draft to write.
    ///
    /// Selections stay editable on every step, so the gates of all earlier
    /// steps are checked again here.
    pub fn begin_submit(&mut self) -> Result<SubmissionDraft, WizardError> {
        self.ensure_editable()?;
        if !self.step.is_last() {
            return Err(WizardError::NotAtFinalStep);
        }
        for step in WizardStep::ALL.into_iter().filter(|s| *s < self.step) {
            if let Err(message) = step.validate(&self.form) {
                return Err(self.reject(step, message));
            }
        }
        self.submitting = true;
        Ok(self.form.to_draft())
    }

    /// Clears the submitting flag. The wizard closes on success and stays
    /// on the final step on failure.
    pub fn finish_submit<T, E>(&mut self, result: &Result<T, E>) {
        self.submitting = false;
        if result.is_ok() {
            self.open = false;
        }
    }

    /// Runs a whole submission for a wizard owned by a single caller.
    pub async fn submit(
        &mut self,
        service: &ScenarioService,
        capability: Capability,
    ) -> Result<ScenarioSubmission, WizardError> {
        let draft = self.begin_submit()?;
        let result = service.create_from_submission(capability, &draft).await;
        self.finish_submit(&result);
        result.map_err(WizardError::from)
    }
}
