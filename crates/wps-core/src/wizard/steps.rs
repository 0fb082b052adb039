//! Wizard steps and the rendered wizard chrome.

use serde::Serialize;

use super::form::ScenarioForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    LinesOfBusiness,
    Spaces,
    AttributeRatings,
    Financials,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::BasicInfo,
        WizardStep::LinesOfBusiness,
        WizardStep::Spaces,
        WizardStep::AttributeRatings,
        WizardStep::Financials,
    ];

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::LinesOfBusiness => 2,
            WizardStep::Spaces => 3,
            WizardStep::AttributeRatings => 4,
            WizardStep::Financials => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == n)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::LinesOfBusiness => "Lines of Business",
            WizardStep::Spaces => "Spaces",
            WizardStep::AttributeRatings => "Attribute Ratings",
            WizardStep::Financials => "Financials",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Scenario Name",
            WizardStep::LinesOfBusiness => "Select Lines of Business",
            WizardStep::Spaces => "Select Spaces",
            WizardStep::AttributeRatings => "Rate Attributes",
            WizardStep::Financials => "Financial Details",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Enter scenario name",
            WizardStep::LinesOfBusiness => {
                "Choose which lines of business will be included in this scenario."
            }
            WizardStep::Spaces => "Choose which spaces will be included in this scenario.",
            WizardStep::AttributeRatings => {
                "Rate how well each attribute matches your requirements."
            }
            WizardStep::Financials => {
                "Enter financial information for each space in the scenario."
            }
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Blocking validation for leaving this step. Steps 4 and 5 never block.
    pub fn validate(&self, form: &ScenarioForm) -> Result<(), &'static str> {
        match self {
            WizardStep::BasicInfo if form.name.trim().is_empty() => {
                Err("Please enter a scenario name")
            }
            WizardStep::LinesOfBusiness if form.lob_ids.is_empty() => {
                Err("Please select at least one line of business")
            }
            WizardStep::Spaces if form.space_ids.is_empty() => {
                Err("Please select at least one space")
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub number: u8,
    pub title: &'static str,
    /// Reached or current: rendered highlighted.
    pub reached: bool,
    /// Connector after this step is filled.
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardView {
    pub title: &'static str,
    pub steps: Vec<StepIndicator>,
    pub current_step: u8,
    pub heading: &'static str,
    pub hint: &'static str,
    pub back_label: &'static str,
    pub back_disabled: bool,
    pub primary_label: &'static str,
    pub primary_disabled: bool,
    pub close_disabled: bool,
    pub submitting: bool,
    pub form: ScenarioForm,
}

impl WizardView {
    pub fn build(step: WizardStep, submitting: bool, form: &ScenarioForm) -> Self {
        let steps = WizardStep::ALL
            .iter()
            .map(|s| StepIndicator {
                number: s.number(),
                title: s.title(),
                reached: *s <= step,
                completed: *s < step,
            })
            .collect();

        Self {
            title: "Create New Scenario",
            steps,
            current_step: step.number(),
            heading: step.heading(),
            hint: step.hint(),
            back_label: "Back",
            back_disabled: submitting || step.previous().is_none(),
            primary_label: if step.is_last() { "Create Scenario" } else { "Next" },
            primary_disabled: submitting,
            close_disabled: submitting,
            submitting,
            form: form.clone(),
        }
    }
}
