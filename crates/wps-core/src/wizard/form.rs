//! Accumulated wizard input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wps_shared::{clamp_importance, EntityId};

use crate::domain::{ScenarioObjective, ScenarioStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingInput {
    pub attribute_id: EntityId,
    pub lob_id: EntityId,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInput {
    pub space_id: EntityId,
    pub monthly_cost: Option<f64>,
    pub lease_term_months: Option<i32>,
    pub start_date: Option<NaiveDate>,
}

/// Fields of step 1. `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfoPatch {
    pub name: Option<String>,
    pub objective: Option<ScenarioObjective>,
    pub description: Option<String>,
    pub status: Option<ScenarioStatus>,
}

/// Per-field update of one space's financials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialPatch {
    pub monthly_cost: Option<f64>,
    pub lease_term_months: Option<i32>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioForm {
    pub name: String,
    pub objective: ScenarioObjective,
    pub description: Option<String>,
    /// Editable but never persisted: submissions are always drafts.
    pub status: ScenarioStatus,
    pub lob_ids: Vec<EntityId>,
    pub space_ids: Vec<EntityId>,
    pub attribute_ratings: Vec<RatingInput>,
    pub financials: Vec<FinancialInput>,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            objective: ScenarioObjective::CostOptimization,
            description: None,
            status: ScenarioStatus::Draft,
            lob_ids: Vec::new(),
            space_ids: Vec::new(),
            attribute_ratings: Vec::new(),
            financials: Vec::new(),
        }
    }
}

impl ScenarioForm {
    pub fn apply_basic_info(&mut self, patch: BasicInfoPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(objective) = patch.objective {
            self.objective = objective;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// Adds the LOB if absent, removes it otherwise. Returns whether it is
    /// now selected.
    pub fn toggle_lob(&mut self, lob_id: EntityId) -> bool {
        toggle(&mut self.lob_ids, lob_id)
    }

    pub fn toggle_space(&mut self, space_id: EntityId) -> bool {
        toggle(&mut self.space_ids, space_id)
    }

    /// Upserts the rating for (attribute, lob), clamped into 0–100.
    pub fn set_rating(&mut self, attribute_id: EntityId, lob_id: EntityId, rating: i32) {
        let rating = clamp_importance(rating);
        match self
            .attribute_ratings
            .iter_mut()
            .find(|r| r.attribute_id == attribute_id && r.lob_id == lob_id)
        {
            Some(existing) => existing.rating = rating,
            None => self.attribute_ratings.push(RatingInput {
                attribute_id,
                lob_id,
                rating,
            }),
        }
    }

    pub fn rating(&self, attribute_id: EntityId, lob_id: EntityId) -> i32 {
        self.attribute_ratings
            .iter()
            .find(|r| r.attribute_id == attribute_id && r.lob_id == lob_id)
            .map(|r| r.rating)
            .unwrap_or(0)
    }

    pub fn set_financial(&mut self, space_id: EntityId, patch: FinancialPatch) {
        let entry = match self.financials.iter().position(|f| f.space_id == space_id) {
            Some(index) => &mut self.financials[index],
            None => {
                self.financials.push(FinancialInput {
                    space_id,
                    monthly_cost: None,
                    lease_term_months: None,
                    start_date: None,
                });
                let last = self.financials.len() - 1;
                &mut self.financials[last]
            }
        };
        if patch.monthly_cost.is_some() {
            entry.monthly_cost = patch.monthly_cost;
        }
        if patch.lease_term_months.is_some() {
            entry.lease_term_months = patch.lease_term_months;
        }
        if patch.start_date.is_some() {
            entry.start_date = patch.start_date;
        }
    }

    pub fn financial(&self, space_id: EntityId) -> Option<&FinancialInput> {
        self.financials.iter().find(|f| f.space_id == space_id)
    }

    pub fn to_draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            name: self.name.trim().to_string(),
            objective: self.objective,
            description: self.description.clone(),
            status: self.status,
            lob_ids: self.lob_ids.clone(),
            space_ids: self.space_ids.clone(),
            attribute_ratings: self.attribute_ratings.clone(),
            financials: self.financials.clone(),
        }
    }
}

/// Snapshot of the form handed to
/// [`ScenarioService::create_from_submission`](crate::services::ScenarioService::create_from_submission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub name: String,
    pub objective: ScenarioObjective,
    pub description: Option<String>,
    pub status: ScenarioStatus,
    pub lob_ids: Vec<EntityId>,
    pub space_ids: Vec<EntityId>,
    pub attribute_ratings: Vec<RatingInput>,
    pub financials: Vec<FinancialInput>,
}

fn toggle(ids: &mut Vec<EntityId>, id: EntityId) -> bool {
    if let Some(index) = ids.iter().position(|&existing| existing == id) {
        ids.remove(index);
        false
    } else {
        ids.push(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rating_upserts_by_attribute_and_lob() {
        let mut form = ScenarioForm::default();
        form.set_rating(1, 1, 80);
        form.set_rating(1, 2, 40);
        form.set_rating(1, 1, 250);

        assert_eq!(form.attribute_ratings.len(), 2);
        assert_eq!(form.rating(1, 1), 100);
        assert_eq!(form.rating(1, 2), 40);
        assert_eq!(form.rating(3, 1), 0);
    }

    #[test]
    fn test_set_financial_patches_fields() {
        let mut form = ScenarioForm::default();
        form.set_financial(5, FinancialPatch { monthly_cost: Some(1000.0), ..Default::default() });
        form.set_financial(5, FinancialPatch { lease_term_months: Some(12), ..Default::default() });

        let financial = form.financial(5).unwrap();
        assert_eq!(form.financials.len(), 1);
        assert_eq!(financial.monthly_cost, Some(1000.0));
        assert_eq!(financial.lease_term_months, Some(12));
    }

    #[test]
    fn test_toggle_lob() {
        let mut form = ScenarioForm::default();
        assert!(form.toggle_lob(2));
        assert!(form.toggle_lob(1));
        assert!(!form.toggle_lob(2));
        assert_eq!(form.lob_ids, vec![1]);
    }
}
