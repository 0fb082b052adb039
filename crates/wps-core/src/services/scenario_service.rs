// ============================================================================
// WPS Core - Scenario Service
// File: crates/wps-core/src/services/scenario_service.rs
// Description: Scenario reads and the multi-table creation sequence
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};
use wps_shared::EntityId;

use super::company_profile_service::cached_profile;
use super::ServiceContext;
use crate::cache::QueryKey;
use crate::capability::Capability;
use crate::domain::{
    NewScenario, NewScenarioAttributeRating, NewScenarioFinancial, NewScenarioLob,
    NewScenarioSpace, Scenario, ScenarioDetails, ScenarioStatus,
};
use crate::error::DomainError;
use crate::repositories::{CompanyProfileRepository, ScenarioRepository};
use crate::wizard::SubmissionDraft;

/// Rows written by a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSubmission {
    pub scenario: Scenario,
    pub lob_count: usize,
    pub space_count: usize,
    pub financial_count: usize,
    pub rating_count: usize,
}

pub struct ScenarioService {
    repo: Arc<dyn ScenarioRepository>,
    profiles: Arc<dyn CompanyProfileRepository>,
    ctx: ServiceContext,
}

impl ScenarioService {
    pub fn new(
        repo: Arc<dyn ScenarioRepository>,
        profiles: Arc<dyn CompanyProfileRepository>,
        ctx: ServiceContext,
    ) -> Self {
        Self { repo, profiles, ctx }
    }

    /// All scenarios, newest first.
    pub async fn list(&self) -> Result<Vec<Scenario>, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::Scenarios, || self.repo.list())
            .await
    }

    pub async fn get(&self, id: EntityId) -> Result<Scenario, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Scenario", id))
    }

    /// The scenario with its four child collections, fetched concurrently.
    pub async fn details(&self, id: EntityId) -> Result<ScenarioDetails, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::Scenario(id), || async move {
                let (scenario, lobs, spaces, attribute_ratings, financials) = futures::try_join!(
                    self.get(id),
                    self.repo.lobs_for(id),
                    self.repo.spaces_for(id),
                    self.repo.ratings_for(id),
                    self.repo.financials_for(id),
                )?;
                Ok(ScenarioDetails {
                    scenario,
                    lobs,
                    spaces,
                    attribute_ratings,
                    financials,
                })
            })
            .await
    }

    /// Writes a wizard submission in four sequential steps: the scenario row
    /// (always as draft), LOB links, space links with their financials, then
    /// attribute ratings. A failing step stops the sequence; rows written by
    /// earlier steps are kept.
    pub async fn create_from_submission(
        &self,
        capability: Capability,
        draft: &SubmissionDraft,
    ) -> Result<ScenarioSubmission, DomainError> {
        let result = self.try_create(capability, draft).await;
        self.ctx.settle(
            result,
            &[QueryKey::Scenarios],
            Some("Scenario created successfully"),
            "Failed to create scenario",
        )
    }

    async fn try_create(
        &self,
        capability: Capability,
        draft: &SubmissionDraft,
    ) -> Result<ScenarioSubmission, DomainError> {
        capability.require_edit()?;
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::ValidationError("Please enter a scenario name".to_string()));
        }

        let company_id = cached_profile(&self.ctx, &self.profiles).await?.map(|p| p.id);

        // (a)
        let scenario = self
            .repo
            .create(&NewScenario {
                name: name.to_string(),
                objective: draft.objective,
                status: ScenarioStatus::Draft,
                description: draft.description.clone().filter(|d| !d.trim().is_empty()),
                company_id,
            })
            .await?;
        let scenario_id = scenario.id;
        info!("Scenario row created: {} ({})", scenario.name, scenario_id);

        // (b)
        let mut lob_count = 0;
        if !draft.lob_ids.is_empty() {
            let rows: Vec<_> = draft
                .lob_ids
                .iter()
                .map(|&lob_id| NewScenarioLob { scenario_id, lob_id })
                .collect();
            lob_count = self
                .repo
                .insert_lobs(&rows)
                .await
                .inspect_err(|e| partial_failure(scenario_id, "lobs", e))?
                .len();
        }

        // (c)
        let mut space_count = 0;
        let mut financial_count = 0;
        if !draft.space_ids.is_empty() {
            let rows: Vec<_> = draft
                .space_ids
                .iter()
                .map(|&space_id| NewScenarioSpace { scenario_id, space_id })
                .collect();
            space_count = self
                .repo
                .insert_spaces(&rows)
                .await
                .inspect_err(|e| partial_failure(scenario_id, "spaces", e))?
                .len();

            let financials: Vec<_> = draft
                .financials
                .iter()
                .filter(|f| draft.space_ids.contains(&f.space_id))
                .map(|f| NewScenarioFinancial {
                    scenario_id,
                    space_id: f.space_id,
                    monthly_cost: f.monthly_cost,
                    lease_term_months: f.lease_term_months,
                    start_date: f.start_date,
                })
                .collect();
            if !financials.is_empty() {
                financial_count = self
                    .repo
                    .insert_financials(&financials)
                    .await
                    .inspect_err(|e| partial_failure(scenario_id, "financials", e))?
                    .len();
            }
        }

        // (d)
        let mut rating_count = 0;
        if !draft.attribute_ratings.is_empty() {
            let rows: Vec<_> = draft
                .attribute_ratings
                .iter()
                .map(|r| NewScenarioAttributeRating {
                    scenario_id,
                    attribute_id: r.attribute_id,
                    lob_id: r.lob_id,
                    rating: r.rating,
                })
                .collect();
            rating_count = self
                .repo
                .insert_attribute_ratings(&rows)
                .await
                .inspect_err(|e| partial_failure(scenario_id, "attribute ratings", e))?
                .len();
        }

        info!(
            scenario_id,
            lob_count, space_count, financial_count, rating_count, "Scenario created"
        );
        Ok(ScenarioSubmission {
            scenario,
            lob_count,
            space_count,
            financial_count,
            rating_count,
        })
    }
}

fn partial_failure(scenario_id: EntityId, step: &str, e: &DomainError) {
    error!(
        scenario_id,
        "Scenario creation stopped at {}; earlier rows are kept: {}", step, e
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScenarioLob, ScenarioObjective, ScenarioSpace};
    use crate::notify::ToastCenter;
    use crate::repositories::company_profile_repository::MockCompanyProfileRepository;
    use crate::repositories::scenario_repository::MockScenarioRepository;
    use crate::wizard::{FinancialInput, RatingInput};
    use chrono::Utc;

    fn scenario_from(new: &NewScenario) -> Scenario {
        Scenario {
            id: 42,
            name: new.name.clone(),
            objective: new.objective,
            status: new.status,
            description: new.description.clone(),
            company_id: new.company_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn draft() -> SubmissionDraft {
        SubmissionDraft {
            name: "Q1 Review".to_string(),
            objective: ScenarioObjective::CostOptimization,
            description: None,
            status: ScenarioStatus::Completed,
            lob_ids: vec![1, 2],
            space_ids: vec![5],
            attribute_ratings: vec![RatingInput { attribute_id: 1, lob_id: 1, rating: 80 }],
            financials: vec![
                FinancialInput {
                    space_id: 5,
                    monthly_cost: Some(1000.0),
                    lease_term_months: Some(12),
                    start_date: None,
                },
                FinancialInput {
                    space_id: 9,
                    monthly_cost: Some(500.0),
                    lease_term_months: None,
                    start_date: None,
                },
            ],
        }
    }

    fn profiles() -> MockCompanyProfileRepository {
        let mut profiles = MockCompanyProfileRepository::new();
        profiles.expect_find().returning(|| Ok(None));
        profiles
    }

    #[tokio::test]
    async fn test_submission_forces_draft_and_filters_financials() {
        let mut repo = MockScenarioRepository::new();
        repo.expect_create()
            .withf(|new| new.status == ScenarioStatus::Draft)
            .times(1)
            .returning(|new| Ok(scenario_from(new)));
        repo.expect_insert_lobs().times(1).returning(|rows| {
            Ok(rows
                .iter()
                .map(|r| ScenarioLob {
                    id: r.lob_id,
                    scenario_id: r.scenario_id,
                    lob_id: r.lob_id,
                    created_at: Utc::now(),
                })
                .collect())
        });
        repo.expect_insert_spaces().times(1).returning(|rows| {
            Ok(rows
                .iter()
                .map(|r| ScenarioSpace {
                    id: 1,
                    scenario_id: r.scenario_id,
                    space_id: r.space_id,
                    created_at: Utc::now(),
                })
                .collect())
        });
        repo.expect_insert_financials()
            .withf(|rows| rows.len() == 1 && rows[0].space_id == 5)
            .times(1)
            .returning(|_| Ok(vec![]));
        repo.expect_insert_attribute_ratings()
            .withf(|rows| rows.len() == 1 && rows[0].rating == 80)
            .times(1)
            .returning(|_| Ok(vec![]));

        let toasts = Arc::new(ToastCenter::new(10));
        let service = ScenarioService::new(
            Arc::new(repo),
            Arc::new(profiles()),
            ServiceContext::new(toasts.clone()),
        );

        let created = service
            .create_from_submission(Capability::Admin, &draft())
            .await
            .unwrap();
        assert_eq!(created.scenario.status, ScenarioStatus::Draft);
        assert_eq!(created.lob_count, 2);
        assert_eq!(created.space_count, 1);
        assert_eq!(toasts.drain()[0].description, "Scenario created successfully");
    }

    #[tokio::test]
    async fn test_failed_space_insert_stops_later_steps() {
        let mut repo = MockScenarioRepository::new();
        repo.expect_create().returning(|new| Ok(scenario_from(new)));
        repo.expect_insert_lobs().returning(|_| Ok(vec![]));
        repo.expect_insert_spaces()
            .returning(|_| Err(DomainError::DatabaseError("connection reset".into())));
        repo.expect_insert_financials().times(0);
        repo.expect_insert_attribute_ratings().times(0);

        let toasts = Arc::new(ToastCenter::new(10));
        let service = ScenarioService::new(
            Arc::new(repo),
            Arc::new(profiles()),
            ServiceContext::new(toasts.clone()),
        );

        assert!(service
            .create_from_submission(Capability::Admin, &draft())
            .await
            .is_err());
        assert_eq!(toasts.drain()[0].description, "Failed to create scenario");
    }

    #[tokio::test]
    async fn test_empty_selections_skip_bulk_inserts() {
        let mut repo = MockScenarioRepository::new();
        repo.expect_create().returning(|new| Ok(scenario_from(new)));
        repo.expect_insert_lobs().times(0);
        repo.expect_insert_spaces().times(0);
        repo.expect_insert_financials().times(0);
        repo.expect_insert_attribute_ratings().times(0);

        let service = ScenarioService::new(
            Arc::new(repo),
            Arc::new(profiles()),
            ServiceContext::new(Arc::new(ToastCenter::new(10))),
        );

        let bare = SubmissionDraft {
            lob_ids: vec![],
            space_ids: vec![],
            attribute_ratings: vec![],
            ..draft()
        };
        let created = service.create_from_submission(Capability::Admin, &bare).await.unwrap();
        assert_eq!(created.financial_count, 0);
    }
}
