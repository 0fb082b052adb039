// ============================================================================
// WPS Core - Company Goal Service
// File: crates/wps-core/src/services/company_goal_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::{info, warn};
use wps_shared::{clamp_importance, EntityId};

use super::company_profile_service::cached_profile;
use super::ServiceContext;
use crate::cache::QueryKey;
use crate::capability::Capability;
use crate::domain::{CompanyGoal, NewCompanyGoal, PredefinedGoal, Slot, SlotCounts};
use crate::error::DomainError;
use crate::repositories::{CompanyGoalRepository, CompanyProfileRepository};

const NOUN: &str = "goals";

pub struct CompanyGoalService {
    repo: Arc<dyn CompanyGoalRepository>,
    profiles: Arc<dyn CompanyProfileRepository>,
    ctx: ServiceContext,
}

impl CompanyGoalService {
    pub fn new(
        repo: Arc<dyn CompanyGoalRepository>,
        profiles: Arc<dyn CompanyProfileRepository>,
        ctx: ServiceContext,
    ) -> Self {
        Self { repo, profiles, ctx }
    }

    pub async fn list(&self) -> Result<Vec<CompanyGoal>, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::CompanyGoals, || self.repo.list())
            .await
    }

    pub async fn get(&self, id: EntityId) -> Result<CompanyGoal, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company goal", id))
    }

    /// Adds `name` into `slot` with importance 0.
    pub async fn add(
        &self,
        capability: Capability,
        name: PredefinedGoal,
        slot: Slot,
    ) -> Result<CompanyGoal, DomainError> {
        let result = self.try_add(capability, name, slot).await;
        self.ctx.settle(
            result,
            &[QueryKey::CompanyGoals],
            Some("Company goal added successfully"),
            "Failed to add company goal",
        )
    }

    async fn try_add(
        &self,
        capability: Capability,
        name: PredefinedGoal,
        slot: Slot,
    ) -> Result<CompanyGoal, DomainError> {
        capability.require_edit()?;

        let goals = self.list().await?;
        if goals.iter().any(|g| g.name == name) {
            return Err(DomainError::AlreadyAdded(name.as_str().to_string()));
        }
        if SlotCounts::from_flags(goals.iter().map(|g| g.is_primary)).is_full(slot) {
            warn!("Goal {} rejected: {} slots full", name.as_str(), slot.label());
            return Err(DomainError::SlotLimitReached { slot, noun: NOUN });
        }

        let company_id = cached_profile(&self.ctx, &self.profiles).await?.map(|p| p.id);
        let created = self
            .repo
            .create(&NewCompanyGoal {
                name,
                importance: 0,
                is_primary: slot.is_primary(),
                company_id,
            })
            .await?;
        info!("Company goal added: {} ({})", created.name.as_str(), slot.label());
        Ok(created)
    }

    pub async fn update_importance(
        &self,
        capability: Capability,
        id: EntityId,
        importance: i32,
    ) -> Result<CompanyGoal, DomainError> {
        let result = async {
            capability.require_edit()?;
            self.repo.update_importance(id, clamp_importance(importance)).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::CompanyGoals],
            None,
            "Failed to update goal importance",
        )
    }

    pub async fn toggle_primary(
        &self,
        capability: Capability,
        id: EntityId,
    ) -> Result<CompanyGoal, DomainError> {
        let result = async {
            capability.require_edit()?;

            let goals = self.list().await?;
            let goal = goals
                .iter()
                .find(|g| g.id == id)
                .ok_or_else(|| DomainError::not_found("Company goal", id))?;

            let target = goal.slot().other();
            if SlotCounts::from_flags(goals.iter().map(|g| g.is_primary)).is_full(target) {
                return Err(DomainError::SlotLimitReached { slot: target, noun: NOUN });
            }
            self.repo.update_primary(id, target.is_primary()).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::CompanyGoals],
            None,
            "Failed to update goal priority",
        )
    }

    pub async fn remove(&self, capability: Capability, id: EntityId) -> Result<(), DomainError> {
        let result = async {
            capability.require_edit()?;
            self.repo.delete(id).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::CompanyGoals],
            Some("Company goal deleted successfully"),
            "Failed to delete company goal",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastCenter;
    use crate::repositories::company_goal_repository::MockCompanyGoalRepository;
    use crate::repositories::company_profile_repository::MockCompanyProfileRepository;
    use chrono::Utc;

    fn goal(id: EntityId, name: PredefinedGoal, is_primary: bool) -> CompanyGoal {
        CompanyGoal {
            id,
            name,
            importance: 0,
            is_primary,
            company_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn build(repo: MockCompanyGoalRepository) -> (CompanyGoalService, Arc<ToastCenter>) {
        let mut profiles = MockCompanyProfileRepository::new();
        profiles.expect_find().returning(|| Ok(None));
        let toasts = Arc::new(ToastCenter::new(10));
        let service = CompanyGoalService::new(
            Arc::new(repo),
            Arc::new(profiles),
            ServiceContext::new(toasts.clone()),
        );
        (service, toasts)
    }

    #[tokio::test]
    async fn test_toggle_to_secondary_rejected_when_full() {
        let mut repo = MockCompanyGoalRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                goal(1, PredefinedGoal::CostOptimization, true),
                goal(2, PredefinedGoal::BrandEnhancement, false),
                goal(3, PredefinedGoal::MarketExpansion, false),
                goal(4, PredefinedGoal::TalentAttraction, false),
            ])
        });
        repo.expect_update_primary().times(0);

        let (service, toasts) = build(repo);
        let err = service.toggle_primary(Capability::Admin, 1).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::SlotLimitReached { slot: Slot::Secondary, noun: "goals" }
        );
        assert_eq!(toasts.drain()[0].description, "Maximum of 3 secondary goals allowed");
    }

    #[tokio::test]
    async fn test_add_duplicate_is_rejected() {
        let mut repo = MockCompanyGoalRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![goal(1, PredefinedGoal::WorkforceRetention, true)]));
        repo.expect_create().times(0);

        let (service, _) = build(repo);
        let err = service
            .add(Capability::Admin, PredefinedGoal::WorkforceRetention, Slot::Secondary)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::AlreadyAdded("Workforce Retention".to_string()));
    }

    #[tokio::test]
    async fn test_add_and_remove_raise_success_toasts() {
        let mut repo = MockCompanyGoalRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));
        repo.expect_create()
            .withf(|new| new.importance == 0 && new.is_primary)
            .returning(|new| Ok(goal(7, new.name, new.is_primary)));
        repo.expect_delete().returning(|_| Ok(()));

        let (service, toasts) = build(repo);
        service
            .add(Capability::Admin, PredefinedGoal::DigitalTransformation, Slot::Primary)
            .await
            .unwrap();
        service.remove(Capability::Admin, 7).await.unwrap();

        let descriptions: Vec<_> = toasts.drain().into_iter().map(|t| t.description).collect();
        assert_eq!(
            descriptions,
            vec!["Company goal added successfully", "Company goal deleted successfully"]
        );
    }
}
