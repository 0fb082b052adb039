// ============================================================================
// WPS Core - Workspace Attribute Service
// File: crates/wps-core/src/services/workspace_attribute_service.rs
// ============================================================================
//! Company-wide workspace attributes: add, reweight, promote/demote and
//! delete with an explicit confirmation step.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wps_shared::{clamp_importance, EntityId};

use super::company_profile_service::cached_profile;
use super::ServiceContext;
use crate::cache::QueryKey;
use crate::capability::Capability;
use crate::domain::{
    seed_importance, Industry, IndustryWeighting, NewWorkspaceAttribute, PredefinedAttribute, Slot,
    SlotCounts, WorkspaceAttribute,
};
use crate::error::DomainError;
use crate::repositories::{
    CompanyProfileRepository, IndustryWeightingRepository, WorkspaceAttributeRepository,
};

const NOUN: &str = "attributes";

pub const DELETE_ATTRIBUTE_PROMPT: &str = "Warning: Removing this attribute might affect existing \
data in Lines of Business and Scenarios. Are you sure you want to proceed?";

/// First phase of an attribute deletion. Only [`WorkspaceAttributeService::request_delete`]
/// creates one; the deletion happens when it is resolved with
/// [`ConfirmationAnswer::Accepted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    attribute_id: EntityId,
    prompt: &'static str,
}

impl DeleteConfirmation {
    pub fn attribute_id(&self) -> EntityId {
        self.attribute_id
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationAnswer {
    Accepted,
    Declined,
}

impl From<bool> for ConfirmationAnswer {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            ConfirmationAnswer::Accepted
        } else {
            ConfirmationAnswer::Declined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct WorkspaceAttributeService {
    repo: Arc<dyn WorkspaceAttributeRepository>,
    weightings: Arc<dyn IndustryWeightingRepository>,
    profiles: Arc<dyn CompanyProfileRepository>,
    ctx: ServiceContext,
}

impl WorkspaceAttributeService {
    pub fn new(
        repo: Arc<dyn WorkspaceAttributeRepository>,
        weightings: Arc<dyn IndustryWeightingRepository>,
        profiles: Arc<dyn CompanyProfileRepository>,
        ctx: ServiceContext,
    ) -> Self {
        Self {
            repo,
            weightings,
            profiles,
            ctx,
        }
    }

    /// All attributes ordered by `order_index`.
    pub async fn list(&self) -> Result<Vec<WorkspaceAttribute>, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::WorkspaceAttributes, || self.repo.list())
            .await
    }

    pub async fn get(&self, id: EntityId) -> Result<WorkspaceAttribute, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Workspace attribute", id))
    }

    pub async fn industry_weightings(
        &self,
        industry: Industry,
    ) -> Result<Vec<IndustryWeighting>, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::IndustryWeightings(industry), || {
                self.weightings.list_for_industry(industry)
            })
            .await
    }

    /// Adds `name` into `slot`. Its importance is seeded from the weighting
    /// for the company's industry, or 0 when none matches.
    pub async fn add(
        &self,
        capability: Capability,
        name: PredefinedAttribute,
        slot: Slot,
    ) -> Result<WorkspaceAttribute, DomainError> {
        let result = self.try_add(capability, name, slot).await;
        self.ctx.settle(
            result,
            &[QueryKey::WorkspaceAttributes],
            Some("Workspace attribute added successfully"),
            "Failed to add workspace attribute. Maximum limit may have been reached.",
        )
    }

    async fn try_add(
        &self,
        capability: Capability,
        name: PredefinedAttribute,
        slot: Slot,
    ) -> Result<WorkspaceAttribute, DomainError> {
        capability.require_edit()?;

        let attributes = self.list().await?;
        if attributes.iter().any(|a| a.name == name) {
            return Err(DomainError::AlreadyAdded(name.as_str().to_string()));
        }

        let counts = SlotCounts::from_flags(attributes.iter().map(|a| a.is_primary));
        if counts.is_full(slot) {
            warn!("Attribute {} rejected: {} slots full", name.as_str(), slot.label());
            return Err(DomainError::SlotLimitReached { slot, noun: NOUN });
        }

        let profile = cached_profile(&self.ctx, &self.profiles).await?;
        let importance = match &profile {
            Some(p) => seed_importance(&self.industry_weightings(p.industry).await?, name),
            None => 0,
        };

        let new = NewWorkspaceAttribute {
            name,
            importance,
            is_primary: slot.is_primary(),
            order_index: attributes.len() as i32,
            company_id: profile.map(|p| p.id),
        };
        let created = self.repo.create(&new).await?;
        info!(
            "Workspace attribute added: {} ({}, importance {})",
            created.name.as_str(),
            slot.label(),
            created.importance
        );
        Ok(created)
    }

    /// Sets the importance, clamped into 0–100.
    pub async fn update_importance(
        &self,
        capability: Capability,
        id: EntityId,
        importance: i32,
    ) -> Result<WorkspaceAttribute, DomainError> {
        let result = async {
            capability.require_edit()?;
            self.repo.update_importance(id, clamp_importance(importance)).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::WorkspaceAttributes],
            None,
            "Failed to update attribute importance",
        )
    }

    /// Moves the attribute to the other slot. The slot counts are derived
    /// from the already-fetched list; a full target slot is an in-band error.
    pub async fn toggle_primary(
        &self,
        capability: Capability,
        id: EntityId,
    ) -> Result<WorkspaceAttribute, DomainError> {
        let result = self.try_toggle(capability, id).await;
        self.ctx.settle(
            result,
            &[QueryKey::WorkspaceAttributes],
            None,
            "Failed to update attribute priority",
        )
    }

    async fn try_toggle(
        &self,
        capability: Capability,
        id: EntityId,
    ) -> Result<WorkspaceAttribute, DomainError> {
        capability.require_edit()?;

        let attributes = self.list().await?;
        let attribute = attributes
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found("Workspace attribute", id))?;

        let target = attribute.slot().other();
        let counts = SlotCounts::from_flags(attributes.iter().map(|a| a.is_primary));
        if counts.is_full(target) {
            return Err(DomainError::SlotLimitReached { slot: target, noun: NOUN });
        }

        self.repo.update_primary(id, target.is_primary()).await
    }

    /// First phase of a deletion. Nothing is sent to the backend.
    pub fn request_delete(
        &self,
        capability: Capability,
        id: EntityId,
    ) -> Result<DeleteConfirmation, DomainError> {
        capability.require_edit()?;
        Ok(DeleteConfirmation {
            attribute_id: id,
            prompt: DELETE_ATTRIBUTE_PROMPT,
        })
    }

    /// Second phase of a deletion. A declined confirmation is a normal
    /// outcome: no backend call, no toast.
    pub async fn resolve_delete(
        &self,
        capability: Capability,
        confirmation: DeleteConfirmation,
        answer: ConfirmationAnswer,
    ) -> Result<DeleteOutcome, DomainError> {
        if answer == ConfirmationAnswer::Declined {
            info!("Deletion of attribute {} cancelled", confirmation.attribute_id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let id = confirmation.attribute_id;
        let result = async {
            capability.require_edit()?;
            self.repo.delete(id).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::WorkspaceAttributes],
            Some("Workspace attribute deleted successfully"),
            "Failed to delete workspace attribute",
        )?;
        self.ctx.invalidate_scenario_details();
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompanyProfile;
    use crate::notify::ToastCenter;
    use crate::repositories::company_profile_repository::MockCompanyProfileRepository;
    use crate::repositories::industry_weighting_repository::MockIndustryWeightingRepository;
    use crate::repositories::workspace_attribute_repository::MockWorkspaceAttributeRepository;
    use chrono::Utc;

    fn attribute(id: EntityId, name: PredefinedAttribute, is_primary: bool) -> WorkspaceAttribute {
        WorkspaceAttribute {
            id,
            name,
            importance: 10,
            is_primary,
            order_index: id as i32,
            company_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn profile(industry: Industry) -> CompanyProfile {
        CompanyProfile {
            id: 1,
            name: "Acme".to_string(),
            industry,
            company_size: 50,
            number_of_sites: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn build(
        repo: MockWorkspaceAttributeRepository,
        weightings: MockIndustryWeightingRepository,
        profiles: MockCompanyProfileRepository,
    ) -> (WorkspaceAttributeService, Arc<ToastCenter>) {
        let toasts = Arc::new(ToastCenter::new(10));
        let service = WorkspaceAttributeService::new(
            Arc::new(repo),
            Arc::new(weightings),
            Arc::new(profiles),
            ServiceContext::new(toasts.clone()),
        );
        (service, toasts)
    }

    #[tokio::test]
    async fn test_add_seeds_importance_from_industry_weighting() {
        let mut repo = MockWorkspaceAttributeRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));
        repo.expect_create()
            .withf(|new| new.importance == 35 && !new.is_primary && new.order_index == 0)
            .returning(|new| {
                let mut created = attribute(1, new.name, new.is_primary);
                created.importance = new.importance;
                Ok(created)
            });

        let mut weightings = MockIndustryWeightingRepository::new();
        weightings
            .expect_list_for_industry()
            .withf(|industry| *industry == Industry::Finance)
            .returning(|industry| {
                Ok(vec![IndustryWeighting {
                    id: 1,
                    industry,
                    attribute_name: "Security / Access Control".to_string(),
                    default_weight: Some(35),
                }])
            });

        let mut profiles = MockCompanyProfileRepository::new();
        profiles.expect_find().returning(|| Ok(Some(profile(Industry::Finance))));

        let (service, toasts) = build(repo, weightings, profiles);
        let created = service
            .add(Capability::Admin, PredefinedAttribute::Security, Slot::Secondary)
            .await
            .unwrap();

        assert_eq!(created.importance, 35);
        assert_eq!(toasts.drain()[0].description, "Workspace attribute added successfully");
    }

    #[tokio::test]
    async fn test_toggle_rejects_fourth_primary_without_backend_call() {
        let mut repo = MockWorkspaceAttributeRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                attribute(1, PredefinedAttribute::Collaboration, true),
                attribute(2, PredefinedAttribute::CostEfficiency, true),
                attribute(3, PredefinedAttribute::Daylight, true),
                attribute(4, PredefinedAttribute::Parking, false),
            ])
        });
        repo.expect_update_primary().times(0);

        let (service, toasts) = build(
            repo,
            MockIndustryWeightingRepository::new(),
            MockCompanyProfileRepository::new(),
        );
        let err = service.toggle_primary(Capability::Admin, 4).await.unwrap_err();

        assert_eq!(err.to_string(), "Maximum of 3 primary attributes allowed");
        assert_eq!(toasts.drain()[0].description, "Maximum of 3 primary attributes allowed");
    }

    #[tokio::test]
    async fn test_declined_delete_makes_no_backend_call() {
        let mut repo = MockWorkspaceAttributeRepository::new();
        repo.expect_delete().times(0);
        repo.expect_list().times(0);

        let (service, toasts) = build(
            repo,
            MockIndustryWeightingRepository::new(),
            MockCompanyProfileRepository::new(),
        );
        let confirmation = service.request_delete(Capability::Admin, 3).unwrap();
        assert_eq!(confirmation.prompt(), DELETE_ATTRIBUTE_PROMPT);

        let outcome = service
            .resolve_delete(Capability::Admin, confirmation, ConfirmationAnswer::Declined)
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_cached_list() {
        let mut repo = MockWorkspaceAttributeRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![attribute(1, PredefinedAttribute::Collaboration, false)]));
        repo.expect_delete()
            .returning(|_| Err(DomainError::DatabaseError("timeout".to_string())));

        let (service, toasts) = build(
            repo,
            MockIndustryWeightingRepository::new(),
            MockCompanyProfileRepository::new(),
        );
        assert_eq!(service.list().await.unwrap().len(), 1);

        let confirmation = service.request_delete(Capability::Admin, 1).unwrap();
        assert!(service
            .resolve_delete(Capability::Admin, confirmation, ConfirmationAnswer::Accepted)
            .await
            .is_err());

        // Still served from the cache: list() is expected exactly once.
        assert_eq!(service.list().await.unwrap().len(), 1);
        assert_eq!(toasts.drain()[0].description, "Failed to delete workspace attribute");
    }
}
