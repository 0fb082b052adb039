// ============================================================================
// WPS Core - Space Service
// File: crates/wps-core/src/services/space_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::info;
use validator::Validate;
use wps_shared::EntityId;

use super::ServiceContext;
use crate::cache::QueryKey;
use crate::capability::Capability;
use crate::domain::{NewSpace, Space, SpaceUpdate};
use crate::error::DomainError;
use crate::repositories::SpaceRepository;

pub struct SpaceService {
    repo: Arc<dyn SpaceRepository>,
    ctx: ServiceContext,
}

impl SpaceService {
    pub fn new(repo: Arc<dyn SpaceRepository>, ctx: ServiceContext) -> Self {
        Self { repo, ctx }
    }

    pub async fn list(&self) -> Result<Vec<Space>, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::Spaces, || self.repo.list())
            .await
    }

    pub async fn get(&self, id: EntityId) -> Result<Space, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Space", id))
    }

    pub async fn create(&self, capability: Capability, mut space: NewSpace) -> Result<Space, DomainError> {
        let result = async {
            capability.require_edit()?;
            space.name = space.name.trim().to_string();
            space.location = space.location.trim().to_string();
            space.validate()?;
            let created = self.repo.create(&space).await?;
            info!("Space created: {} at {} ({} sq ft)", created.name, created.location, created.square_feet);
            Ok(created)
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::Spaces],
            Some("Space added successfully"),
            "Failed to add space",
        )
    }

    pub async fn update(
        &self,
        capability: Capability,
        id: EntityId,
        patch: SpaceUpdate,
    ) -> Result<Space, DomainError> {
        let result = async {
            capability.require_edit()?;
            patch.validate()?;
            let current = self.get(id).await?;
            self.repo.update(&patch.apply(&current)).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::Spaces],
            Some("Space updated successfully"),
            "Failed to update space",
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
            &[QueryKey::Spaces],
            Some("Space deleted successfully"),
            "Failed to delete space",
        )?;
        self.ctx.invalidate_scenario_details();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastCenter;
    use crate::repositories::space_repository::MockSpaceRepository;
    use chrono::Utc;

    fn hq() -> Space {
        Space {
            id: 4,
            name: "HQ".to_string(),
            location: "Austin".to_string(),
            square_feet: 10_000,
            monthly_cost: Some(25_000.0),
            company_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_applies_patch_and_invalidates() {
        let mut repo = MockSpaceRepository::new();
        repo.expect_list().times(2).returning(|| Ok(vec![hq()]));
        repo.expect_find_by_id().returning(|_| Ok(Some(hq())));
        repo.expect_update()
            .withf(|s| s.square_feet == 12_000 && s.name == "HQ")
            .returning(|s| Ok(s.clone()));

        let toasts = Arc::new(ToastCenter::new(10));
        let service = SpaceService::new(Arc::new(repo), ServiceContext::new(toasts.clone()));

        service.list().await.unwrap();
        let updated = service
            .update(
                Capability::Admin,
                4,
                SpaceUpdate { square_feet: Some(12_000), ..Default::default() },
            )
            .await
            .unwrap();
        assert_eq!(updated.square_feet, 12_000);

        // Invalidated, so the list is fetched again.
        service.list().await.unwrap();
        assert_eq!(toasts.drain()[0].description, "Space updated successfully");
    }

    #[tokio::test]
    async fn test_update_missing_space_is_not_found() {
        let mut repo = MockSpaceRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().times(0);

        let toasts = Arc::new(ToastCenter::new(10));
        let service = SpaceService::new(Arc::new(repo), ServiceContext::new(toasts.clone()));

        let err = service
            .update(Capability::Admin, 99, SpaceUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Space", 99));
        assert_eq!(toasts.drain()[0].description, "Failed to update space");
    }
}
