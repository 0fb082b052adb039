// ============================================================================
// WPS Core - Line of Business Service
// File: crates/wps-core/src/services/line_of_business_service.rs
// ============================================================================

use std::sync::Arc;

use tracing::info;
use validator::Validate;
use wps_shared::EntityId;

use super::ServiceContext;
use crate::cache::QueryKey;
use crate::capability::Capability;
use crate::domain::{LineOfBusiness, LineOfBusinessUpdate, NewLineOfBusiness};
use crate::error::DomainError;
use crate::repositories::LineOfBusinessRepository;

pub struct LineOfBusinessService {
    repo: Arc<dyn LineOfBusinessRepository>,
    ctx: ServiceContext,
}

impl LineOfBusinessService {
    pub fn new(repo: Arc<dyn LineOfBusinessRepository>, ctx: ServiceContext) -> Self {
        Self { repo, ctx }
    }

    /// All lines of business ordered by name.
    pub async fn list(&self) -> Result<Vec<LineOfBusiness>, DomainError> {
        self.ctx
            .cache
            .get_or_fetch(QueryKey::LinesOfBusiness, || self.repo.list())
            .await
    }

    pub async fn get(&self, id: EntityId) -> Result<LineOfBusiness, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Line of business", id))
    }

    pub async fn create(
        &self,
        capability: Capability,
        mut lob: NewLineOfBusiness,
    ) -> Result<LineOfBusiness, DomainError> {
        let result = async {
            capability.require_edit()?;
            lob.name = lob.name.trim().to_string();
            lob.validate()?;
            let created = self.repo.create(&lob).await?;
            info!("Line of business created: {} ({})", created.name, created.id);
            Ok(created)
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::LinesOfBusiness],
            Some("Line of business added successfully"),
            "Failed to add line of business",
        )
    }

    pub async fn update(
        &self,
        capability: Capability,
        id: EntityId,
        patch: LineOfBusinessUpdate,
    ) -> Result<LineOfBusiness, DomainError> {
        let result = async {
            capability.require_edit()?;
            patch.validate()?;
            let current = self.get(id).await?;
            self.repo.update(&patch.apply(&current)).await
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::LinesOfBusiness],
            Some("Line of business updated successfully"),
            "Failed to update line of business",
        )
    }

    pub async fn remove(&self, capability: Capability, id: EntityId) -> Result<(), DomainError> {
        let result = async {
            capability.require_edit()?;
            self.repo.delete(id).await?;
            info!("Line of business deleted: {}", id);
            Ok(())
        }
        .await;
        self.ctx.settle(
            result,
            &[QueryKey::LinesOfBusiness],
            Some("Line of business deleted successfully"),
            "Failed to delete line of business",
        )?;
        self.ctx.invalidate_scenario_details();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LobType;
    use crate::notify::ToastCenter;
    use crate::repositories::line_of_business_repository::MockLineOfBusinessRepository;

    fn service(repo: MockLineOfBusinessRepository) -> (LineOfBusinessService, Arc<ToastCenter>) {
        let toasts = Arc::new(ToastCenter::new(10));
        (
            LineOfBusinessService::new(Arc::new(repo), ServiceContext::new(toasts.clone())),
            toasts,
        )
    }

    #[tokio::test]
    async fn test_blank_name_never_reaches_backend() {
        let mut repo = MockLineOfBusinessRepository::new();
        repo.expect_create().times(0);

        let (service, toasts) = service(repo);
        let err = service
            .create(
                Capability::Admin,
                NewLineOfBusiness {
                    name: "   ".to_string(),
                    lob_type: LobType::Sales,
                    headcount: Some(12),
                    company_id: None,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::ValidationError("Line of business name is required".into()));
        assert_eq!(toasts.drain()[0].title, "Error");
    }

    #[tokio::test]
    async fn test_viewer_cannot_delete() {
        let mut repo = MockLineOfBusinessRepository::new();
        repo.expect_delete().times(0);

        let (service, _) = service(repo);
        let err = service.remove(Capability::Viewer, 3).await.unwrap_err();
        assert_eq!(err, DomainError::Forbidden);
    }

    #[tokio::test]
    async fn test_backend_failure_uses_generic_toast() {
        let mut repo = MockLineOfBusinessRepository::new();
        repo.expect_delete()
            .returning(|_| Err(DomainError::DatabaseError("foreign key".into())));

        let (service, toasts) = service(repo);
        assert!(service.remove(Capability::Admin, 3).await.is_err());
        assert_eq!(toasts.drain()[0].description, "Failed to delete line of business");
    }
}
