// ============================================================================
// WPS Core - Company Profile Service
// File: crates/wps-core/src/services/company_profile_service.rs
// ============================================================================
//! Company profile: created once through the "Initialize" flow, then only
//! updated.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use super::ServiceContext;
use crate::cache::QueryKey;
use crate::capability::Capability;
use crate::domain::{CompanyProfile, NewCompanyProfile, ProfileUpdate};
use crate::error::DomainError;
use crate::repositories::CompanyProfileRepository;

pub struct CompanyProfileService {
    repo: Arc<dyn CompanyProfileRepository>,
    ctx: ServiceContext,
}

/// Reads the profile through the shared cache. Used by every service that
/// needs the company id or industry.
pub(crate) async fn cached_profile(
    ctx: &ServiceContext,
    repo: &Arc<dyn CompanyProfileRepository>,
) -> Result<Option<CompanyProfile>, DomainError> {
    ctx.cache
        .get_or_fetch(QueryKey::CompanyProfile, || repo.find())
        .await
}

impl CompanyProfileService {
    pub fn new(repo: Arc<dyn CompanyProfileRepository>, ctx: ServiceContext) -> Self {
        Self { repo, ctx }
    }

    pub async fn get(&self) -> Result<Option<CompanyProfile>, DomainError> {
        cached_profile(&self.ctx, &self.repo).await
    }

    pub async fn require(&self) -> Result<CompanyProfile, DomainError> {
        self.get().await?.ok_or(DomainError::ProfileNotFound)
    }

    /// Creates the tenant's profile. Fails if one already exists.
    pub async fn initialize(
        &self,
        capability: Capability,
        profile: NewCompanyProfile,
    ) -> Result<CompanyProfile, DomainError> {
        let result = self.try_initialize(capability, profile).await;
        self.ctx.settle(
            result,
            &[QueryKey::CompanyProfile],
            Some("Company profile created successfully"),
            "Failed to create company profile",
        )
    }

    async fn try_initialize(
        &self,
        capability: Capability,
        profile: NewCompanyProfile,
    ) -> Result<CompanyProfile, DomainError> {
        capability.require_edit()?;
        let profile = profile.normalized();
        profile.validate()?;

        if self.repo.find().await?.is_some() {
            return Err(DomainError::ProfileAlreadyExists);
        }

        let created = self.repo.create(&profile).await?;
        info!("Company profile initialized: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Patches the profile. The patch must name an industry.
    pub async fn update(
        &self,
        capability: Capability,
        patch: ProfileUpdate,
    ) -> Result<CompanyProfile, DomainError> {
        let result = self.try_update(capability, patch).await;
        self.ctx.settle(
            result,
            &[QueryKey::CompanyProfile],
            Some("Company profile updated successfully"),
            "Failed to update company profile",
        )
    }

    async fn try_update(
        &self,
        capability: Capability,
        patch: ProfileUpdate,
    ) -> Result<CompanyProfile, DomainError> {
        capability.require_edit()?;
        if patch.industry.is_none() {
            return Err(DomainError::ValidationError("Please select an industry".to_string()));
        }
        patch.validate()?;

        let current = self.require().await?;
        let updated = self.repo.update(&patch.apply(&current)).await?;
        info!("Company profile updated: {}", updated.id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Industry;
    use crate::notify::ToastCenter;
    use crate::repositories::company_profile_repository::MockCompanyProfileRepository;
    use chrono::Utc;

    fn acme() -> CompanyProfile {
        CompanyProfile {
            id: 7,
            name: "Acme".to_string(),
            industry: Industry::Technology,
            company_size: 50,
            number_of_sites: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repo: MockCompanyProfileRepository) -> (CompanyProfileService, Arc<ToastCenter>) {
        let toasts = Arc::new(ToastCenter::new(10));
        let ctx = ServiceContext::new(toasts.clone());
        (CompanyProfileService::new(Arc::new(repo), ctx), toasts)
    }

    #[tokio::test]
    async fn test_update_without_industry_is_rejected_before_backend() {
        let mut repo = MockCompanyProfileRepository::new();
        repo.expect_find().times(0);
        repo.expect_update().times(0);
        let (service, toasts) = service(repo);

        let patch = ProfileUpdate {
            name: Some("Acme Corp".to_string()),
            ..Default::default()
        };
        let err = service.update(Capability::Admin, patch).await.unwrap_err();

        assert_eq!(err, DomainError::ValidationError("Please select an industry".to_string()));
        let toasts = toasts.drain();
        assert_eq!(toasts[0].description, "Please select an industry");
    }

    #[tokio::test]
    async fn test_initialize_rejects_second_profile() {
        let mut repo = MockCompanyProfileRepository::new();
        repo.expect_find().returning(|| Ok(Some(acme())));
        repo.expect_create().times(0);
        let (service, _) = service(repo);

        let new = NewCompanyProfile {
            name: "Other".to_string(),
            industry: Industry::Retail,
            company_size: 3,
            number_of_sites: None,
        };
        let err = service.initialize(Capability::Admin, new).await.unwrap_err();
        assert_eq!(err, DomainError::ProfileAlreadyExists);
    }

    #[tokio::test]
    async fn test_backend_failure_shows_generic_message() {
        let mut repo = MockCompanyProfileRepository::new();
        repo.expect_find().returning(|| Ok(Some(acme())));
        repo.expect_update()
            .returning(|_| Err(DomainError::DatabaseError("connection reset".to_string())));
        let (service, toasts) = service(repo);

        let patch = ProfileUpdate {
            industry: Some(Industry::Finance),
            ..Default::default()
        };
        assert!(service.update(Capability::Admin, patch).await.is_err());
        assert_eq!(toasts.drain()[0].description, "Failed to update company profile");
    }

    #[tokio::test]
    async fn test_viewer_cannot_update() {
        let mut repo = MockCompanyProfileRepository::new();
        repo.expect_update().times(0);
        let (service, _) = service(repo);

        let patch = ProfileUpdate {
            industry: Some(Industry::Finance),
            ..Default::default()
        };
        let err = service.update(Capability::Viewer, patch).await.unwrap_err();
        assert_eq!(err, DomainError::Forbidden);
    }
}
