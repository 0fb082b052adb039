//! Company profile repository trait (port)

use async_trait::async_trait;

use crate::domain::{CompanyProfile, NewCompanyProfile};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyProfileRepository: Send + Sync {
    /// The tenant's profile, if it has been initialized.
    async fn find(&self) -> Result<Option<CompanyProfile>, DomainError>;
    async fn create(&self, profile: &NewCompanyProfile) -> Result<CompanyProfile, DomainError>;
    async fn update(&self, profile: &CompanyProfile) -> Result<CompanyProfile, DomainError>;
}
