//! Industry weighting repository trait (port)

use async_trait::async_trait;

use crate::domain::{Industry, IndustryWeighting};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndustryWeightingRepository: Send + Sync {
    async fn list_for_industry(&self, industry: Industry) -> Result<Vec<IndustryWeighting>, DomainError>;
}
