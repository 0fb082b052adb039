//! Line of business repository trait (port)

use async_trait::async_trait;
use wps_shared::EntityId;

use crate::domain::{LineOfBusiness, NewLineOfBusiness};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineOfBusinessRepository: Send + Sync {
    /// All lines of business ordered by name.
    async fn list(&self) -> Result<Vec<LineOfBusiness>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<LineOfBusiness>, DomainError>;
    async fn create(&self, lob: &NewLineOfBusiness) -> Result<LineOfBusiness, DomainError>;
    async fn update(&self, lob: &LineOfBusiness) -> Result<LineOfBusiness, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
