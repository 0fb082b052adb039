//! Space repository trait (port)

use async_trait::async_trait;
use wps_shared::EntityId;

use crate::domain::{NewSpace, Space};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    /// All spaces ordered by name.
    async fn list(&self) -> Result<Vec<Space>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Space>, DomainError>;
    async fn create(&self, space: &NewSpace) -> Result<Space, DomainError>;
    async fn update(&self, space: &Space) -> Result<Space, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
