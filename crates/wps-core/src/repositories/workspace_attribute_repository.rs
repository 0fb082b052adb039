//! Workspace attribute repository trait (port)

use async_trait::async_trait;
use wps_shared::EntityId;

use crate::domain::{NewWorkspaceAttribute, WorkspaceAttribute};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceAttributeRepository: Send + Sync {
    /// All attributes ordered by `order_index`.
    async fn list(&self) -> Result<Vec<WorkspaceAttribute>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<WorkspaceAttribute>, DomainError>;
    async fn create(&self, attribute: &NewWorkspaceAttribute) -> Result<WorkspaceAttribute, DomainError>;
    async fn update_importance(&self, id: EntityId, importance: i32) -> Result<WorkspaceAttribute, DomainError>;
    async fn update_primary(&self, id: EntityId, is_primary: bool) -> Result<WorkspaceAttribute, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
