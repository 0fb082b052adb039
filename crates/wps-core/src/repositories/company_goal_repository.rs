//! Company goal repository trait (port)

use async_trait::async_trait;
use wps_shared::EntityId;

use crate::domain::{CompanyGoal, NewCompanyGoal};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyGoalRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CompanyGoal>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<CompanyGoal>, DomainError>;
    async fn create(&self, goal: &NewCompanyGoal) -> Result<CompanyGoal, DomainError>;
    async fn update_importance(&self, id: EntityId, importance: i32) -> Result<CompanyGoal, DomainError>;
    async fn update_primary(&self, id: EntityId, is_primary: bool) -> Result<CompanyGoal, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
