//! Scenario repository trait (port)
//!
//! Each bulk insert is an independent backend call. There is no transaction
//! spanning the scenario row and its children.

use async_trait::async_trait;
use wps_shared::EntityId;

use crate::domain::{
    NewScenario, NewScenarioAttributeRating, NewScenarioFinancial, NewScenarioLob,
    NewScenarioSpace, Scenario, ScenarioAttributeRating, ScenarioFinancial, ScenarioLob,
    ScenarioSpace,
};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// All scenarios, newest first.
    async fn list(&self) -> Result<Vec<Scenario>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Scenario>, DomainError>;
    async fn create(&self, scenario: &NewScenario) -> Result<Scenario, DomainError>;

    async fn insert_lobs(&self, rows: &[NewScenarioLob]) -> Result<Vec<ScenarioLob>, DomainError>;
    async fn insert_spaces(&self, rows: &[NewScenarioSpace]) -> Result<Vec<ScenarioSpace>, DomainError>;
    async fn insert_financials(&self, rows: &[NewScenarioFinancial]) -> Result<Vec<ScenarioFinancial>, DomainError>;
    async fn insert_attribute_ratings(
        &self,
        rows: &[NewScenarioAttributeRating],
    ) -> Result<Vec<ScenarioAttributeRating>, DomainError>;

    async fn lobs_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioLob>, DomainError>;
    async fn spaces_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioSpace>, DomainError>;
    async fn ratings_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioAttributeRating>, DomainError>;
    async fn financials_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioFinancial>, DomainError>;
}
