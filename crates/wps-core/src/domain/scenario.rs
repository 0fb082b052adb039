// ============================================================================
// WPS Core - Scenario Entities
// File: crates/wps-core/src/domain/scenario.rs
// Description: Scenario root and its four child tables
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use wps_shared::EntityId;

use super::catalog::{ScenarioObjective, ScenarioStatus};

/// Root of a scenario's sub-entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: EntityId,
    pub name: String,
    pub objective: ScenarioObjective,
    pub status: ScenarioStatus,
    pub description: Option<String>,
    pub company_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScenario {
    pub name: String,
    pub objective: ScenarioObjective,
    pub status: ScenarioStatus,
    pub description: Option<String>,
    pub company_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioLob {
    pub id: EntityId,
    pub scenario_id: EntityId,
    pub lob_id: EntityId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScenarioLob {
    pub scenario_id: EntityId,
    pub lob_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpace {
    pub id: EntityId,
    pub scenario_id: EntityId,
    pub space_id: EntityId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScenarioSpace {
    pub scenario_id: EntityId,
    pub space_id: EntityId,
}

/// Per-LOB, per-attribute rating captured in wizard step 4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAttributeRating {
    pub id: EntityId,
    pub scenario_id: EntityId,
    pub attribute_id: EntityId,
    pub lob_id: EntityId,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScenarioAttributeRating {
    pub scenario_id: EntityId,
    pub attribute_id: EntityId,
    pub lob_id: EntityId,
    pub rating: i32,
}

/// Per-space financial terms captured in wizard step 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFinancial {
    pub id: EntityId,
    pub scenario_id: EntityId,
    pub space_id: EntityId,
    pub monthly_cost: Option<f64>,
    pub lease_term_months: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScenarioFinancial {
    pub scenario_id: EntityId,
    pub space_id: EntityId,
    pub monthly_cost: Option<f64>,
    pub lease_term_months: Option<i32>,
    pub start_date: Option<NaiveDate>,
}

/// A scenario joined with its child collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDetails {
    pub scenario: Scenario,
    pub lobs: Vec<ScenarioLob>,
    pub spaces: Vec<ScenarioSpace>,
    pub attribute_ratings: Vec<ScenarioAttributeRating>,
    pub financials: Vec<ScenarioFinancial>,
}
