// ============================================================================
// WPS Core - Company Goal Entity
// File: crates/wps-core/src/domain/company_goal.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wps_shared::EntityId;

use super::catalog::PredefinedGoal;
use super::slot::Slot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyGoal {
    pub id: EntityId,
    pub name: PredefinedGoal,
    pub importance: i32,
    pub is_primary: bool,
    pub company_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyGoal {
    pub fn slot(&self) -> Slot {
        Slot::from_is_primary(self.is_primary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompanyGoal {
    pub name: PredefinedGoal,
    pub importance: i32,
    pub is_primary: bool,
    pub company_id: Option<EntityId>,
}
