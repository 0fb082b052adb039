// ============================================================================
// WPS Core - Line of Business Entity
// File: crates/wps-core/src/domain/line_of_business.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wps_shared::EntityId;

use super::catalog::LobType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOfBusiness {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub lob_type: LobType,
    pub headcount: Option<i32>,
    pub company_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewLineOfBusiness {
    #[validate(length(min = 1, max = 200, message = "Line of business name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    pub lob_type: LobType,

    #[validate(range(min = 0, message = "Headcount cannot be negative"))]
    pub headcount: Option<i32>,

    #[serde(default)]
    pub company_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LineOfBusinessUpdate {
    #[validate(length(min = 1, max = 200, message = "Line of business name is required"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub lob_type: Option<LobType>,

    #[validate(range(min = 0, message = "Headcount cannot be negative"))]
    pub headcount: Option<i32>,
}

impl LineOfBusinessUpdate {
    pub fn apply(&self, lob: &LineOfBusiness) -> LineOfBusiness {
        let mut updated = lob.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(lob_type) = self.lob_type {
            updated.lob_type = lob_type;
        }
        if self.headcount.is_some() {
            updated.headcount = self.headcount;
        }
        updated.updated_at = Utc::now();
        updated
    }
}
