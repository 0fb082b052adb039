// ============================================================================
// WPS Core - Workspace Attribute Entity
// File: crates/wps-core/src/domain/workspace_attribute.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wps_shared::EntityId;

use super::catalog::PredefinedAttribute;
use super::slot::Slot;

/// A company-wide workspace attribute with its importance weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceAttribute {
    pub id: EntityId,
    pub name: PredefinedAttribute,
    pub importance: i32,
    pub is_primary: bool,
    pub order_index: i32,
    pub company_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkspaceAttribute {
    pub fn slot(&self) -> Slot {
        Slot::from_is_primary(self.is_primary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkspaceAttribute {
    pub name: PredefinedAttribute,
    pub importance: i32,
    pub is_primary: bool,
    pub order_index: i32,
    pub company_id: Option<EntityId>,
}
