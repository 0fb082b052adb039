// ============================================================================
// WPS Core - Space Entity
// File: crates/wps-core/src/domain/space.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wps_shared::EntityId;

/// A physical office space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: EntityId,
    pub name: String,
    pub location: String,
    pub square_feet: i32,
    pub monthly_cost: Option<f64>,
    pub company_id: Option<EntityId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSpace {
    #[validate(length(min = 1, max = 200, message = "Space name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,

    #[validate(range(min = 0, message = "Square feet cannot be negative"))]
    pub square_feet: i32,

    #[validate(range(min = 0.0, message = "Monthly cost cannot be negative"))]
    pub monthly_cost: Option<f64>,

    #[serde(default)]
    pub company_id: Option<EntityId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SpaceUpdate {
    #[validate(length(min = 1, max = 200, message = "Space name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: Option<String>,

    #[validate(range(min = 0, message = "Square feet cannot be negative"))]
    pub square_feet: Option<i32>,

    #[validate(range(min = 0.0, message = "Monthly cost cannot be negative"))]
    pub monthly_cost: Option<f64>,
}

impl SpaceUpdate {
    pub fn apply(&self, space: &Space) -> Space {
        let mut updated = space.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(location) = &self.location {
            updated.location = location.trim().to_string();
        }
        if let Some(square_feet) = self.square_feet {
            updated.square_feet = square_feet;
        }
        if self.monthly_cost.is_some() {
            updated.monthly_cost = self.monthly_cost;
        }
        updated.updated_at = Utc::now();
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_space_validation() {
        let space = NewSpace {
            name: "HQ - 5th Floor".to_string(),
            location: String::new(),
            square_feet: 12_000,
            monthly_cost: Some(-1.0),
            company_id: None,
        };
        let errors = space.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("location"));
        assert!(fields.contains_key("monthly_cost"));
    }
}
