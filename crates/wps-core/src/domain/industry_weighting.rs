//! Industry default weighting lookup rows.

use serde::{Deserialize, Serialize};
use wps_shared::EntityId;

use super::catalog::{Industry, PredefinedAttribute};

/// Default importance for an attribute within an industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryWeighting {
    pub id: EntityId,
    pub industry: Industry,
    /// Stored as free text by the backend; matched against catalog names.
    pub attribute_name: String,
    pub default_weight: Option<i32>,
}

impl IndustryWeighting {
    pub fn matches(&self, attribute: PredefinedAttribute) -> bool {
        self.attribute_name == attribute.as_str()
    }
}

/// Importance a newly added attribute starts with: the matching weighting's
/// default, or 0 when there is no match.
pub fn seed_importance(weightings: &[IndustryWeighting], attribute: PredefinedAttribute) -> i32 {
    weightings
        .iter()
        .find(|w| w.matches(attribute))
        .and_then(|w| w.default_weight)
        .map(wps_shared::clamp_importance)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighting(name: &str, weight: Option<i32>) -> IndustryWeighting {
        IndustryWeighting {
            id: 1,
            industry: Industry::Technology,
            attribute_name: name.to_string(),
            default_weight: weight,
        }
    }

    #[test]
    fn test_seed_importance_uses_matching_weight() {
        let rows = vec![weighting("Collaboration", Some(25)), weighting("Cost Efficiency", Some(10))];
        assert_eq!(seed_importance(&rows, PredefinedAttribute::CostEfficiency), 10);
    }

    #[test]
    fn test_seed_importance_defaults_to_zero() {
        let rows = vec![weighting("Collaboration", None)];
        assert_eq!(seed_importance(&rows, PredefinedAttribute::Collaboration), 0);
        assert_eq!(seed_importance(&rows, PredefinedAttribute::Daylight), 0);
        assert_eq!(seed_importance(&[], PredefinedAttribute::Daylight), 0);
    }
}
