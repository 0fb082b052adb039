// ============================================================================
// WPS Core - Slot List Views
// File: crates/wps-core/src/views/lists.rs
// Description: Primary/secondary list managers for attributes and goals
// ============================================================================

use serde::Serialize;
use wps_shared::constants::{MAX_COLLECTION_SIZE, TARGET_TOTAL_WEIGHT};

use super::rows::{AttributeRowView, GoalRowView};
use crate::capability::Capability;
use crate::domain::{
    CompanyGoal, PredefinedAttribute, PredefinedGoal, Slot, SlotCounts, WorkspaceAttribute,
};

/// A catalog entry that has not been added yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOption {
    pub slot: Slot,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSection<R> {
    pub slot: Slot,
    pub heading: String,
    /// "N of 3".
    pub count_label: String,
    pub complete: bool,
    pub rows: Vec<R>,
    /// "N primary attributes remaining" while the slot has room.
    pub remaining_label: Option<String>,
}

impl<R> SlotSection<R> {
    fn build(slot: Slot, noun: &str, counts: SlotCounts, rows: Vec<R>) -> Self {
        let remaining = counts.remaining(slot);
        Self {
            slot,
            heading: format!("{} {}s", slot.title(), capitalize(noun)),
            count_label: format!("{} of {}", counts.count(slot), slot.capacity()),
            complete: remaining == 0,
            rows,
            remaining_label: (remaining > 0).then(|| {
                format!(
                    "{} {} {}{} remaining",
                    remaining,
                    slot.label(),
                    noun,
                    if remaining == 1 { "" } else { "s" }
                )
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightingStatus {
    pub balanced: bool,
    pub total: i32,
    pub message: String,
}

impl WeightingStatus {
    /// Only reported once every slot is filled.
    fn evaluate(importances: &[i32]) -> Option<Self> {
        if importances.len() != MAX_COLLECTION_SIZE {
            return None;
        }
        let total: i32 = importances.iter().sum();
        let balanced = total == TARGET_TOTAL_WEIGHT;
        Some(Self {
            balanced,
            total,
            message: if balanced {
                "All attributes selected and properly weighted".to_string()
            } else {
                format!("Total weighting must equal 100% (currently {total}%)")
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeListView {
    pub title: &'static str,
    pub counts: SlotCounts,
    pub primary: SlotSection<AttributeRowView>,
    pub secondary: SlotSection<AttributeRowView>,
    pub available: Vec<CatalogOption>,
    pub can_add: bool,
    pub select_prompt: &'static str,
    /// Slot the add button targets; `None` when both are full.
    pub add: Option<AddOption>,
    pub empty_state: Option<EmptyState>,
    pub weighting: Option<WeightingStatus>,
    pub admin_notice: Option<&'static str>,
}

impl AttributeListView {
    pub fn build(attributes: &[WorkspaceAttribute], capability: Capability) -> Self {
        let counts = SlotCounts::from_flags(attributes.iter().map(|a| a.is_primary));
        let rows_for = |slot: Slot| -> Vec<AttributeRowView> {
            attributes
                .iter()
                .filter(|a| a.slot() == slot)
                .map(|a| AttributeRowView::new(a, capability))
                .collect()
        };

        let available = PredefinedAttribute::ALL
            .iter()
            .filter(|name| !attributes.iter().any(|a| a.name == **name))
            .map(|name| CatalogOption {
                name: name.as_str(),
                description: name.description(),
            })
            .collect();

        let next = counts.next_open();
        let importances: Vec<i32> = attributes.iter().map(|a| a.importance).collect();

        Self {
            title: "Workspace Attributes (Company-Wide)",
            counts,
            primary: SlotSection::build(Slot::Primary, "attribute", counts, rows_for(Slot::Primary)),
            secondary: SlotSection::build(
                Slot::Secondary,
                "attribute",
                counts,
                rows_for(Slot::Secondary),
            ),
            available,
            can_add: capability.can_edit() && attributes.len() < MAX_COLLECTION_SIZE,
            select_prompt: if counts.is_full(Slot::Primary) {
                "Select a secondary attribute"
            } else {
                "Select a primary attribute"
            },
            add: next.map(|slot| AddOption {
                slot,
                label: format!("Add {} Attribute", slot.title()),
            }),
            empty_state: attributes.is_empty().then_some(EmptyState {
                message: "No workspace attributes defined yet",
                hint: "Add up to 6 attributes that define what your organization values",
            }),
            weighting: WeightingStatus::evaluate(&importances),
            admin_notice: capability
                .can_edit()
                .then_some("Changing these attributes may affect existing Lines of Business and Scenarios"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalListView {
    pub title: &'static str,
    pub counts: SlotCounts,
    pub primary: SlotSection<GoalRowView>,
    pub secondary: SlotSection<GoalRowView>,
    pub available: Vec<CatalogOption>,
    pub select_prompt: &'static str,
    /// One button per slot that still has room.
    pub add_options: Vec<AddOption>,
    pub empty_state: Option<EmptyState>,
    pub admin_notice: Option<&'static str>,
}

impl GoalListView {
    pub fn build(goals: &[CompanyGoal], capability: Capability) -> Self {
        let counts = SlotCounts::from_flags(goals.iter().map(|g| g.is_primary));
        let rows_for = |slot: Slot| -> Vec<GoalRowView> {
            goals
                .iter()
                .filter(|g| g.slot() == slot)
                .map(|g| GoalRowView::new(g, capability))
                .collect()
        };

        let available = PredefinedGoal::ALL
            .iter()
            .filter(|name| !goals.iter().any(|g| g.name == **name))
            .map(|name| CatalogOption {
                name: name.as_str(),
                description: name.description(),
            })
            .collect();

        let add_options = if capability.can_edit() {
            [Slot::Primary, Slot::Secondary]
                .into_iter()
                .filter(|slot| !counts.is_full(*slot))
                .map(|slot| AddOption {
                    slot,
                    label: format!("Add {}", slot.title()),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: "Company Goals",
            counts,
            primary: SlotSection::build(Slot::Primary, "goal", counts, rows_for(Slot::Primary)),
            secondary: SlotSection::build(Slot::Secondary, "goal", counts, rows_for(Slot::Secondary)),
            available,
            select_prompt: if counts.is_full(Slot::Primary) {
                "Select a secondary goal"
            } else {
                "Select a primary goal"
            },
            add_options,
            empty_state: goals.is_empty().then_some(EmptyState {
                message: "No company goals defined yet",
                hint: "Add up to 6 goals (3 primary + 3 secondary) to define your strategic objectives",
            }),
            admin_notice: capability
                .can_edit()
                .then_some("Company goals help align workspace decisions with your strategic objectives"),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn attribute(id: i64, name: PredefinedAttribute, importance: i32, is_primary: bool) -> WorkspaceAttribute {
        WorkspaceAttribute {
            id,
            name,
            importance,
            is_primary,
            order_index: id as i32,
            company_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_single_secondary_attribute() {
        let list = [attribute(1, PredefinedAttribute::Collaboration, 0, false)];
        let view = AttributeListView::build(&list, Capability::Admin);

        assert_eq!(view.primary.count_label, "0 of 3");
        assert_eq!(view.secondary.count_label, "1 of 3");
        assert_eq!(view.primary.remaining_label.as_deref(), Some("3 primary attributes remaining"));
        assert_eq!(view.secondary.remaining_label.as_deref(), Some("2 secondary attributes remaining"));
        assert_eq!(view.primary.heading, "Primary Attributes");
        assert_eq!(view.available.len(), 19);
        assert_eq!(view.add.unwrap().label, "Add Primary Attribute");
        assert!(view.weighting.is_none());
        assert!(view.empty_state.is_none());
    }

    #[test]
    fn test_weighting_status_with_full_list() {
        let names = [
            PredefinedAttribute::Collaboration,
            PredefinedAttribute::CostEfficiency,
            PredefinedAttribute::Daylight,
            PredefinedAttribute::Parking,
            PredefinedAttribute::Privacy,
            PredefinedAttribute::Safety,
        ];
        let mut list: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, n)| attribute(i as i64, *n, 15, i < 3))
            .collect();

        let view = AttributeListView::build(&list, Capability::Viewer);
        let weighting = view.weighting.unwrap();
        assert!(!weighting.balanced);
        assert_eq!(weighting.message, "Total weighting must equal 100% (currently 90%)");
        assert!(!view.can_add);
        assert!(view.add.is_none());
        assert!(view.admin_notice.is_none());
        assert!(view.primary.complete);
        assert_eq!(view.primary.remaining_label, None);

        list[0].importance = 25;
        let view = AttributeListView::build(&list, Capability::Admin);
        assert_eq!(
            view.weighting.unwrap().message,
            "All attributes selected and properly weighted"
        );
    }

    #[test]
    fn test_goal_add_options_follow_open_slots() {
        let goals: Vec<_> = [
            PredefinedGoal::CostOptimization,
            PredefinedGoal::BrandEnhancement,
            PredefinedGoal::MarketExpansion,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, name)| CompanyGoal {
            id: i as i64,
            name,
            importance: 0,
            is_primary: true,
            company_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .collect();

        let view = GoalListView::build(&goals, Capability::Admin);
        let labels: Vec<_> = view.add_options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Add Secondary"]);
        assert_eq!(view.select_prompt, "Select a secondary goal");
        assert_eq!(view.secondary.remaining_label.as_deref(), Some("3 secondary goals remaining"));

        let empty = GoalListView::build(&[], Capability::Viewer);
        assert!(empty.add_options.is_empty());
        assert_eq!(empty.empty_state.unwrap().message, "No company goals defined yet");
    }
}
