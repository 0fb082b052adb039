//! Attribute and goal rows.

use serde::Serialize;
use wps_shared::{clamp_importance, EntityId};

use crate::capability::Capability;
use crate::domain::{CompanyGoal, Slot, WorkspaceAttribute};

/// Admin-only actions on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowActions {
    pub can_delete: bool,
    pub toggle_label: &'static str,
    pub toggle_target: Slot,
}

impl RowActions {
    fn for_slot(slot: Slot, capability: Capability) -> Option<Self> {
        capability.can_edit().then(|| RowActions {
            can_delete: true,
            toggle_label: match slot {
                Slot::Primary => "Move to Secondary",
                Slot::Secondary => "Move to Primary",
            },
            toggle_target: slot.other(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeRowView {
    pub id: EntityId,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: i32,
    pub importance_disabled: bool,
    pub actions: Option<RowActions>,
}

impl AttributeRowView {
    pub fn new(attribute: &WorkspaceAttribute, capability: Capability) -> Self {
        Self {
            id: attribute.id,
            name: attribute.name.as_str(),
            description: attribute.name.description(),
            importance: attribute.importance,
            importance_disabled: !capability.can_edit(),
            actions: RowActions::for_slot(attribute.slot(), capability),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRowView {
    pub id: EntityId,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: i32,
    pub importance_disabled: bool,
    pub actions: Option<RowActions>,
}

impl GoalRowView {
    pub fn new(goal: &CompanyGoal, capability: Capability) -> Self {
        Self {
            id: goal.id,
            name: goal.name.as_str(),
            description: goal.name.description(),
            importance: goal.importance,
            importance_disabled: !capability.can_edit(),
            actions: RowActions::for_slot(goal.slot(), capability),
        }
    }
}

/// Raw text typed into an importance editor.
pub struct ImportanceInput;

impl ImportanceInput {
    /// Reads the leading integer of `raw`. Anything unparsable is 0; the
    /// result is clamped into 0–100.
    pub fn parse(raw: &str) -> i32 {
        let trimmed = raw.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['-', '+']));
        let digits = trimmed[sign_len..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();

        trimmed[..sign_len + digits]
            .parse::<i64>()
            .map(|v| clamp_importance(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PredefinedAttribute;
    use chrono::Utc;

    #[test]
    fn test_importance_input_parse() {
        assert_eq!(ImportanceInput::parse("42"), 42);
        assert_eq!(ImportanceInput::parse("  17%"), 17);
        assert_eq!(ImportanceInput::parse("abc"), 0);
        assert_eq!(ImportanceInput::parse(""), 0);
        assert_eq!(ImportanceInput::parse("250"), 100);
        assert_eq!(ImportanceInput::parse("-5"), 0);
        assert_eq!(ImportanceInput::parse("99999999999"), 100);
    }

    #[test]
    fn test_viewer_row_is_read_only() {
        let attribute = WorkspaceAttribute {
            id: 1,
            name: PredefinedAttribute::Collaboration,
            importance: 30,
            is_primary: true,
            order_index: 0,
            company_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let viewer = AttributeRowView::new(&attribute, Capability::Viewer);
        assert!(viewer.importance_disabled);
        assert!(viewer.actions.is_none());

        let admin = AttributeRowView::new(&attribute, Capability::Admin);
        let actions = admin.actions.unwrap();
        assert_eq!(actions.toggle_label, "Move to Secondary");
        assert_eq!(
            admin.description,
            "Spaces that encourage team interaction, huddle rooms, open layout"
        );
    }
}
