// ============================================================================
// WPS Core - Scenario Views
// File: crates/wps-core/src/views/scenarios.rs
// ============================================================================

use serde::Serialize;
use wps_shared::EntityId;

use super::navigation::Route;
use crate::capability::Capability;
use crate::domain::{BadgeTone, Scenario, ScenarioDetails};

pub const SCENARIO_LOAD_ERROR: &str = "Failed to load scenario details. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    fn of(scenario: &Scenario) -> Self {
        Self {
            label: scenario.status.label(),
            tone: scenario.status.tone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioCardView {
    pub id: EntityId,
    pub name: String,
    pub status: StatusBadge,
    pub objective: &'static str,
    pub description: Option<String>,
    pub href: String,
}

impl ScenarioCardView {
    pub fn new(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id,
            name: scenario.name.clone(),
            status: StatusBadge::of(scenario),
            objective: scenario.objective.label(),
            description: scenario.description.clone().filter(|d| !d.is_empty()),
            href: Route::ScenarioDetail(scenario.id).path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub message: &'static str,
    pub action_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioListView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<ScenarioCardView>,
    pub can_create: bool,
    pub empty_state: Option<CallToAction>,
}

impl ScenarioListView {
    /// `scenarios` are expected newest first, as the repository returns them.
    pub fn build(scenarios: &[Scenario], capability: Capability) -> Self {
        Self {
            title: "Workplace Scenarios",
            subtitle: "Create and analyze workplace effectiveness scenarios.",
            cards: scenarios.iter().map(ScenarioCardView::new).collect(),
            can_create: capability.can_edit(),
            empty_state: scenarios.is_empty().then_some(CallToAction {
                message: "No scenarios created yet",
                action_label: "Create New Scenario",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub summary: String,
    /// Rendered muted when nothing was selected.
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioDetailView {
    pub back_label: &'static str,
    pub back_href: String,
    pub name: String,
    pub status: StatusBadge,
    pub description: Option<String>,
    pub sections: Vec<DetailSection>,
}

impl ScenarioDetailView {
    pub fn build(details: &ScenarioDetails) -> Self {
        let scenario = &details.scenario;
        let mut sections = vec![
            DetailSection {
                title: "Objective",
                summary: scenario.objective.label().to_string(),
                muted: false,
            },
            count_section(
                "Lines of Business",
                details.lobs.len(),
                "LOBs selected",
                "No LOBs selected",
            ),
            count_section(
                "Spaces",
                details.spaces.len(),
                "spaces included",
                "No spaces selected",
            ),
        ];

        // Ratings and financials are omitted entirely when empty.
        if !details.attribute_ratings.is_empty() {
            sections.push(DetailSection {
                title: "Attribute Ratings",
                summary: format!("{} ratings provided", details.attribute_ratings.len()),
                muted: false,
            });
        }
        if !details.financials.is_empty() {
            sections.push(DetailSection {
                title: "Financial Details",
                summary: format!("{} financial records", details.financials.len()),
                muted: false,
            });
        }

        Self {
            back_label: "Back to Scenarios",
            back_href: Route::Scenarios.path(),
            name: scenario.name.clone(),
            status: StatusBadge::of(scenario),
            description: scenario.description.clone().filter(|d| !d.is_empty()),
            sections,
        }
    }

    pub fn section(&self, title: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

fn count_section(
    title: &'static str,
    count: usize,
    suffix: &str,
    none: &'static str,
) -> DetailSection {
    if count == 0 {
        DetailSection {
            title,
            summary: none.to_string(),
            muted: true,
        }
    } else {
        DetailSection {
            title,
            summary: format!("{count} {suffix}"),
            muted: false,
        }
    }
}
