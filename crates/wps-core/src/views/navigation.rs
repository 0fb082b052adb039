//! Navigation targets, the sidebar menu and the dashboard home cards.

use serde::Serialize;
use wps_shared::EntityId;

use crate::domain::{CompanyProfile, LineOfBusiness, Scenario, ScenarioStatus, Space};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Company,
    LinesOfBusiness,
    Spaces,
    Scenarios,
    ScenarioDetail(EntityId),
    Settings,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Company => "/company".to_string(),
            Route::LinesOfBusiness => "/lob".to_string(),
            Route::Spaces => "/spaces".to_string(),
            Route::Scenarios => "/scenarios".to_string(),
            Route::ScenarioDetail(id) => format!("/scenarios/{id}"),
            Route::Settings => "/settings".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Dashboard),
            "/company" => Some(Route::Company),
            "/lob" => Some(Route::LinesOfBusiness),
            "/spaces" => Some(Route::Spaces),
            "/scenarios" => Some(Route::Scenarios),
            "/settings" => Some(Route::Settings),
            _ => trimmed
                .strip_prefix("/scenarios/")
                .and_then(|id| id.parse().ok())
                .map(Route::ScenarioDetail),
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Company => "Company Profile",
            Route::LinesOfBusiness => "Lines of Business",
            Route::Spaces => "Spaces",
            Route::Scenarios => "Scenarios",
            Route::ScenarioDetail(_) => "Scenario Details",
            Route::Settings => "Settings",
        }
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub header: &'static str,
    pub group_label: &'static str,
    pub items: Vec<NavItem>,
}

impl SidebarView {
    pub fn build() -> Self {
        let items = [
            Route::Dashboard,
            Route::Company,
            Route::LinesOfBusiness,
            Route::Spaces,
            Route::Scenarios,
            Route::Settings,
        ]
        .into_iter()
        .map(|route| NavItem {
            title: route.title(),
            route,
        })
        .collect();

        Self {
            header: "Workplace Hub",
            group_label: "Navigation",
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
    pub status: String,
    pub action_label: &'static str,
    /// Flagged with a warning marker.
    pub incomplete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub heading: String,
    pub intro: &'static str,
    pub quick_stats: Vec<QuickStat>,
    pub cards: Vec<DashboardCard>,
}

impl DashboardView {
    /// A space without a monthly cost counts as incomplete. Any scenario
    /// that is not completed counts as active.
    pub fn build(
        profile: Option<&CompanyProfile>,
        lobs: &[LineOfBusiness],
        spaces: &[Space],
        scenarios: &[Scenario],
    ) -> Self {
        let incomplete_spaces = spaces.iter().filter(|s| s.monthly_cost.is_none()).count();
        let active_scenarios = scenarios
            .iter()
            .filter(|s| s.status != ScenarioStatus::Completed)
            .count();

        let cards = vec![
            DashboardCard {
                title: "Company Profile",
                description: "Configure your workspace attributes",
                route: Route::Company,
                status: match profile {
                    Some(p) => format!("Industry: {}", p.industry.as_str()),
                    None => "Profile not initialized".to_string(),
                },
                action_label: if profile.is_some() { "Edit Profile" } else { "Initialize" },
                incomplete: profile.is_none(),
            },
            DashboardCard {
                title: "Lines of Business",
                description: "Manage your business units",
                route: Route::LinesOfBusiness,
                status: format!("{} Business Units", lobs.len()),
                action_label: "Add New",
                incomplete: lobs.is_empty(),
            },
            DashboardCard {
                title: "Spaces",
                description: "Track your office properties",
                route: Route::Spaces,
                status: if incomplete_spaces > 0 {
                    format!("{} Spaces, {} Incomplete", spaces.len(), incomplete_spaces)
                } else {
                    format!("{} Spaces", spaces.len())
                },
                action_label: "Add Space",
                incomplete: incomplete_spaces > 0,
            },
            DashboardCard {
                title: "Scenarios",
                description: "Plan and analyze effectiveness",
                route: Route::Scenarios,
                status: format!("{active_scenarios} Active Scenarios"),
                action_label: "Create New",
                incomplete: scenarios.is_empty(),
            },
        ];

        Self {
            heading: match profile {
                Some(p) => format!("Welcome, {}", p.name),
                None => "Welcome".to_string(),
            },
            intro: "Here's what's happening in your workspace. Review your spaces and \
                    scenarios to optimize your workplace strategy.",
            quick_stats: vec![
                QuickStat {
                    label: "Active Scenarios",
                    value: active_scenarios,
                },
                QuickStat {
                    label: "Total Spaces",
                    value: spaces.len(),
                },
                QuickStat {
                    label: "Business Units",
                    value: lobs.len(),
                },
            ],
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        let routes = [
            Route::Dashboard,
            Route::Company,
            Route::LinesOfBusiness,
            Route::Spaces,
            Route::Scenarios,
            Route::ScenarioDetail(12),
            Route::Settings,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse("/scenarios/abc"), None);
        assert_eq!(Route::parse("/analytics"), None);
    }

    #[test]
    fn test_empty_dashboard_flags_missing_profile() {
        let view = DashboardView::build(None, &[], &[], &[]);
        assert!(view.cards[0].incomplete);
        assert_eq!(view.cards[0].action_label, "Initialize");
        assert_eq!(view.cards[2].status, "0 Spaces");
        assert_eq!(SidebarView::build().items.len(), 6);
    }
}
