//! Presentation view models.
//!
//! Plain serializable structs built from domain data and a [`Capability`].
//! They hold every user-visible string and the enabled/disabled state of each
//! control; they never call a service.
//!
//! [`Capability`]: crate::capability::Capability

pub mod rows;
pub mod lists;
pub mod company;
pub mod scenarios;
pub mod navigation;

pub use rows::{AttributeRowView, GoalRowView, ImportanceInput, RowActions};
pub use lists::{AddOption, AttributeListView, CatalogOption, EmptyState, GoalListView, SlotSection, WeightingStatus};
pub use company::{CompanyInformationView, InfoField};
pub use scenarios::{
    CallToAction, DetailSection, ScenarioCardView, ScenarioDetailView, ScenarioListView,
    StatusBadge, SCENARIO_LOAD_ERROR,
};
pub use navigation::{DashboardCard, DashboardView, NavItem, QuickStat, Route, SidebarView};
