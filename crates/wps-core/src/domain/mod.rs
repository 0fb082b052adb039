//! # WPS Core - Domain Module
//!
//! Domain entities and catalogs of the workplace strategy dashboard.

pub mod catalog;
pub mod slot;
pub mod company_profile;
pub mod workspace_attribute;
pub mod company_goal;
pub mod industry_weighting;
pub mod line_of_business;
pub mod space;
pub mod scenario;

// Re-export all entities and enums
pub use catalog::{
    BadgeTone, Industry, LobType, PredefinedAttribute, PredefinedGoal, ScenarioObjective,
    ScenarioStatus,
};
pub use slot::{Slot, SlotCounts};
pub use company_profile::{CompanyProfile, NewCompanyProfile, ProfileUpdate};
pub use workspace_attribute::{NewWorkspaceAttribute, WorkspaceAttribute};
pub use company_goal::{CompanyGoal, NewCompanyGoal};
pub use industry_weighting::{seed_importance, IndustryWeighting};
pub use line_of_business::{LineOfBusiness, LineOfBusinessUpdate, NewLineOfBusiness};
pub use space::{NewSpace, Space, SpaceUpdate};
pub use scenario::{
    NewScenario, NewScenarioAttributeRating, NewScenarioFinancial, NewScenarioLob,
    NewScenarioSpace, Scenario, ScenarioAttributeRating, ScenarioDetails, ScenarioFinancial,
    ScenarioLob, ScenarioSpace,
};
