//! Repository traits (ports) over the relational backend.

pub mod company_profile_repository;
pub mod workspace_attribute_repository;
pub mod company_goal_repository;
pub mod industry_weighting_repository;
pub mod line_of_business_repository;
pub mod space_repository;
pub mod scenario_repository;

use std::sync::Arc;

pub use company_profile_repository::CompanyProfileRepository;
pub use workspace_attribute_repository::WorkspaceAttributeRepository;
pub use company_goal_repository::CompanyGoalRepository;
pub use industry_weighting_repository::IndustryWeightingRepository;
pub use line_of_business_repository::LineOfBusinessRepository;
pub use space_repository::SpaceRepository;
pub use scenario_repository::ScenarioRepository;

/// One handle per table family, as provided by a backend adapter.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn CompanyProfileRepository>,
    pub attributes: Arc<dyn WorkspaceAttributeRepository>,
    pub goals: Arc<dyn CompanyGoalRepository>,
    pub weightings: Arc<dyn IndustryWeightingRepository>,
    pub lobs: Arc<dyn LineOfBusinessRepository>,
    pub spaces: Arc<dyn SpaceRepository>,
    pub scenarios: Arc<dyn ScenarioRepository>,
}
