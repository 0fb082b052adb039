//! PostgreSQL repository implementations

pub mod company_profile_repo_impl;
pub mod workspace_attribute_repo_impl;
pub mod company_goal_repo_impl;
pub mod industry_weighting_repo_impl;
pub mod line_of_business_repo_impl;
pub mod space_repo_impl;
pub mod scenario_repo_impl;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::error;
use wps_core::error::DomainError;
use wps_core::repositories::Repositories;

pub use company_profile_repo_impl::PgCompanyProfileRepository;
pub use workspace_attribute_repo_impl::PgWorkspaceAttributeRepository;
pub use company_goal_repo_impl::PgCompanyGoalRepository;
pub use industry_weighting_repo_impl::PgIndustryWeightingRepository;
pub use line_of_business_repo_impl::PgLineOfBusinessRepository;
pub use space_repo_impl::PgSpaceRepository;
pub use scenario_repo_impl::PgScenarioRepository;

/// All repositories sharing one pool.
pub fn repositories(pool: PgPool) -> Repositories {
    Repositories {
        profiles: Arc::new(PgCompanyProfileRepository::new(pool.clone())),
        attributes: Arc::new(PgWorkspaceAttributeRepository::new(pool.clone())),
        goals: Arc::new(PgCompanyGoalRepository::new(pool.clone())),
        weightings: Arc::new(PgIndustryWeightingRepository::new(pool.clone())),
        lobs: Arc::new(PgLineOfBusinessRepository::new(pool.clone())),
        spaces: Arc::new(PgSpaceRepository::new(pool.clone())),
        scenarios: Arc::new(PgScenarioRepository::new(pool)),
    }
}

/// Maps a `sqlx` failure to a domain error, logging what was attempted.
pub(crate) fn db_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", action, e);
        DomainError::DatabaseError(e.to_string())
    }
}

/// Decodes a TEXT column holding a catalog value.
pub(crate) fn decode<T>(
    parsed: Option<T>,
    column: &'static str,
    raw: &str,
) -> Result<T, DomainError> {
    parsed.ok_or_else(|| {
        error!("Unrecognized {} value in database: {}", column, raw);
        DomainError::InternalError(format!("Unrecognized {column}: {raw}"))
    })
}
