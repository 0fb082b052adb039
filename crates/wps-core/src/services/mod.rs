//! Domain services: one per entity collection.
//!
//! Every mutation checks the caller's [`Capability`](crate::capability::Capability),
//! invalidates the affected query keys after the backend confirms the write,
//! and raises a toast. Failed mutations leave the cache untouched.

pub mod company_profile_service;
pub mod workspace_attribute_service;
pub mod company_goal_service;
pub mod line_of_business_service;
pub mod space_service;
pub mod scenario_service;

use std::sync::Arc;

use tracing::{error, warn};

pub use company_profile_service::CompanyProfileService;
pub use workspace_attribute_service::{
    ConfirmationAnswer, DeleteConfirmation, DeleteOutcome, WorkspaceAttributeService,
};
pub use company_goal_service::CompanyGoalService;
pub use line_of_business_service::LineOfBusinessService;
pub use space_service::SpaceService;
pub use scenario_service::{ScenarioService, ScenarioSubmission};

use crate::cache::{QueryCache, QueryKey};
use crate::error::DomainError;
use crate::notify::{Notifier, Toast};
use crate::repositories::Repositories;

/// Cache and notification sink shared by all services.
#[derive(Clone)]
pub struct ServiceContext {
    pub cache: Arc<QueryCache>,
    pub notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cache: Arc::new(QueryCache::new()),
            notifier,
        }
    }

    /// Drops every cached scenario detail. Deleting a line of business, space
    /// or attribute removes the scenario rows that reference it.
    pub(crate) fn invalidate_scenario_details(&self) -> usize {
        self.cache.invalidate_where(|key| matches!(key, QueryKey::Scenario(_)))
    }

    /// Finishes a mutation: on success invalidates `keys` and raises the
    /// optional success toast; on failure raises an error toast. Client-side
    /// rejections show their own message, backend failures show `failure`.
    pub(crate) fn settle<T>(
        &self,
        result: Result<T, DomainError>,
        keys: &[QueryKey],
        success: Option<&str>,
        failure: &str,
    ) -> Result<T, DomainError> {
        match result {
            Ok(value) => {
                for key in keys {
                    self.cache.invalidate(key);
                }
                if let Some(description) = success {
                    self.notifier.notify(Toast::success(description));
                }
                Ok(value)
            }
            Err(e) => {
                let description = if e.is_client_side() {
                    warn!("Mutation rejected: {}", e);
                    e.to_string()
                } else {
                    error!("Mutation failed: {}", e);
                    failure.to_string()
                };
                self.notifier.notify(Toast::error(description));
                Err(e)
            }
        }
    }
}

/// All services wired to one backend, cache and notifier.
#[derive(Clone)]
pub struct Services {
    pub context: ServiceContext,
    pub profile: Arc<CompanyProfileService>,
    pub attributes: Arc<WorkspaceAttributeService>,
    pub goals: Arc<CompanyGoalService>,
    pub lobs: Arc<LineOfBusinessService>,
    pub spaces: Arc<SpaceService>,
    pub scenarios: Arc<ScenarioService>,
}

impl Services {
    pub fn new(repos: Repositories, notifier: Arc<dyn Notifier>) -> Self {
        let context = ServiceContext::new(notifier);
        Self {
            profile: Arc::new(CompanyProfileService::new(repos.profiles.clone(), context.clone())),
            attributes: Arc::new(WorkspaceAttributeService::new(
                repos.attributes.clone(),
                repos.weightings.clone(),
                repos.profiles.clone(),
                context.clone(),
            )),
            goals: Arc::new(CompanyGoalService::new(
                repos.goals.clone(),
                repos.profiles.clone(),
                context.clone(),
            )),
            lobs: Arc::new(LineOfBusinessService::new(repos.lobs.clone(), context.clone())),
            spaces: Arc::new(SpaceService::new(repos.spaces.clone(), context.clone())),
            scenarios: Arc::new(ScenarioService::new(
                repos.scenarios.clone(),
                repos.profiles.clone(),
                context.clone(),
            )),
            context,
        }
    }
}
