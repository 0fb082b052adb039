use std::sync::Arc;

use uuid::Uuid;
use wps_core::repositories::Repositories;
use wps_core::{Capability, ScenarioWizard, Services, ToastCenter};
use wps_shared::config::DashboardSettings;

use crate::error::ApiError;
use crate::sessions::{WizardSession, WizardSessions};

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub toasts: Arc<ToastCenter>,
    pub wizards: Arc<WizardSessions>,
    pub default_capability: Capability,
}

impl AppState {
    pub fn new(repos: Repositories, settings: &DashboardSettings) -> Self {
        let toasts = Arc::new(ToastCenter::new(settings.notification_capacity));
        Self {
            services: Services::new(repos, toasts.clone()),
            toasts,
            wizards: Arc::new(WizardSessions::from_settings(settings)),
            default_capability: settings.default_role.into(),
        }
    }

    pub fn open_wizard(&self) -> (Uuid, WizardSession) {
        self.wizards.open(ScenarioWizard::new(self.toasts.clone()))
    }

    pub fn wizard(&self, id: Uuid) -> Result<WizardSession, ApiError> {
        self.wizards.get(id).ok_or(ApiError::SessionNotFound(id))
    }
}
