//! # WPS Core
//!
//! Domain entities, repository traits, services, the scenario wizard and
//! view models of the workplace strategy dashboard.

pub mod domain;
pub mod error;
pub mod capability;
pub mod cache;
pub mod notify;
pub mod repositories;
pub mod services;
pub mod wizard;
pub mod views;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use capability::Capability;
pub use cache::{QueryCache, QueryKey};
pub use notify::{Notifier, Toast, ToastCenter, ToastVariant};
pub use services::{ServiceContext, Services};
pub use wizard::{ScenarioWizard, WizardError};
