//! Viewer capability passed to every operation that can mutate state.

use serde::{Deserialize, Serialize};
use wps_shared::config::RoleSetting;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Admin,
    Viewer,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Admin => "admin",
            Capability::Viewer => "viewer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Capability::Admin),
            "viewer" => Some(Capability::Viewer),
            _ => None,
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(self, Capability::Admin)
    }

    pub fn require_edit(&self) -> Result<(), DomainError> {
        if self.can_edit() {
            Ok(())
        } else {
            Err(DomainError::Forbidden)
        }
    }
}

impl From<RoleSetting> for Capability {
    fn from(role: RoleSetting) -> Self {
        match role {
            RoleSetting::Admin => Capability::Admin,
            RoleSetting::Viewer => Capability::Viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_cannot_edit() {
        assert!(Capability::Admin.require_edit().is_ok());
        assert_eq!(Capability::Viewer.require_edit(), Err(DomainError::Forbidden));
        assert_eq!(Capability::from_str(" Viewer "), Some(Capability::Viewer));
        assert_eq!(Capability::from_str("root"), None);
    }
}
