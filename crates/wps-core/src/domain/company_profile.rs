// ============================================================================
// WPS Core - Company Profile Entity
// File: crates/wps-core/src/domain/company_profile.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use wps_shared::EntityId;

use super::catalog::Industry;

/// The single company profile of the tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: EntityId,
    pub name: String,
    pub industry: Industry,
    pub company_size: i32,
    pub number_of_sites: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of the "Initialize" flow.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCompanyProfile {
    #[validate(length(min = 1, max = 200, message = "Company name is required"))]
    pub name: String,

    pub industry: Industry,

    #[validate(range(min = 0, message = "Company size cannot be negative"))]
    pub company_size: i32,

    #[validate(range(min = 0, message = "Number of sites cannot be negative"))]
    pub number_of_sites: Option<i32>,
}

impl NewCompanyProfile {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}

/// Partial update of the profile. The edit form always resubmits the
/// industry, so a patch without one is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 200, message = "Company name is required"))]
    pub name: Option<String>,

    pub industry: Option<Industry>,

    #[validate(range(min = 0, message = "Company size cannot be negative"))]
    pub company_size: Option<i32>,

    #[validate(range(min = 0, message = "Number of sites cannot be negative"))]
    pub number_of_sites: Option<i32>,
}

impl ProfileUpdate {
    /// Applies the patch onto a copy of `profile`.
    pub fn apply(&self, profile: &CompanyProfile) -> CompanyProfile {
        let mut updated = profile.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(industry) = self.industry {
            updated.industry = industry;
        }
        if let Some(size) = self.company_size {
            updated.company_size = size;
        }
        if self.number_of_sites.is_some() {
            updated.number_of_sites = self.number_of_sites;
        }
        updated.updated_at = Utc::now();
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CompanyProfile {
        CompanyProfile {
            id: 1,
            name: "Acme".to_string(),
            industry: Industry::Technology,
            company_size: 50,
            number_of_sites: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_profile_requires_name() {
        let new = NewCompanyProfile {
            name: String::new(),
            industry: Industry::Finance,
            company_size: 10,
            number_of_sites: None,
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let patch = ProfileUpdate {
            name: Some("  Acme Corp ".to_string()),
            industry: Some(Industry::Retail),
            ..Default::default()
        };
        let updated = patch.apply(&profile());
        assert_eq!(updated.name, "Acme Corp");
        assert_eq!(updated.industry, Industry::Retail);
        assert_eq!(updated.company_size, 50);
        assert_eq!(updated.number_of_sites, Some(2));
    }
}
