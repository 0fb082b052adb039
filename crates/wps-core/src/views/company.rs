//! Company information card.

use serde::Serialize;

use crate::capability::Capability;
use crate::domain::{CompanyProfile, Industry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyInformationView {
    pub title: &'static str,
    pub fields: Vec<InfoField>,
    pub editable: bool,
    /// Industry choices for the edit form, led by the placeholder.
    pub industry_options: Vec<&'static str>,
}

impl CompanyInformationView {
    pub fn build(profile: &CompanyProfile, capability: Capability) -> Self {
        let editable = capability.can_edit();
        let industry_options = if editable {
            std::iter::once("Select an industry")
                .chain(Industry::ALL.iter().map(|i| i.as_str()))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: "Company Information",
            fields: vec![
                InfoField {
                    label: "Company Name",
                    value: profile.name.clone(),
                },
                InfoField {
                    label: "Industry",
                    value: profile.industry.as_str().to_string(),
                },
                InfoField {
                    label: "Company Size",
                    value: format!("{} employees", group_thousands(profile.company_size)),
                },
                InfoField {
                    label: "Number of Sites",
                    value: match profile.number_of_sites {
                        Some(sites) => format!("{} locations", group_thousands(sites)),
                        None => "Not specified".to_string(),
                    },
                },
            ],
            editable,
            industry_options,
        }
    }
}

/// `12500` → `"12,500"`.
pub fn group_thousands(value: i32) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(50), "50");
        assert_eq!(group_thousands(1200), "1,200");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_fields() {
        let profile = CompanyProfile {
            id: 1,
            name: "Acme".to_string(),
            industry: Industry::Technology,
            company_size: 1200,
            number_of_sites: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let view = CompanyInformationView::build(&profile, Capability::Viewer);
        assert_eq!(view.fields[2].value, "1,200 employees");
        assert_eq!(view.fields[3].value, "2 locations");
        assert!(!view.editable);
        assert!(view.industry_options.is_empty());
    }
}
