// ============================================================================
// WPS Core - Catalogs
// File: crates/wps-core/src/domain/catalog.rs
// Description: Fixed enumerations shared by every entity and view
// ============================================================================
//! Static catalogs: industries, predefined attributes and goals, line of
//! business types, scenario objectives and statuses.
//!
//! Labels and tooltip descriptions are derived with exhaustive matches so a
//! new variant fails to compile until every surface names it.

use serde::{Deserialize, Serialize};

/// Industry of the company profile. Drives default attribute weightings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Retail,
    Manufacturing,
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
    Education,
    Government,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::ProfessionalServices,
        Industry::Education,
        Industry::Government,
        Industry::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Retail => "Retail",
            Industry::Manufacturing => "Manufacturing",
            Industry::ProfessionalServices => "Professional Services",
            Industry::Education => "Education",
            Industry::Government => "Government",
            Industry::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }
}

/// The fixed catalog of twenty workspace attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedAttribute {
    Collaboration,
    #[serde(rename = "Cost Efficiency")]
    CostEfficiency,
    #[serde(rename = "Employee Wellness")]
    EmployeeWellness,
    #[serde(rename = "Location Convenience")]
    LocationConvenience,
    #[serde(rename = "Brand Image / Aesthetics")]
    BrandImage,
    #[serde(rename = "Quiet Spaces / Focus Areas")]
    QuietSpaces,
    #[serde(rename = "Technology Infrastructure")]
    TechnologyInfrastructure,
    #[serde(rename = "Flexibility / Agile Spaces")]
    Flexibility,
    #[serde(rename = "Sustainability / Green Initiatives")]
    Sustainability,
    #[serde(rename = "Security / Access Control")]
    Security,
    #[serde(rename = "Amenities (Cafeteria, Gym)")]
    Amenities,
    #[serde(rename = "Parking / Transportation")]
    Parking,
    #[serde(rename = "Team Adjacencies")]
    TeamAdjacencies,
    #[serde(rename = "Openness / Layout Flow")]
    Openness,
    #[serde(rename = "Daylight / Natural Lighting")]
    Daylight,
    #[serde(rename = "Safety (Fire, Earthquake readiness)")]
    Safety,
    #[serde(rename = "Workspace Density")]
    WorkspaceDensity,
    #[serde(rename = "Privacy / Soundproofing")]
    Privacy,
    #[serde(rename = "Executive / Client Impressiveness")]
    ExecutiveImpressiveness,
    #[serde(rename = "Furniture Ergonomics")]
    FurnitureErgonomics,
}

impl PredefinedAttribute {
    pub const ALL: [PredefinedAttribute; 20] = [
        PredefinedAttribute::Collaboration,
        PredefinedAttribute::CostEfficiency,
        PredefinedAttribute::EmployeeWellness,
        PredefinedAttribute::LocationConvenience,
        PredefinedAttribute::BrandImage,
        PredefinedAttribute::QuietSpaces,
        PredefinedAttribute::TechnologyInfrastructure,
        PredefinedAttribute::Flexibility,
        PredefinedAttribute::Sustainability,
        PredefinedAttribute::Security,
        PredefinedAttribute::Amenities,
        PredefinedAttribute::Parking,
        PredefinedAttribute::TeamAdjacencies,
        PredefinedAttribute::Openness,
        PredefinedAttribute::Daylight,
        PredefinedAttribute::Safety,
        PredefinedAttribute::WorkspaceDensity,
        PredefinedAttribute::Privacy,
        PredefinedAttribute::ExecutiveImpressiveness,
        PredefinedAttribute::FurnitureErgonomics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredefinedAttribute::Collaboration => "Collaboration",
            PredefinedAttribute::CostEfficiency => "Cost Efficiency",
            PredefinedAttribute::EmployeeWellness => "Employee Wellness",
            PredefinedAttribute::LocationConvenience => "Location Convenience",
            PredefinedAttribute::BrandImage => "Brand Image / Aesthetics",
            PredefinedAttribute::QuietSpaces => "Quiet Spaces / Focus Areas",
            PredefinedAttribute::TechnologyInfrastructure => "Technology Infrastructure",
            PredefinedAttribute::Flexibility => "Flexibility / Agile Spaces",
            PredefinedAttribute::Sustainability => "Sustainability / Green Initiatives",
            PredefinedAttribute::Security => "Security / Access Control",
            PredefinedAttribute::Amenities => "Amenities (Cafeteria, Gym)",
            PredefinedAttribute::Parking => "Parking / Transportation",
            PredefinedAttribute::TeamAdjacencies => "Team Adjacencies",
            PredefinedAttribute::Openness => "Openness / Layout Flow",
            PredefinedAttribute::Daylight => "Daylight / Natural Lighting",
            PredefinedAttribute::Safety => "Safety (Fire, Earthquake readiness)",
            PredefinedAttribute::WorkspaceDensity => "Workspace Density",
            PredefinedAttribute::Privacy => "Privacy / Soundproofing",
            PredefinedAttribute::ExecutiveImpressiveness => "Executive / Client Impressiveness",
            PredefinedAttribute::FurnitureErgonomics => "Furniture Ergonomics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }

    /// Tooltip text shown next to the attribute name.
    pub fn description(&self) -> &'static str {
        match self {
            PredefinedAttribute::Collaboration => {
                "Spaces that encourage team interaction, huddle rooms, open layout"
            }
            PredefinedAttribute::CostEfficiency => {
                "Optimal use of space and resources to minimize operational costs"
            }
            PredefinedAttribute::EmployeeWellness => {
                "Features promoting physical and mental health, including air quality and comfort"
            }
            PredefinedAttribute::LocationConvenience => {
                "Accessibility for employees, clients, and business needs"
            }
            PredefinedAttribute::BrandImage => {
                "Visual appeal and alignment with company brand identity"
            }
            PredefinedAttribute::QuietSpaces => {
                "Dedicated areas for concentrated work and privacy"
            }
            PredefinedAttribute::TechnologyInfrastructure => {
                "IT systems, connectivity, and digital workspace capabilities"
            }
            PredefinedAttribute::Flexibility => {
                "Adaptable spaces that can be reconfigured for different needs"
            }
            PredefinedAttribute::Sustainability => {
                "Environmental impact and energy efficiency measures"
            }
            PredefinedAttribute::Security => "Physical security measures and access management",
            PredefinedAttribute::Amenities => {
                "On-site facilities for employee convenience and satisfaction"
            }
            PredefinedAttribute::Parking => "Access to parking and public transit options",
            PredefinedAttribute::TeamAdjacencies => {
                "Strategic placement of teams for optimal collaboration"
            }
            PredefinedAttribute::Openness => {
                "Space planning that promotes movement and interaction"
            }
            PredefinedAttribute::Daylight => "Access to natural light and views",
            PredefinedAttribute::Safety => "Emergency preparedness and safety features",
            PredefinedAttribute::WorkspaceDensity => {
                "Appropriate space allocation per person, avoiding overcrowding"
            }
            PredefinedAttribute::Privacy => "Acoustic isolation and visual privacy measures",
            PredefinedAttribute::ExecutiveImpressiveness => {
                "Areas designed to impress visitors and clients"
            }
            PredefinedAttribute::FurnitureErgonomics => {
                "Comfortable, adjustable furniture supporting employee health"
            }
        }
    }
}

/// The fixed catalog of ten company goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredefinedGoal {
    #[serde(rename = "Cost Optimization")]
    CostOptimization,
    #[serde(rename = "Workforce Retention")]
    WorkforceRetention,
    #[serde(rename = "Brand Enhancement")]
    BrandEnhancement,
    #[serde(rename = "Innovation & Creativity")]
    InnovationCreativity,
    #[serde(rename = "Environmental Sustainability")]
    EnvironmentalSustainability,
    #[serde(rename = "Employee Well-being")]
    EmployeeWellbeing,
    #[serde(rename = "Operational Efficiency")]
    OperationalEfficiency,
    #[serde(rename = "Market Expansion")]
    MarketExpansion,
    #[serde(rename = "Talent Attraction")]
    TalentAttraction,
    #[serde(rename = "Digital Transformation")]
    DigitalTransformation,
}

impl PredefinedGoal {
    pub const ALL: [PredefinedGoal; 10] = [
        PredefinedGoal::CostOptimization,
        PredefinedGoal::WorkforceRetention,
        PredefinedGoal::BrandEnhancement,
        PredefinedGoal::InnovationCreativity,
        PredefinedGoal::EnvironmentalSustainability,
        PredefinedGoal::EmployeeWellbeing,
        PredefinedGoal::OperationalEfficiency,
        PredefinedGoal::MarketExpansion,
        PredefinedGoal::TalentAttraction,
        PredefinedGoal::DigitalTransformation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredefinedGoal::CostOptimization => "Cost Optimization",
            PredefinedGoal::WorkforceRetention => "Workforce Retention",
            PredefinedGoal::BrandEnhancement => "Brand Enhancement",
            PredefinedGoal::InnovationCreativity => "Innovation & Creativity",
            PredefinedGoal::EnvironmentalSustainability => "Environmental Sustainability",
            PredefinedGoal::EmployeeWellbeing => "Employee Well-being",
            PredefinedGoal::OperationalEfficiency => "Operational Efficiency",
            PredefinedGoal::MarketExpansion => "Market Expansion",
            PredefinedGoal::TalentAttraction => "Talent Attraction",
            PredefinedGoal::DigitalTransformation => "Digital Transformation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }

    pub fn description(&self) -> &'static str {
        match self {
            PredefinedGoal::CostOptimization => {
                "Strategies to reduce operational expenses and improve financial efficiency"
            }
            PredefinedGoal::WorkforceRetention => {
                "Initiatives to maintain and develop valuable employees"
            }
            PredefinedGoal::BrandEnhancement => {
                "Efforts to strengthen market position and company image"
            }
            PredefinedGoal::InnovationCreativity => {
                "Fostering new ideas and creative problem-solving"
            }
            PredefinedGoal::EnvironmentalSustainability => {
                "Reducing environmental impact and promoting green practices"
            }
            PredefinedGoal::EmployeeWellbeing => {
                "Programs to improve employee health and satisfaction"
            }
            PredefinedGoal::OperationalEfficiency => {
                "Streamlining processes and improving productivity"
            }
            PredefinedGoal::MarketExpansion => "Growing into new markets or customer segments",
            PredefinedGoal::TalentAttraction => {
                "Recruiting top talent and maintaining competitive advantage"
            }
            PredefinedGoal::DigitalTransformation => "Adopting and leveraging new technologies",
        }
    }
}

/// Line of business type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LobType {
    Research,
    Marketing,
    Sales,
    Operations,
    Engineering,
    Finance,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Legal,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "Customer Service")]
    CustomerService,
}

impl LobType {
    pub const ALL: [LobType; 10] = [
        LobType::Research,
        LobType::Marketing,
        LobType::Sales,
        LobType::Operations,
        LobType::Engineering,
        LobType::Finance,
        LobType::HumanResources,
        LobType::Legal,
        LobType::It,
        LobType::CustomerService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LobType::Research => "Research",
            LobType::Marketing => "Marketing",
            LobType::Sales => "Sales",
            LobType::Operations => "Operations",
            LobType::Engineering => "Engineering",
            LobType::Finance => "Finance",
            LobType::HumanResources => "Human Resources",
            LobType::Legal => "Legal",
            LobType::It => "IT",
            LobType::CustomerService => "Customer Service",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Primary objective of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioObjective {
    CostOptimization,
    WorkforceRetention,
    BrandEnhancement,
    InnovationAndCreativity,
    EnvironmentalSustainability,
    EmployeeWellbeing,
    OperationalEfficiency,
    MarketExpansion,
    TalentAttraction,
    DigitalTransformation,
}

impl ScenarioObjective {
    pub const ALL: [ScenarioObjective; 10] = [
        ScenarioObjective::CostOptimization,
        ScenarioObjective::WorkforceRetention,
        ScenarioObjective::BrandEnhancement,
        ScenarioObjective::InnovationAndCreativity,
        ScenarioObjective::EnvironmentalSustainability,
        ScenarioObjective::EmployeeWellbeing,
        ScenarioObjective::OperationalEfficiency,
        ScenarioObjective::MarketExpansion,
        ScenarioObjective::TalentAttraction,
        ScenarioObjective::DigitalTransformation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioObjective::CostOptimization => "cost_optimization",
            ScenarioObjective::WorkforceRetention => "workforce_retention",
            ScenarioObjective::BrandEnhancement => "brand_enhancement",
            ScenarioObjective::InnovationAndCreativity => "innovation_and_creativity",
            ScenarioObjective::EnvironmentalSustainability => "environmental_sustainability",
            ScenarioObjective::EmployeeWellbeing => "employee_wellbeing",
            ScenarioObjective::OperationalEfficiency => "operational_efficiency",
            ScenarioObjective::MarketExpansion => "market_expansion",
            ScenarioObjective::TalentAttraction => "talent_attraction",
            ScenarioObjective::DigitalTransformation => "digital_transformation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioObjective::CostOptimization => "Cost Optimization",
            ScenarioObjective::WorkforceRetention => "Workforce Retention",
            ScenarioObjective::BrandEnhancement => "Brand Enhancement",
            ScenarioObjective::InnovationAndCreativity => "Innovation and Creativity",
            ScenarioObjective::EnvironmentalSustainability => "Environmental Sustainability",
            ScenarioObjective::EmployeeWellbeing => "Employee Wellbeing",
            ScenarioObjective::OperationalEfficiency => "Operational Efficiency",
            ScenarioObjective::MarketExpansion => "Market Expansion",
            ScenarioObjective::TalentAttraction => "Talent Attraction",
            ScenarioObjective::DigitalTransformation => "Digital Transformation",
        }
    }
}

impl Default for ScenarioObjective {
    fn default() -> Self {
        ScenarioObjective::CostOptimization
    }
}

/// Scenario lifecycle status. Only `Draft` is ever written by this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Draft,
    InProgress,
    Completed,
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
}

impl ScenarioStatus {
    pub const ALL: [ScenarioStatus; 3] = [
        ScenarioStatus::Draft,
        ScenarioStatus::InProgress,
        ScenarioStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioStatus::Draft => "draft",
            ScenarioStatus::InProgress => "in_progress",
            ScenarioStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioStatus::Draft => "Draft",
            ScenarioStatus::InProgress => "In Progress",
            ScenarioStatus::Completed => "Completed",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ScenarioStatus::Draft => BadgeTone::Neutral,
            ScenarioStatus::InProgress => BadgeTone::Info,
            ScenarioStatus::Completed => BadgeTone::Success,
        }
    }
}

impl Default for ScenarioStatus {
    fn default() -> Self {
        ScenarioStatus::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_round_trip_through_from_str() {
        for industry in Industry::ALL {
            assert_eq!(Industry::from_str(industry.as_str()), Some(industry));
        }
        for attr in PredefinedAttribute::ALL {
            assert_eq!(PredefinedAttribute::from_str(attr.as_str()), Some(attr));
        }
        for goal in PredefinedGoal::ALL {
            assert_eq!(PredefinedGoal::from_str(goal.as_str()), Some(goal));
        }
        for lob in LobType::ALL {
            assert_eq!(LobType::from_str(lob.as_str()), Some(lob));
        }
        for objective in ScenarioObjective::ALL {
            assert_eq!(ScenarioObjective::from_str(objective.as_str()), Some(objective));
        }
    }

    #[test]
    fn test_serde_matches_wire_value() {
        let json = serde_json::to_string(&PredefinedAttribute::Amenities).unwrap();
        assert_eq!(json, "\"Amenities (Cafeteria, Gym)\"");

        let industry: Industry = serde_json::from_str("\"Professional Services\"").unwrap();
        assert_eq!(industry, Industry::ProfessionalServices);

        let objective: ScenarioObjective =
            serde_json::from_str("\"innovation_and_creativity\"").unwrap();
        assert_eq!(objective.label(), "Innovation and Creativity");

        let status: ScenarioStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status.label(), "In Progress");
        assert_eq!(status.tone(), BadgeTone::Info);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert_eq!(PredefinedAttribute::from_str("Workspace Quality"), None);
        assert_eq!(Industry::from_str("technology"), None);
    }
}
