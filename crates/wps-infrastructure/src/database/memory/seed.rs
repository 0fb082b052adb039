//! Default industry weightings. Mirrors `migrations/0002_seed_industry_weightings.sql`.

use wps_core::domain::{Industry, PredefinedAttribute};

pub const DEFAULT_WEIGHTINGS: &[(Industry, PredefinedAttribute, i32)] = &[
    (Industry::Technology, PredefinedAttribute::TechnologyInfrastructure, 25),
    (Industry::Technology, PredefinedAttribute::Flexibility, 20),
    (Industry::Technology, PredefinedAttribute::QuietSpaces, 15),
    (Industry::Finance, PredefinedAttribute::Security, 25),
    (Industry::Finance, PredefinedAttribute::ExecutiveImpressiveness, 20),
    (Industry::Finance, PredefinedAttribute::Privacy, 15),
    (Industry::Healthcare, PredefinedAttribute::Safety, 25),
    (Industry::Healthcare, PredefinedAttribute::EmployeeWellness, 20),
    (Industry::Retail, PredefinedAttribute::BrandImage, 25),
    (Industry::Retail, PredefinedAttribute::LocationConvenience, 20),
    (Industry::Manufacturing, PredefinedAttribute::Safety, 30),
    (Industry::Manufacturing, PredefinedAttribute::CostEfficiency, 20),
    (Industry::ProfessionalServices, PredefinedAttribute::Collaboration, 25),
    (Industry::ProfessionalServices, PredefinedAttribute::ExecutiveImpressiveness, 20),
    (Industry::Education, PredefinedAttribute::Daylight, 20),
    (Industry::Education, PredefinedAttribute::Collaboration, 20),
    (Industry::Government, PredefinedAttribute::Security, 30),
    (Industry::Government, PredefinedAttribute::CostEfficiency, 20),
];
