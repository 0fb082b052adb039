// ============================================================================
// WPS Infrastructure - In-Memory Backend
// File: crates/wps-infrastructure/src/database/memory/mod.rs
// Description: Process-local tables used for local runs and integration tests
// ============================================================================
//! `MemoryStore` keeps every table in one `parking_lot::RwLock` with a single
//! monotonic id sequence. Reads return rows in the same order as the
//! PostgreSQL adapter.
//!
//! A table can be marked failing with [`MemoryStore::inject_failure`]; every
//! call touching it then returns `DomainError::DatabaseError` until
//! [`MemoryStore::clear_failure`] is called.

mod repositories;
mod seed;

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use tracing::error;
use wps_core::domain::{
    CompanyGoal, CompanyProfile, IndustryWeighting, LineOfBusiness, Scenario,
    ScenarioAttributeRating, ScenarioFinancial, ScenarioLob, ScenarioSpace, Space,
    WorkspaceAttribute,
};
use wps_core::error::DomainError;
use wps_core::repositories::Repositories;
use wps_shared::EntityId;

pub use seed::DEFAULT_WEIGHTINGS;

/// Tables of the dashboard schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    CompanyProfiles,
    WorkspaceAttributes,
    CompanyGoals,
    IndustryWeightings,
    LinesOfBusiness,
    Spaces,
    Scenarios,
    ScenarioLobs,
    ScenarioSpaces,
    ScenarioAttributeRatings,
    ScenarioFinancials,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::CompanyProfiles => "company_profiles",
            Table::WorkspaceAttributes => "workspace_attributes",
            Table::CompanyGoals => "company_goals",
            Table::IndustryWeightings => "industry_weightings",
            Table::LinesOfBusiness => "lines_of_business",
            Table::Spaces => "spaces",
            Table::Scenarios => "scenarios",
            Table::ScenarioLobs => "scenario_lobs",
            Table::ScenarioSpaces => "scenario_spaces",
            Table::ScenarioAttributeRatings => "scenario_attribute_ratings",
            Table::ScenarioFinancials => "scenario_financials",
        }
    }
}

#[derive(Default)]
pub(crate) struct Tables {
    next_id: EntityId,
    pub profiles: Vec<CompanyProfile>,
    pub attributes: Vec<WorkspaceAttribute>,
    pub goals: Vec<CompanyGoal>,
    pub weightings: Vec<IndustryWeighting>,
    pub lobs: Vec<LineOfBusiness>,
    pub spaces: Vec<Space>,
    pub scenarios: Vec<Scenario>,
    pub scenario_lobs: Vec<ScenarioLob>,
    pub scenario_spaces: Vec<ScenarioSpace>,
    pub ratings: Vec<ScenarioAttributeRating>,
    pub financials: Vec<ScenarioFinancial>,
}

impl Tables {
    pub fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
struct Inner {
    tables: RwLock<Tables>,
    failing: Mutex<HashSet<Table>>,
    calls: AtomicUsize,
}

/// Cloneable handle; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the default industry weightings.
    pub fn with_default_weightings() -> Self {
        let store = Self::new();
        {
            let mut tables = store.inner.tables.write();
            for (industry, attribute, weight) in DEFAULT_WEIGHTINGS {
                let id = tables.next_id();
                tables.weightings.push(IndustryWeighting {
                    id,
                    industry: *industry,
                    attribute_name: attribute.as_str().to_string(),
                    default_weight: Some(*weight),
                });
            }
        }
        store
    }

    /// Adds a weighting row, as a data load would.
    pub fn insert_weighting(
        &self,
        industry: wps_core::domain::Industry,
        attribute_name: &str,
        default_weight: Option<i32>,
    ) -> IndustryWeighting {
        let mut tables = self.inner.tables.write();
        let row = IndustryWeighting {
            id: tables.next_id(),
            industry,
            attribute_name: attribute_name.to_string(),
            default_weight,
        };
        tables.weightings.push(row.clone());
        row
    }

    /// Repository handles backed by this store.
    pub fn repositories(&self) -> Repositories {
        Repositories {
            profiles: Arc::new(self.clone()),
            attributes: Arc::new(self.clone()),
            goals: Arc::new(self.clone()),
            weightings: Arc::new(self.clone()),
            lobs: Arc::new(self.clone()),
            spaces: Arc::new(self.clone()),
            scenarios: Arc::new(self.clone()),
        }
    }

    pub fn inject_failure(&self, table: Table) {
        self.inner.failing.lock().insert(table);
    }

    pub fn clear_failure(&self, table: Table) {
        self.inner.failing.lock().remove(&table);
    }

    /// Number of repository calls served so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Row count of `table`.
    pub fn row_count(&self, table: Table) -> usize {
        let tables = self.inner.tables.read();
        match table {
            Table::CompanyProfiles => tables.profiles.len(),
            Table::WorkspaceAttributes => tables.attributes.len(),
            Table::CompanyGoals => tables.goals.len(),
            Table::IndustryWeightings => tables.weightings.len(),
            Table::LinesOfBusiness => tables.lobs.len(),
            Table::Spaces => tables.spaces.len(),
            Table::Scenarios => tables.scenarios.len(),
            Table::ScenarioLobs => tables.scenario_lobs.len(),
            Table::ScenarioSpaces => tables.scenario_spaces.len(),
            Table::ScenarioAttributeRatings => tables.ratings.len(),
            Table::ScenarioFinancials => tables.financials.len(),
        }
    }

    /// Counts the call and fails it if `table` has an injected failure.
    fn enter(&self, table: Table) -> Result<(), DomainError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if self.inner.failing.lock().contains(&table) {
            error!("Injected failure on table {}", table.as_str());
            return Err(DomainError::DatabaseError(format!(
                "{} is unavailable",
                table.as_str()
            )));
        }
        Ok(())
    }

    fn read<R>(&self, table: Table, f: impl FnOnce(&Tables) -> R) -> Result<R, DomainError> {
        self.enter(table)?;
        Ok(f(&self.inner.tables.read()))
    }

    fn write<R>(
        &self,
        table: Table,
        f: impl FnOnce(&mut Tables, DateTime<Utc>) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        self.enter(table)?;
        f(&mut self.inner.tables.write(), Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weightings_are_seeded() {
        let store = MemoryStore::with_default_weightings();
        assert_eq!(store.row_count(Table::IndustryWeightings), DEFAULT_WEIGHTINGS.len());
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn test_injected_failure_is_scoped_to_table() {
        let store = MemoryStore::new();
        store.inject_failure(Table::Spaces);

        assert!(store.enter(Table::Spaces).is_err());
        assert!(store.enter(Table::Scenarios).is_ok());

        store.clear_failure(Table::Spaces);
        assert!(store.enter(Table::Spaces).is_ok());
        assert_eq!(store.call_count(), 3);
    }
}
