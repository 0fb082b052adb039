//! Repository trait implementations over [`MemoryStore`].

use async_trait::async_trait;
use tracing::info;
use wps_core::domain::{
    CompanyGoal, CompanyProfile, Industry, IndustryWeighting, LineOfBusiness, NewCompanyGoal,
    NewCompanyProfile, NewLineOfBusiness, NewScenario, NewScenarioAttributeRating,
    NewScenarioFinancial, NewScenarioLob, NewScenarioSpace, NewSpace, NewWorkspaceAttribute,
    Scenario, ScenarioAttributeRating, ScenarioFinancial, ScenarioLob, ScenarioSpace, Space,
    WorkspaceAttribute,
};
use wps_core::error::DomainError;
use wps_core::repositories::{
    CompanyGoalRepository, CompanyProfileRepository, IndustryWeightingRepository,
    LineOfBusinessRepository, ScenarioRepository, SpaceRepository, WorkspaceAttributeRepository,
};
use wps_shared::EntityId;

use super::{MemoryStore, Table};

fn row_mut<'a, T>(
    rows: &'a mut [T],
    id: EntityId,
    id_of: impl Fn(&T) -> EntityId,
    entity: &'static str,
) -> Result<&'a mut T, DomainError> {
    rows.iter_mut()
        .find(|row| id_of(row) == id)
        .ok_or_else(|| DomainError::not_found(entity, id))
}

#[async_trait]
impl CompanyProfileRepository for MemoryStore {
    async fn find(&self) -> Result<Option<CompanyProfile>, DomainError> {
        self.read(Table::CompanyProfiles, |t| t.profiles.first().cloned())
    }

    async fn create(&self, profile: &NewCompanyProfile) -> Result<CompanyProfile, DomainError> {
        self.write(Table::CompanyProfiles, |t, now| {
            let row = CompanyProfile {
                id: t.next_id(),
                name: profile.name.clone(),
                industry: profile.industry,
                company_size: profile.company_size,
                number_of_sites: profile.number_of_sites,
                created_at: now,
                updated_at: now,
            };
            info!("Company profile {} stored in memory", row.id);
            t.profiles.push(row.clone());
            Ok(row)
        })
    }

    async fn update(&self, profile: &CompanyProfile) -> Result<CompanyProfile, DomainError> {
        self.write(Table::CompanyProfiles, |t, now| {
            let row = t
                .profiles
                .iter_mut()
                .find(|p| p.id == profile.id)
                .ok_or(DomainError::ProfileNotFound)?;
            *row = CompanyProfile {
                created_at: row.created_at,
                updated_at: now,
                ..profile.clone()
            };
            Ok(row.clone())
        })
    }
}

#[async_trait]
impl WorkspaceAttributeRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<WorkspaceAttribute>, DomainError> {
        self.read(Table::WorkspaceAttributes, |t| {
            let mut rows = t.attributes.clone();
            rows.sort_by_key(|a| (a.order_index, a.id));
            rows
        })
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<WorkspaceAttribute>, DomainError> {
        self.read(Table::WorkspaceAttributes, |t| {
            t.attributes.iter().find(|a| a.id == id).cloned()
        })
    }

    async fn create(&self, attribute: &NewWorkspaceAttribute) -> Result<WorkspaceAttribute, DomainError> {
        self.write(Table::WorkspaceAttributes, |t, now| {
            let row = WorkspaceAttribute {
                id: t.next_id(),
                name: attribute.name,
                importance: attribute.importance,
                is_primary: attribute.is_primary,
                order_index: attribute.order_index,
                company_id: attribute.company_id,
                created_at: now,
                updated_at: now,
            };
            t.attributes.push(row.clone());
            Ok(row)
        })
    }

    async fn update_importance(&self, id: EntityId, importance: i32) -> Result<WorkspaceAttribute, DomainError> {
        self.write(Table::WorkspaceAttributes, |t, now| {
            let row = row_mut(&mut t.attributes, id, |a| a.id, "Workspace attribute")?;
            row.importance = importance;
            row.updated_at = now;
            Ok(row.clone())
        })
    }

    async fn update_primary(&self, id: EntityId, is_primary: bool) -> Result<WorkspaceAttribute, DomainError> {
        self.write(Table::WorkspaceAttributes, |t, now| {
            let row = row_mut(&mut t.attributes, id, |a| a.id, "Workspace attribute")?;
            row.is_primary = is_primary;
            row.updated_at = now;
            Ok(row.clone())
        })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.write(Table::WorkspaceAttributes, |t, _| {
            t.attributes.retain(|a| a.id != id);
            t.ratings.retain(|r| r.attribute_id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl CompanyGoalRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<CompanyGoal>, DomainError> {
        self.read(Table::CompanyGoals, |t| t.goals.clone())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<CompanyGoal>, DomainError> {
        self.read(Table::CompanyGoals, |t| t.goals.iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, goal: &NewCompanyGoal) -> Result<CompanyGoal, DomainError> {
        self.write(Table::CompanyGoals, |t, now| {
            let row = CompanyGoal {
                id: t.next_id(),
                name: goal.name,
                importance: goal.importance,
                is_primary: goal.is_primary,
                company_id: goal.company_id,
                created_at: now,
                updated_at: now,
            };
            t.goals.push(row.clone());
            Ok(row)
        })
    }

    async fn update_importance(&self, id: EntityId, importance: i32) -> Result<CompanyGoal, DomainError> {
        self.write(Table::CompanyGoals, |t, now| {
            let row = row_mut(&mut t.goals, id, |g| g.id, "Company goal")?;
            row.importance = importance;
            row.updated_at = now;
            Ok(row.clone())
        })
    }

    async fn update_primary(&self, id: EntityId, is_primary: bool) -> Result<CompanyGoal, DomainError> {
        self.write(Table::CompanyGoals, |t, now| {
            let row = row_mut(&mut t.goals, id, |g| g.id, "Company goal")?;
            row.is_primary = is_primary;
            row.updated_at = now;
            Ok(row.clone())
        })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.write(Table::CompanyGoals, |t, _| {
            t.goals.retain(|g| g.id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl IndustryWeightingRepository for MemoryStore {
    async fn list_for_industry(&self, industry: Industry) -> Result<Vec<IndustryWeighting>, DomainError> {
        self.read(Table::IndustryWeightings, |t| {
            t.weightings
                .iter()
                .filter(|w| w.industry == industry)
                .cloned()
                .collect()
        })
    }
}

#[async_trait]
impl LineOfBusinessRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<LineOfBusiness>, DomainError> {
        self.read(Table::LinesOfBusiness, |t| {
            let mut rows = t.lobs.clone();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            rows
        })
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<LineOfBusiness>, DomainError> {
        self.read(Table::LinesOfBusiness, |t| t.lobs.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, lob: &NewLineOfBusiness) -> Result<LineOfBusiness, DomainError> {
        self.write(Table::LinesOfBusiness, |t, now| {
            let row = LineOfBusiness {
                id: t.next_id(),
                name: lob.name.clone(),
                lob_type: lob.lob_type,
                headcount: lob.headcount,
                company_id: lob.company_id,
                created_at: now,
                updated_at: now,
            };
            t.lobs.push(row.clone());
            Ok(row)
        })
    }

    async fn update(&self, lob: &LineOfBusiness) -> Result<LineOfBusiness, DomainError> {
        self.write(Table::LinesOfBusiness, |t, now| {
            let row = row_mut(&mut t.lobs, lob.id, |l| l.id, "Line of business")?;
            *row = LineOfBusiness {
                created_at: row.created_at,
                updated_at: now,
                ..lob.clone()
            };
            Ok(row.clone())
        })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.write(Table::LinesOfBusiness, |t, _| {
            t.lobs.retain(|l| l.id != id);
            t.scenario_lobs.retain(|l| l.lob_id != id);
            t.ratings.retain(|r| r.lob_id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl SpaceRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Space>, DomainError> {
        self.read(Table::Spaces, |t| {
            let mut rows = t.spaces.clone();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            rows
        })
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Space>, DomainError> {
        self.read(Table::Spaces, |t| t.spaces.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, space: &NewSpace) -> Result<Space, DomainError> {
        self.write(Table::Spaces, |t, now| {
            let row = Space {
                id: t.next_id(),
                name: space.name.clone(),
                location: space.location.clone(),
                square_feet: space.square_feet,
                monthly_cost: space.monthly_cost,
                company_id: space.company_id,
                created_at: now,
                updated_at: now,
            };
            t.spaces.push(row.clone());
            Ok(row)
        })
    }

    async fn update(&self, space: &Space) -> Result<Space, DomainError> {
        self.write(Table::Spaces, |t, now| {
            let row = row_mut(&mut t.spaces, space.id, |s| s.id, "Space")?;
            *row = Space {
                created_at: row.created_at,
                updated_at: now,
                ..space.clone()
            };
            Ok(row.clone())
        })
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.write(Table::Spaces, |t, _| {
            t.spaces.retain(|s| s.id != id);
            t.scenario_spaces.retain(|s| s.space_id != id);
            t.financials.retain(|f| f.space_id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl ScenarioRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Scenario>, DomainError> {
        self.read(Table::Scenarios, |t| {
            let mut rows = t.scenarios.clone();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            rows
        })
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Scenario>, DomainError> {
        self.read(Table::Scenarios, |t| t.scenarios.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, scenario: &NewScenario) -> Result<Scenario, DomainError> {
        self.write(Table::Scenarios, |t, now| {
            let row = Scenario {
                id: t.next_id(),
                name: scenario.name.clone(),
                objective: scenario.objective,
                status: scenario.status,
                description: scenario.description.clone(),
                company_id: scenario.company_id,
                created_at: now,
                updated_at: now,
            };
            t.scenarios.push(row.clone());
            Ok(row)
        })
    }

    async fn insert_lobs(&self, rows: &[NewScenarioLob]) -> Result<Vec<ScenarioLob>, DomainError> {
        self.write(Table::ScenarioLobs, |t, now| {
            let inserted: Vec<ScenarioLob> = rows
                .iter()
                .map(|r| ScenarioLob {
                    id: t.next_id(),
                    scenario_id: r.scenario_id,
                    lob_id: r.lob_id,
                    created_at: now,
                })
                .collect();
            t.scenario_lobs.extend(inserted.iter().cloned());
            Ok(inserted)
        })
    }

    async fn insert_spaces(&self, rows: &[NewScenarioSpace]) -> Result<Vec<ScenarioSpace>, DomainError> {
        self.write(Table::ScenarioSpaces, |t, now| {
            let inserted: Vec<ScenarioSpace> = rows
                .iter()
                .map(|r| ScenarioSpace {
                    id: t.next_id(),
                    scenario_id: r.scenario_id,
                    space_id: r.space_id,
                    created_at: now,
                })
                .collect();
            t.scenario_spaces.extend(inserted.iter().cloned());
            Ok(inserted)
        })
    }

    async fn insert_financials(
        &self,
        rows: &[NewScenarioFinancial],
    ) -> Result<Vec<ScenarioFinancial>, DomainError> {
        self.write(Table::ScenarioFinancials, |t, now| {
            let inserted: Vec<ScenarioFinancial> = rows
                .iter()
                .map(|r| ScenarioFinancial {
                    id: t.next_id(),
                    scenario_id: r.scenario_id,
                    space_id: r.space_id,
                    monthly_cost: r.monthly_cost,
                    lease_term_months: r.lease_term_months,
                    start_date: r.start_date,
                    created_at: now,
                    updated_at: now,
                })
                .collect();
            t.financials.extend(inserted.iter().cloned());
            Ok(inserted)
        })
    }

    async fn insert_attribute_ratings(
        &self,
        rows: &[NewScenarioAttributeRating],
    ) -> Result<Vec<ScenarioAttributeRating>, DomainError> {
        self.write(Table::ScenarioAttributeRatings, |t, now| {
            let inserted: Vec<ScenarioAttributeRating> = rows
                .iter()
                .map(|r| ScenarioAttributeRating {
                    id: t.next_id(),
                    scenario_id: r.scenario_id,
                    attribute_id: r.attribute_id,
                    lob_id: r.lob_id,
                    rating: r.rating,
                    created_at: now,
                    updated_at: now,
                })
                .collect();
            t.ratings.extend(inserted.iter().cloned());
            Ok(inserted)
        })
    }

    async fn lobs_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioLob>, DomainError> {
        self.read(Table::ScenarioLobs, |t| {
            t.scenario_lobs
                .iter()
                .filter(|r| r.scenario_id == scenario_id)
                .cloned()
                .collect()
        })
    }

    async fn spaces_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioSpace>, DomainError> {
        self.read(Table::ScenarioSpaces, |t| {
            t.scenario_spaces
                .iter()
                .filter(|r| r.scenario_id == scenario_id)
                .cloned()
                .collect()
        })
    }

    async fn ratings_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioAttributeRating>, DomainError> {
        self.read(Table::ScenarioAttributeRatings, |t| {
            t.ratings
                .iter()
                .filter(|r| r.scenario_id == scenario_id)
                .cloned()
                .collect()
        })
    }

    async fn financials_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioFinancial>, DomainError> {
        self.read(Table::ScenarioFinancials, |t| {
            t.financials
                .iter()
                .filter(|r| r.scenario_id == scenario_id)
                .cloned()
                .collect()
        })
    }
}
