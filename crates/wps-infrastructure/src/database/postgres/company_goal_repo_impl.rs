//! PostgreSQL company goal repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use wps_core::domain::{CompanyGoal, NewCompanyGoal, PredefinedGoal};
use wps_core::error::DomainError;
use wps_core::repositories::CompanyGoalRepository;
use wps_shared::EntityId;

use super::{db_error, decode};

const COLUMNS: &str = "id, name, importance, is_primary, company_id, created_at, updated_at";

pub struct PgCompanyGoalRepository {
    pool: PgPool,
}

impl PgCompanyGoalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyGoalRow {
    pub id: i64,
    pub name: String,
    pub importance: i32,
    pub is_primary: bool,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyGoalRow> for CompanyGoal {
    type Error = DomainError;

    fn try_from(row: CompanyGoalRow) -> Result<Self, Self::Error> {
        Ok(CompanyGoal {
            id: row.id,
            name: decode(PredefinedGoal::from_str(&row.name), "goal name", &row.name)?,
            importance: row.importance,
            is_primary: row.is_primary,
            company_id: row.company_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CompanyGoalRepository for PgCompanyGoalRepository {
    async fn list(&self) -> Result<Vec<CompanyGoal>, DomainError> {
        let rows: Vec<CompanyGoalRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM company_goals ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("listing company goals"))?;

        rows.into_iter().map(CompanyGoal::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<CompanyGoal>, DomainError> {
        let row: Option<CompanyGoalRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM company_goals WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding company goal"))?;

        row.map(CompanyGoal::try_from).transpose()
    }

    async fn create(&self, goal: &NewCompanyGoal) -> Result<CompanyGoal, DomainError> {
        info!("Adding company goal {} (primary: {})", goal.name.as_str(), goal.is_primary);

        let row: CompanyGoalRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO company_goals (name, importance, is_primary, company_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(goal.name.as_str())
        .bind(goal.importance)
        .bind(goal.is_primary)
        .bind(goal.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating company goal"))?;

        row.try_into()
    }

    async fn update_importance(&self, id: EntityId, importance: i32) -> Result<CompanyGoal, DomainError> {
        let row: Option<CompanyGoalRow> = sqlx::query_as(&format!(
            "UPDATE company_goals SET importance = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(importance)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating goal importance"))?;

        row.ok_or_else(|| DomainError::not_found("Company goal", id))?.try_into()
    }

    async fn update_primary(&self, id: EntityId, is_primary: bool) -> Result<CompanyGoal, DomainError> {
        let row: Option<CompanyGoalRow> = sqlx::query_as(&format!(
            "UPDATE company_goals SET is_primary = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(is_primary)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("moving company goal"))?;

        row.ok_or_else(|| DomainError::not_found("Company goal", id))?.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        info!("Removing company goal {}", id);

        sqlx::query("DELETE FROM company_goals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting company goal"))?;

        Ok(())
    }
}
