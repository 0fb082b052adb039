// ============================================================================
// WPS Infrastructure - PostgreSQL Scenario Repository
// File: crates/wps-infrastructure/src/database/postgres/scenario_repo_impl.rs
// Description: Scenario root plus the lob, space, rating and financial tables
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::info;

use wps_core::domain::{
    NewScenario, NewScenarioAttributeRating, NewScenarioFinancial, NewScenarioLob,
    NewScenarioSpace, Scenario, ScenarioAttributeRating, ScenarioFinancial, ScenarioLob,
    ScenarioObjective, ScenarioSpace, ScenarioStatus,
};
use wps_core::error::DomainError;
use wps_core::repositories::ScenarioRepository;
use wps_shared::EntityId;

use super::{db_error, decode};

const SCENARIO_COLUMNS: &str =
    "id, name, objective, status, description, company_id, created_at, updated_at";
const LOB_COLUMNS: &str = "id, scenario_id, lob_id, created_at";
const SPACE_COLUMNS: &str = "id, scenario_id, space_id, created_at";
const RATING_COLUMNS: &str =
    "id, scenario_id, attribute_id, lob_id, rating, created_at, updated_at";
const FINANCIAL_COLUMNS: &str = "id, scenario_id, space_id, monthly_cost, lease_term_months, \
                                 start_date, created_at, updated_at";

pub struct PgScenarioRepository {
    pool: PgPool,
}

impl PgScenarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct ScenarioRow {
    pub id: i64,
    pub name: String,
    pub objective: String,
    pub status: String,
    pub description: Option<String>,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ScenarioRow> for Scenario {
    type Error = DomainError;

    fn try_from(row: ScenarioRow) -> Result<Self, Self::Error> {
        Ok(Scenario {
            id: row.id,
            objective: decode(ScenarioObjective::from_str(&row.objective), "objective", &row.objective)?,
            status: decode(ScenarioStatus::from_str(&row.status), "status", &row.status)?,
            name: row.name,
            description: row.description,
            company_id: row.company_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ScenarioLobRow {
    pub id: i64,
    pub scenario_id: i64,
    pub lob_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ScenarioLobRow> for ScenarioLob {
    fn from(row: ScenarioLobRow) -> Self {
        ScenarioLob {
            id: row.id,
            scenario_id: row.scenario_id,
            lob_id: row.lob_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct ScenarioSpaceRow {
    pub id: i64,
    pub scenario_id: i64,
    pub space_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ScenarioSpaceRow> for ScenarioSpace {
    fn from(row: ScenarioSpaceRow) -> Self {
        ScenarioSpace {
            id: row.id,
            scenario_id: row.scenario_id,
            space_id: row.space_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct RatingRow {
    pub id: i64,
    pub scenario_id: i64,
    pub attribute_id: i64,
    pub lob_id: i64,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RatingRow> for ScenarioAttributeRating {
    fn from(row: RatingRow) -> Self {
        ScenarioAttributeRating {
            id: row.id,
            scenario_id: row.scenario_id,
            attribute_id: row.attribute_id,
            lob_id: row.lob_id,
            rating: row.rating,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct FinancialRow {
    pub id: i64,
    pub scenario_id: i64,
    pub space_id: i64,
    pub monthly_cost: Option<f64>,
    pub lease_term_months: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FinancialRow> for ScenarioFinancial {
    fn from(row: FinancialRow) -> Self {
        ScenarioFinancial {
            id: row.id,
            scenario_id: row.scenario_id,
            space_id: row.space_id,
            monthly_cost: row.monthly_cost,
            lease_term_months: row.lease_term_months,
            start_date: row.start_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgScenarioRepository {
    async fn children<R>(
        &self,
        table: &'static str,
        columns: &'static str,
        scenario_id: EntityId,
    ) -> Result<Vec<R>, DomainError>
    where
        R: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        sqlx::query_as(&format!(
            "SELECT {columns} FROM {table} WHERE scenario_id = $1 ORDER BY id"
        ))
        .bind(scenario_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("loading scenario children"))
    }
}

#[async_trait]
impl ScenarioRepository for PgScenarioRepository {
    async fn list(&self) -> Result<Vec<Scenario>, DomainError> {
        let rows: Vec<ScenarioRow> = sqlx::query_as(&format!(
            "SELECT {SCENARIO_COLUMNS} FROM scenarios ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing scenarios"))?;

        rows.into_iter().map(Scenario::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Scenario>, DomainError> {
        let row: Option<ScenarioRow> = sqlx::query_as(&format!(
            "SELECT {SCENARIO_COLUMNS} FROM scenarios WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding scenario"))?;

        row.map(Scenario::try_from).transpose()
    }

    async fn create(&self, scenario: &NewScenario) -> Result<Scenario, DomainError> {
        info!("Creating scenario: {}", scenario.name);

        let row: ScenarioRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO scenarios (name, objective, status, description, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SCENARIO_COLUMNS}
            "#
        ))
        .bind(&scenario.name)
        .bind(scenario.objective.as_str())
        .bind(scenario.status.as_str())
        .bind(&scenario.description)
        .bind(scenario.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating scenario"))?;

        row.try_into()
    }

    async fn insert_lobs(&self, rows: &[NewScenarioLob]) -> Result<Vec<ScenarioLob>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO scenario_lobs (scenario_id, lob_id) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.scenario_id).push_bind(row.lob_id);
        });
        builder.push(format!(" RETURNING {LOB_COLUMNS}"));

        let inserted: Vec<ScenarioLobRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("inserting scenario lines of business"))?;

        Ok(inserted.into_iter().map(Into::into).collect())
    }

    async fn insert_spaces(&self, rows: &[NewScenarioSpace]) -> Result<Vec<ScenarioSpace>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO scenario_spaces (scenario_id, space_id) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.scenario_id).push_bind(row.space_id);
        });
        builder.push(format!(" RETURNING {SPACE_COLUMNS}"));

        let inserted: Vec<ScenarioSpaceRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("inserting scenario spaces"))?;

        Ok(inserted.into_iter().map(Into::into).collect())
    }

    async fn insert_financials(
        &self,
        rows: &[NewScenarioFinancial],
    ) -> Result<Vec<ScenarioFinancial>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO scenario_financials \
             (scenario_id, space_id, monthly_cost, lease_term_months, start_date) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.scenario_id)
                .push_bind(row.space_id)
                .push_bind(row.monthly_cost)
                .push_bind(row.lease_term_months)
                .push_bind(row.start_date);
        });
        builder.push(format!(" RETURNING {FINANCIAL_COLUMNS}"));

        let inserted: Vec<FinancialRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("inserting scenario financials"))?;

        Ok(inserted.into_iter().map(Into::into).collect())
    }

    async fn insert_attribute_ratings(
        &self,
        rows: &[NewScenarioAttributeRating],
    ) -> Result<Vec<ScenarioAttributeRating>, DomainError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO scenario_attribute_ratings (scenario_id, attribute_id, lob_id, rating) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.scenario_id)
                .push_bind(row.attribute_id)
                .push_bind(row.lob_id)
                .push_bind(row.rating);
        });
        builder.push(format!(" RETURNING {RATING_COLUMNS}"));

        let inserted: Vec<RatingRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("inserting scenario attribute ratings"))?;

        Ok(inserted.into_iter().map(Into::into).collect())
    }

    async fn lobs_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioLob>, DomainError> {
        let rows: Vec<ScenarioLobRow> = self.children("scenario_lobs", LOB_COLUMNS, scenario_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn spaces_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioSpace>, DomainError> {
        let rows: Vec<ScenarioSpaceRow> =
            self.children("scenario_spaces", SPACE_COLUMNS, scenario_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ratings_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioAttributeRating>, DomainError> {
        let rows: Vec<RatingRow> = self
            .children("scenario_attribute_ratings", RATING_COLUMNS, scenario_id)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn financials_for(&self, scenario_id: EntityId) -> Result<Vec<ScenarioFinancial>, DomainError> {
        let rows: Vec<FinancialRow> = self
            .children("scenario_financials", FINANCIAL_COLUMNS, scenario_id)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
