//! PostgreSQL line of business repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use wps_core::domain::{LineOfBusiness, LobType, NewLineOfBusiness};
use wps_core::error::DomainError;
use wps_core::repositories::LineOfBusinessRepository;
use wps_shared::EntityId;

use super::{db_error, decode};

const COLUMNS: &str = "id, name, type, headcount, company_id, created_at, updated_at";

pub struct PgLineOfBusinessRepository {
    pool: PgPool,
}

impl PgLineOfBusinessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LineOfBusinessRow {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub lob_type: String,
    pub headcount: Option<i32>,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<LineOfBusinessRow> for LineOfBusiness {
    type Error = DomainError;

    fn try_from(row: LineOfBusinessRow) -> Result<Self, Self::Error> {
        Ok(LineOfBusiness {
            id: row.id,
            lob_type: decode(LobType::from_str(&row.lob_type), "type", &row.lob_type)?,
            name: row.name,
            headcount: row.headcount,
            company_id: row.company_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl LineOfBusinessRepository for PgLineOfBusinessRepository {
    async fn list(&self) -> Result<Vec<LineOfBusiness>, DomainError> {
        let rows: Vec<LineOfBusinessRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM lines_of_business ORDER BY name"))
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("listing lines of business"))?;

        rows.into_iter().map(LineOfBusiness::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<LineOfBusiness>, DomainError> {
        let row: Option<LineOfBusinessRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM lines_of_business WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding line of business"))?;

        row.map(LineOfBusiness::try_from).transpose()
    }

    async fn create(&self, lob: &NewLineOfBusiness) -> Result<LineOfBusiness, DomainError> {
        info!("Creating line of business: {}", lob.name);

        let row: LineOfBusinessRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO lines_of_business (name, type, headcount, company_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&lob.name)
        .bind(lob.lob_type.as_str())
        .bind(lob.headcount)
        .bind(lob.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating line of business"))?;

        row.try_into()
    }

    async fn update(&self, lob: &LineOfBusiness) -> Result<LineOfBusiness, DomainError> {
        let row: Option<LineOfBusinessRow> = sqlx::query_as(&format!(
            r#"
            UPDATE lines_of_business
            SET name = $2, type = $3, headcount = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(lob.id)
        .bind(&lob.name)
        .bind(lob.lob_type.as_str())
        .bind(lob.headcount)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating line of business"))?;

        row.ok_or_else(|| DomainError::not_found("Line of business", lob.id))?
            .try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        info!("Deleting line of business {}", id);

        sqlx::query("DELETE FROM lines_of_business WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting line of business"))?;

        Ok(())
    }
}
