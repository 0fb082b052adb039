//! PostgreSQL space repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use wps_core::domain::{NewSpace, Space};
use wps_core::error::DomainError;
use wps_core::repositories::SpaceRepository;
use wps_shared::EntityId;

use super::db_error;

const COLUMNS: &str =
    "id, name, location, square_feet, monthly_cost, company_id, created_at, updated_at";

pub struct PgSpaceRepository {
    pool: PgPool,
}

impl PgSpaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SpaceRow {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub square_feet: i32,
    pub monthly_cost: Option<f64>,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SpaceRow> for Space {
    fn from(row: SpaceRow) -> Self {
        Space {
            id: row.id,
            name: row.name,
            location: row.location,
            square_feet: row.square_feet,
            monthly_cost: row.monthly_cost,
            company_id: row.company_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SpaceRepository for PgSpaceRepository {
    async fn list(&self) -> Result<Vec<Space>, DomainError> {
        let rows: Vec<SpaceRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM spaces ORDER BY name"))
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("listing spaces"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Space>, DomainError> {
        let row: Option<SpaceRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM spaces WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error("finding space"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, space: &NewSpace) -> Result<Space, DomainError> {
        info!("Creating space: {} ({})", space.name, space.location);

        let row: SpaceRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO spaces (name, location, square_feet, monthly_cost, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&space.name)
        .bind(&space.location)
        .bind(space.square_feet)
        .bind(space.monthly_cost)
        .bind(space.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating space"))?;

        Ok(row.into())
    }

    async fn update(&self, space: &Space) -> Result<Space, DomainError> {
        let row: Option<SpaceRow> = sqlx::query_as(&format!(
            r#"
            UPDATE spaces
            SET name = $2, location = $3, square_feet = $4, monthly_cost = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(space.id)
        .bind(&space.name)
        .bind(&space.location)
        .bind(space.square_feet)
        .bind(space.monthly_cost)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating space"))?;

        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found("Space", space.id))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        info!("Deleting space {}", id);

        sqlx::query("DELETE FROM spaces WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting space"))?;

        Ok(())
    }
}
