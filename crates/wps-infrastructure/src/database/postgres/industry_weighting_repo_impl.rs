//! PostgreSQL industry weighting lookup

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use wps_core::domain::{Industry, IndustryWeighting};
use wps_core::error::DomainError;
use wps_core::repositories::IndustryWeightingRepository;

use super::db_error;

pub struct PgIndustryWeightingRepository {
    pool: PgPool,
}

impl PgIndustryWeightingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IndustryWeightingRow {
    pub id: i64,
    pub attribute_name: String,
    pub default_weight: Option<i32>,
}

#[async_trait]
impl IndustryWeightingRepository for PgIndustryWeightingRepository {
    async fn list_for_industry(&self, industry: Industry) -> Result<Vec<IndustryWeighting>, DomainError> {
        let rows: Vec<IndustryWeightingRow> = sqlx::query_as(
            r#"
            SELECT id, attribute_name, default_weight
            FROM industry_weightings
            WHERE industry = $1
            ORDER BY id
            "#,
        )
        .bind(industry.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing industry weightings"))?;

        Ok(rows
            .into_iter()
            .map(|row| IndustryWeighting {
                id: row.id,
                industry,
                attribute_name: row.attribute_name,
                default_weight: row.default_weight,
            })
            .collect())
    }
}
