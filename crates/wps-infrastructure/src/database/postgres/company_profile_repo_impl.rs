// ============================================================================
// WPS Infrastructure - PostgreSQL Company Profile Repository
// File: crates/wps-infrastructure/src/database/postgres/company_profile_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use wps_core::domain::{CompanyProfile, Industry, NewCompanyProfile};
use wps_core::error::DomainError;
use wps_core::repositories::CompanyProfileRepository;

use super::{db_error, decode};

pub struct PgCompanyProfileRepository {
    pool: PgPool,
}

impl PgCompanyProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CompanyProfileRow {
    pub id: i64,
    pub name: String,
    pub industry: String,
    pub company_size: i32,
    pub number_of_sites: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CompanyProfileRow> for CompanyProfile {
    type Error = DomainError;

    fn try_from(row: CompanyProfileRow) -> Result<Self, Self::Error> {
        Ok(CompanyProfile {
            id: row.id,
            industry: decode(Industry::from_str(&row.industry), "industry", &row.industry)?,
            name: row.name,
            company_size: row.company_size,
            number_of_sites: row.number_of_sites,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CompanyProfileRepository for PgCompanyProfileRepository {
    async fn find(&self) -> Result<Option<CompanyProfile>, DomainError> {
        let row: Option<CompanyProfileRow> = sqlx::query_as(
            r#"
            SELECT id, name, industry, company_size, number_of_sites, created_at, updated_at
            FROM company_profiles
            ORDER BY id
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding company profile"))?;

        row.map(CompanyProfile::try_from).transpose()
    }

    async fn create(&self, profile: &NewCompanyProfile) -> Result<CompanyProfile, DomainError> {
        info!("Creating company profile: {}", profile.name);

        let row: CompanyProfileRow = sqlx::query_as(
            r#"
            INSERT INTO company_profiles (name, industry, company_size, number_of_sites)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, industry, company_size, number_of_sites, created_at, updated_at
            "#,
        )
        .bind(&profile.name)
        .bind(profile.industry.as_str())
        .bind(profile.company_size)
        .bind(profile.number_of_sites)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating company profile"))?;

        row.try_into()
    }

    async fn update(&self, profile: &CompanyProfile) -> Result<CompanyProfile, DomainError> {
        let row: Option<CompanyProfileRow> = sqlx::query_as(
            r#"
            UPDATE company_profiles
            SET name = $2, industry = $3, company_size = $4, number_of_sites = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, industry, company_size, number_of_sites, created_at, updated_at
            "#,
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(profile.industry.as_str())
        .bind(profile.company_size)
        .bind(profile.number_of_sites)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating company profile"))?;

        row.ok_or(DomainError::ProfileNotFound)?.try_into()
    }
}
