// ============================================================================
// WPS Infrastructure - PostgreSQL Workspace Attribute Repository
// File: crates/wps-infrastructure/src/database/postgres/workspace_attribute_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use wps_core::domain::{NewWorkspaceAttribute, PredefinedAttribute, WorkspaceAttribute};
use wps_core::error::DomainError;
use wps_core::repositories::WorkspaceAttributeRepository;
use wps_shared::EntityId;

use super::{db_error, decode};

const COLUMNS: &str =
    "id, name, importance, is_primary, order_index, company_id, created_at, updated_at";

pub struct PgWorkspaceAttributeRepository {
    pool: PgPool,
}

impl PgWorkspaceAttributeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WorkspaceAttributeRow {
    pub id: i64,
    pub name: String,
    pub importance: i32,
    pub is_primary: bool,
    pub order_index: i32,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<WorkspaceAttributeRow> for WorkspaceAttribute {
    type Error = DomainError;

    fn try_from(row: WorkspaceAttributeRow) -> Result<Self, Self::Error> {
        Ok(WorkspaceAttribute {
            id: row.id,
            name: decode(PredefinedAttribute::from_str(&row.name), "attribute name", &row.name)?,
            importance: row.importance,
            is_primary: row.is_primary,
            order_index: row.order_index,
            company_id: row.company_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl WorkspaceAttributeRepository for PgWorkspaceAttributeRepository {
    async fn list(&self) -> Result<Vec<WorkspaceAttribute>, DomainError> {
        let rows: Vec<WorkspaceAttributeRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM workspace_attributes ORDER BY order_index, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing workspace attributes"))?;

        rows.into_iter().map(WorkspaceAttribute::try_from).collect()
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<WorkspaceAttribute>, DomainError> {
        let row: Option<WorkspaceAttributeRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM workspace_attributes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding workspace attribute"))?;

        row.map(WorkspaceAttribute::try_from).transpose()
    }

    async fn create(&self, attribute: &NewWorkspaceAttribute) -> Result<WorkspaceAttribute, DomainError> {
        info!(
            "Adding workspace attribute {} (primary: {})",
            attribute.name.as_str(),
            attribute.is_primary
        );

        let row: WorkspaceAttributeRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO workspace_attributes (name, importance, is_primary, order_index, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(attribute.name.as_str())
        .bind(attribute.importance)
        .bind(attribute.is_primary)
        .bind(attribute.order_index)
        .bind(attribute.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating workspace attribute"))?;

        row.try_into()
    }

    async fn update_importance(&self, id: EntityId, importance: i32) -> Result<WorkspaceAttribute, DomainError> {
        let row: Option<WorkspaceAttributeRow> = sqlx::query_as(&format!(
            r#"
            UPDATE workspace_attributes SET importance = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(importance)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating attribute importance"))?;

        row.ok_or_else(|| DomainError::not_found("Workspace attribute", id))?
            .try_into()
    }

    async fn update_primary(&self, id: EntityId, is_primary: bool) -> Result<WorkspaceAttribute, DomainError> {
        let row: Option<WorkspaceAttributeRow> = sqlx::query_as(&format!(
            r#"
            UPDATE workspace_attributes SET is_primary = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(is_primary)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("moving workspace attribute"))?;

        row.ok_or_else(|| DomainError::not_found("Workspace attribute", id))?
            .try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        info!("Deleting workspace attribute {}", id);

        sqlx::query("DELETE FROM workspace_attributes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting workspace attribute"))?;

        Ok(())
    }
}
