//! `PostgreSQL` implementation of [`ButtonRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use buttons_core::{
    ActorId, Button, ButtonId, ButtonParts, ButtonRepository, ButtonStatus, ButtonType,
    RepositoryError,
};

const SELECT_COLUMNS: &str = "SELECT id, name, description, type AS button_type, status, \
     created_at, created_by, updated_at, updated_by, deleted_at \
     FROM buttons.button";

const RETURNING_COLUMNS: &str = "RETURNING id, name, description, type AS button_type, status, \
     created_at, created_by, updated_at, updated_by, deleted_at";

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct ButtonRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    button_type: String,
    status: String,
    created_at: DateTime<Utc>,
    created_by: Uuid,
    updated_at: DateTime<Utc>,
    updated_by: Uuid,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ButtonRow> for Button {
    type Error = RepositoryError;

    fn try_from(row: ButtonRow) -> Result<Self, Self::Error> {
        let button_type: ButtonType = row
            .button_type
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("{e}")))?;
        let status: ButtonStatus = row
            .status
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("{e}")))?;

        Self::from_parts(ButtonParts {
            id: Some(ButtonId::new(row.id)),
            name: row.name,
            description: row.description,
            button_type,
            status,
            created_at: row.created_at,
            created_by: ActorId::new(row.created_by),
            updated_at: row.updated_at,
            updated_by: ActorId::new(row.updated_by),
            deleted_at: row.deleted_at,
        })
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid button {}: {e}", row.id)))
    }
}

fn rows_into_buttons(rows: Vec<ButtonRow>) -> Result<Vec<Button>, RepositoryError> {
    rows.into_iter().map(Button::try_from).collect()
}

fn backend(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Backend(e.to_string())
}

// =============================================================================
// Repository
// =============================================================================

/// Buttons stored in the `buttons.button` table.
///
/// Name uniqueness is enforced by the `button_name_key` index; a violation
/// surfaces as [`RepositoryError::Conflict`].
#[derive(Debug, Clone)]
pub struct PgButtonRepository {
    pool: PgPool,
}

impl PgButtonRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ButtonRepository for PgButtonRepository {
    async fn find_all(&self) -> Result<Vec<Button>, RepositoryError> {
        let rows = sqlx::query_as::<_, ButtonRow>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        rows_into_buttons(rows)
    }

    async fn find_by_id(&self, id: ButtonId) -> Result<Option<Button>, RepositoryError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");
        sqlx::query_as::<_, ButtonRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?
            .map(Button::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Button>, RepositoryError> {
        let sql = format!("{SELECT_COLUMNS} WHERE name = $1");
        sqlx::query_as::<_, ButtonRow>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?
            .map(Button::try_from)
            .transpose()
    }

    async fn find_by_active_status(&self) -> Result<Vec<Button>, RepositoryError> {
        let sql = format!("{SELECT_COLUMNS} WHERE status = 'ACTIVE' AND deleted_at IS NULL");
        let rows = sqlx::query_as::<_, ButtonRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        rows_into_buttons(rows)
    }

    async fn save(&self, button: Button) -> Result<Button, RepositoryError> {
        let parts = button.into_parts();
        let id = parts.id.unwrap_or_else(ButtonId::random);

        let sql = format!(
            "INSERT INTO buttons.button \
                 (id, name, description, type, status, \
                  created_at, created_by, updated_at, updated_by, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 type = EXCLUDED.type, \
                 status = EXCLUDED.status, \
                 updated_at = EXCLUDED.updated_at, \
                 updated_by = EXCLUDED.updated_by, \
                 deleted_at = EXCLUDED.deleted_at \
             {RETURNING_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ButtonRow>(&sql)
            .bind(id.as_uuid())
            .bind(&parts.name)
            .bind(parts.description.as_deref())
            .bind(parts.button_type.as_str())
            .bind(parts.status.as_str())
            .bind(parts.created_at)
            .bind(parts.created_by.as_uuid())
            .bind(parts.updated_at)
            .bind(parts.updated_by.as_uuid())
            .bind(parts.deleted_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict(format!(
                        "button name '{}' already exists",
                        parts.name
                    ));
                }
                backend(e)
            })?;

        row.try_into()
    }

    async fn delete_by_id(&self, id: ButtonId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM buttons.button WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: ButtonId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM buttons.button WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(backend)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM buttons.button WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)
    }
}
