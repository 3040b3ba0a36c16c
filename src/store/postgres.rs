//! PostgreSQL-backed user store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{validate_payload, StoreError, StoreResult, UserStore};
use crate::db;
use crate::models::{User, UserPayload};

#[derive(Clone)]
pub struct PgUserStore {
    db_pool: PgPool,
}

impl PgUserStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return StoreError::Conflict("email is already registered".to_string());
            }
        }
        StoreError::Database(err.to_string())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn save(&self, payload: UserPayload) -> StoreResult<User> {
        validate_payload(&payload)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, email, phone_number)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(&payload.phone_number)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn update(&self, id: i64, payload: UserPayload) -> StoreResult<User> {
        validate_payload(&payload)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET full_name = $1, email = $2, phone_number = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(&payload.phone_number)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        tracing::debug!(user_id = id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        db::check_health(&self.db_pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
