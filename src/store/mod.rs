//! Persistence collaborators for the user resource
//!
//! The HTTP layer only ever talks to [`UserStore`]. Validation, uniqueness and
//! existence checks all live behind this trait.

use async_trait::async_trait;
use thiserror::Error;
use validator::Validate;

use crate::models::{User, UserPayload};

mod memory;
mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// Failures a store can signal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} does not exist")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Database(String),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        StoreError::Validation(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by id
    async fn list_all(&self) -> StoreResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Persists a new user and assigns its identifier
    async fn save(&self, payload: UserPayload) -> StoreResult<User>;

    /// Replaces the profile fields of an existing user.
    /// Fails with [`StoreError::NotFound`] when `id` is unknown.
    async fn update(&self, id: i64, payload: UserPayload) -> StoreResult<User>;

    /// Fails with [`StoreError::NotFound`] when `id` is unknown.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Liveness probe for health checks
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Short backend name reported by the health endpoint
    fn backend_name(&self) -> &'static str;
}

/// Shared payload checks run by every store before a write
fn validate_payload(payload: &UserPayload) -> StoreResult<()> {
    payload.validate()?;
    Ok(())
}
