//! In-process user store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{validate_payload, StoreError, StoreResult, UserStore};
use crate::models::{User, UserPayload};

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// Store keeping users in memory. Identifiers start at 1 and are never
/// reused, even after a delete.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_email_free(
    users: &BTreeMap<i64, User>,
    email: &str,
    except: Option<i64>,
) -> StoreResult<()> {
    // Unicode lowercasing, same folding as the LOWER(email) index in postgres
    let wanted = email.to_lowercase();
    let taken = users
        .values()
        .any(|u| Some(u.id) != except && u.email.to_lowercase() == wanted);
    if taken {
        return Err(StoreError::Conflict(format!(
            "email {} is already registered",
            email
        )));
    }
    Ok(())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn save(&self, payload: UserPayload) -> StoreResult<User> {
        validate_payload(&payload)?;

        let mut inner = self.inner.write().await;
        ensure_email_free(&inner.users, &payload.email, None)?;

        inner.last_id += 1;
        let user = payload.into_user(inner.last_id, Utc::now());
        inner.users.insert(user.id, user.clone());

        tracing::debug!(user_id = user.id, "Stored new user in memory");
        Ok(user)
    }

    async fn update(&self, id: i64, payload: UserPayload) -> StoreResult<User> {
        validate_payload(&payload)?;

        let mut inner = self.inner.write().await;
        if !inner.users.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        ensure_email_free(&inner.users, &payload.email, Some(id))?;

        let user = inner.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        user.apply(payload, Utc::now());

        tracing::debug!(user_id = id, "Updated user in memory");
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.users.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(user_id = id, "Removed user from memory");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
