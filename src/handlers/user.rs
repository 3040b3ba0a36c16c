//! User-related API handlers
//!
//! Each handler makes exactly one store call and translates the outcome into
//! an HTTP response. Store failures pass through [`ApiError`] unchanged.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{User, UserPayload};
use crate::store::UserStore;

/// GET /users - List all users
pub async fn list_users(State(store): State<Arc<dyn UserStore>>) -> ApiResult<Json<Vec<User>>> {
    let users = store.list_all().await?;
    Ok(Json(users))
}

/// GET /users/:id - Get a user by ID, 404 with no body when absent
pub async fn get_user(
    State(store): State<Arc<dyn UserStore>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let Path(id) = id?;

    match store.find_by_id(id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST /users - Create a new user
pub async fn create_user(
    State(store): State<Arc<dyn UserStore>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(payload) = payload?;

    let user = store.save(payload).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(Json(user))
}

/// PUT /users/:id - Replace a user's profile fields
pub async fn update_user(
    State(store): State<Arc<dyn UserStore>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let user = store.update(id, payload).await?;
    tracing::info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// DELETE /users/:id - Delete a user
pub async fn delete_user(
    State(store): State<Arc<dyn UserStore>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;

    store.delete(id).await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
