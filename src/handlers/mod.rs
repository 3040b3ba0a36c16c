//! API handlers for the users service

pub mod health;
pub mod user;

pub use health::{health_check, root};
pub use user::{create_user, delete_user, get_user, list_users, update_user};
