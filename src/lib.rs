//! Users API Library
//!
//! A small REST service exposing CRUD operations over a user resource. The
//! HTTP handlers are a thin facade over a pluggable [`store::UserStore`].

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
