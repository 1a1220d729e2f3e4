//! staffctl-server: employee records over HTTP
//!
//! Validates incoming payloads, persists them to a SQLite store, and
//! maps store outcomes onto HTTP statuses and JSON bodies.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, Employee, EmployeeRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
