//! Repository implementations for database access
//!
//! Patterns:
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Row counts from UPDATE/DELETE decide found/not-found

pub mod employees;

pub use employees::{DbError, Employee, EmployeeRepo};
