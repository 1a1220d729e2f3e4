//! Domain models with validation at construction
//!
//! All user input is validated before it reaches the store.
//! Invalid input returns ValidationErrors, not panic.

pub mod validation;
pub mod employee;

pub use validation::{FieldError, ValidationErrors};
pub use employee::{EmployeeDraft, ValidEmployee};
