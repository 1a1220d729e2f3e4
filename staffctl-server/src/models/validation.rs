//! Validation error types

use std::fmt;

/// A single field-level validation failure.
///
/// Each variant renders to the exact message clients see in the
/// `details` array of a 400 response, so the wording here is part of
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// `name` is missing or blank
    MissingName,

    /// `email` is missing, blank, or not shaped like `local@domain.tld`
    InvalidEmail,

    /// `department` is missing or blank
    MissingDepartment,

    /// `role` is missing or blank
    MissingRole,

    /// `hire_date` is missing, blank, or not shaped like `YYYY-MM-DD`
    InvalidHireDate,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Name is required"),
            Self::InvalidEmail => write!(f, "Valid email is required"),
            Self::MissingDepartment => write!(f, "Department is required"),
            Self::MissingRole => write!(f, "Role is required"),
            Self::InvalidHireDate => write!(f, "Valid hire date (YYYY-MM-DD) is required"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Every field failure found in one validation pass.
///
/// Validation never short-circuits: a payload with three bad fields
/// reports all three, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// Per-field messages, in field declaration order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::to_string).collect()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
