//! Employee payload validation
//!
//! Incoming create/update bodies are deserialized into an
//! [`EmployeeDraft`] and promoted to a [`ValidEmployee`] only once
//! every field rule passes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::{FieldError, ValidationErrors};

/// Email shape: non-empty local part, `@`, non-empty domain, dot, tld.
/// No whitespace anywhere.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Hire date shape: `YYYY-MM-DD`. Digits and positions only; no
/// calendar check, so `2024-13-45` passes.
static HIRE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid hire date regex"));

/// Raw employee payload as received over the wire.
///
/// Every field is optional at this stage; a missing field and an empty
/// string fail validation the same way. Unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub hire_date: Option<String>,
}

/// Employee payload that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub hire_date: String,
}

impl EmployeeDraft {
    /// Validate all fields, collecting every failure.
    ///
    /// # Rules
    /// - `name`, `department`, `role`: present and non-blank after trim
    /// - `email`: matches `local@domain.tld` shape
    /// - `hire_date`: matches `YYYY-MM-DD` shape
    ///
    /// Errors come back in field declaration order regardless of which
    /// fields failed.
    pub fn validate(self) -> Result<ValidEmployee, ValidationErrors> {
        let mut errors = Vec::new();

        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            errors.push(FieldError::MissingName);
        }

        let email = self.email.unwrap_or_default();
        if !EMAIL_RE.is_match(&email) {
            errors.push(FieldError::InvalidEmail);
        }

        let department = self.department.unwrap_or_default();
        if department.trim().is_empty() {
            errors.push(FieldError::MissingDepartment);
        }

        let role = self.role.unwrap_or_default();
        if role.trim().is_empty() {
            errors.push(FieldError::MissingRole);
        }

        let hire_date = self.hire_date.unwrap_or_default();
        if !HIRE_DATE_RE.is_match(&hire_date) {
            errors.push(FieldError::InvalidHireDate);
        }

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(ValidEmployee {
            name,
            email,
            department,
            role,
            hire_date,
        })
    }
}
