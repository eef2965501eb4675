//! Validation with detailed field-level errors

use std::fmt;

use serde::Serialize;

pub mod rules;

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation error accumulating field-level errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new, empty validation error
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError { field: field.into(), message: message.into() });
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Return `Ok(())` when no errors accumulated, otherwise `Err(self)`.
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "validation passed");
        }

        let summary = self
            .errors
            .iter()
            .map(|err| format!("{}: {}", err.field, err.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{summary}")
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
    }

    #[test]
    fn accumulated_errors_surface_in_display() {
        let mut err = ValidationError::new();
        err.add_field_error("startDate", "must not be after endDate");
        err.add_field_error("currentCoverage", "must be between 0 and 100");

        let rendered = err.to_string();
        assert!(rendered.contains("startDate"));
        assert!(rendered.contains("currentCoverage"));
        assert!(err.into_result().is_err());
    }
}
