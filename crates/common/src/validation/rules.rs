//! Composable validation rules
//!
//! Each rule appends to a [`ValidationError`] instead of failing fast, so a
//! caller reports every problem in one pass.

use chrono::NaiveDate;

use super::ValidationError;

/// The field must contain at least one non-whitespace character.
pub fn required(field: &str, value: &str, errors: &mut ValidationError) {
    if value.trim().is_empty() {
        errors.add_field_error(field, "is required");
    }
}

/// Percentage fields must fall within `[0, 100]`.
pub fn percentage(field: &str, value: i64, errors: &mut ValidationError) {
    if !(0..=100).contains(&value) {
        errors.add_field_error(field, "must be between 0 and 100");
    }
}

/// Start must not come after end.
pub fn date_order(field: &str, start: NaiveDate, end: NaiveDate, errors: &mut ValidationError) {
    if start > end {
        errors.add_field_error(field, "start date must not be after end date");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date literal")
    }

    #[test]
    fn required_rejects_blank_values() {
        let mut errors = ValidationError::new();
        required("name", "   ", &mut errors);
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn percentage_bounds_are_inclusive() {
        let mut errors = ValidationError::new();
        percentage("currentCoverage", 0, &mut errors);
        percentage("improvedCoverage", 100, &mut errors);
        assert!(errors.is_empty());

        percentage("currentCoverage", 101, &mut errors);
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn date_order_flags_inverted_ranges() {
        let mut errors = ValidationError::new();
        date_order("dates", date("2024-03-10"), date("2024-03-01"), &mut errors);
        assert_eq!(errors.errors.len(), 1);

        let mut ok = ValidationError::new();
        date_order("dates", date("2024-03-01"), date("2024-03-01"), &mut ok);
        assert!(ok.is_empty());
    }
}
