//! Sort state and value comparison

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use trackboard_domain::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The single active sort of a table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub column: String,
    pub direction: SortDirection,
}

/// Compare two field values under the given direction.
///
/// Equal values compare equal. Text pairs use case-insensitive ordering with
/// a case-sensitive tiebreak. An absent value sorts after every present value
/// regardless of direction; two absent values are equal. Everything else
/// falls back to numeric relational comparison.
pub fn compare_values(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a, b) {
        (FieldValue::Text(left), FieldValue::Text(right)) => {
            direction.apply(locale_cmp(left, right))
        }
        // Absent-last is unconditional: direction never flips it.
        (FieldValue::Absent, _) => Ordering::Greater,
        (_, FieldValue::Absent) => Ordering::Less,
        (FieldValue::Number(left), FieldValue::Number(right)) => {
            direction.apply(left.partial_cmp(right).unwrap_or(Ordering::Equal))
        }
        (left, right) => direction.apply(locale_cmp(&left.display(), &right.display())),
    }
}

fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn equal_values_compare_equal() {
        assert_eq!(
            compare_values(&text("open"), &text("open"), SortDirection::Descending),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&FieldValue::Absent, &FieldValue::Absent, SortDirection::Ascending),
            Ordering::Equal
        );
    }

    #[test]
    fn text_comparison_ignores_case_first() {
        assert_eq!(
            compare_values(&text("apple"), &text("Banana"), SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&text("apple"), &text("Banana"), SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn absent_sorts_last_in_both_directions() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                compare_values(&FieldValue::Absent, &text("anything"), direction),
                Ordering::Greater
            );
            assert_eq!(
                compare_values(&text("anything"), &FieldValue::Absent, direction),
                Ordering::Less
            );
        }
    }

    #[test]
    fn numbers_compare_relationally() {
        let low = FieldValue::Number(20.0);
        let high = FieldValue::Number(85.0);
        assert_eq!(compare_values(&low, &high, SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare_values(&low, &high, SortDirection::Descending), Ordering::Greater);
    }
}
