//! Savings goal model
//!
//! A named goal with a saved amount and a target. Progress is derived, never
//! stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{require_text, ValidationError};

/// Parse a whole-number amount, treating anything unparsable as zero
///
/// Surrounding whitespace is ignored. Malformed input is not an error.
pub fn parse_whole_amount(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Goal name
    pub name: String,

    /// Amount saved so far (may be negative; floored only for progress)
    pub saved: i64,

    /// Amount required to reach the goal
    pub target: i64,

    /// When the goal was created
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a goal from already-parsed values, without validation
    pub fn new(name: impl Into<String>, saved: i64, target: i64) -> Self {
        Self {
            name: name.into(),
            saved,
            target,
            created_at: Utc::now(),
        }
    }

    /// Validate raw form input and build a goal
    ///
    /// `saved_text` and `target_text` default to 0 when they do not parse.
    /// The name must be non-blank and the target strictly positive.
    pub fn from_input(
        name: &str,
        saved_text: &str,
        target_text: &str,
    ) -> Result<Self, ValidationError> {
        let saved = parse_whole_amount(saved_text);
        let target = parse_whole_amount(target_text);

        let name = require_text(name, "Name")?;
        if target <= 0 {
            return Err(ValidationError::NonPositiveTarget { target });
        }

        Ok(Self::new(name, saved, target))
    }

    /// Fraction of the target saved so far
    ///
    /// The numerator is floored at zero. There is no upper clamp, so an
    /// over-saved goal reports more than 1.0.
    pub fn progress(&self) -> f64 {
        if self.target <= 0 {
            return 0.0;
        }
        self.saved.max(0) as f64 / self.target as f64
    }

    /// Check whether the saved amount has reached the target
    pub fn is_reached(&self) -> bool {
        self.target > 0 && self.saved >= self.target
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.saved, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amount() {
        assert_eq!(parse_whole_amount("5000"), 5000);
        assert_eq!(parse_whole_amount(" 42 "), 42);
        assert_eq!(parse_whole_amount("-300"), -300);
        assert_eq!(parse_whole_amount("abc"), 0);
        assert_eq!(parse_whole_amount(""), 0);
        assert_eq!(parse_whole_amount("12.5"), 0);
    }

    #[test]
    fn test_from_input() {
        let goal = SavingsGoal::from_input(" Car ", "abc", "50000").unwrap();
        assert_eq!(goal.name, "Car");
        assert_eq!(goal.saved, 0);
        assert_eq!(goal.target, 50000);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            SavingsGoal::from_input("  ", "10", "100"),
            Err(ValidationError::BlankField { field: "Name" })
        );
    }

    #[test]
    fn test_non_positive_target_rejected() {
        assert_eq!(
            SavingsGoal::from_input("Trip", "5000", "0"),
            Err(ValidationError::NonPositiveTarget { target: 0 })
        );
        assert_eq!(
            SavingsGoal::from_input("Trip", "5000", "-10"),
            Err(ValidationError::NonPositiveTarget { target: -10 })
        );
        assert_eq!(
            SavingsGoal::from_input("Trip", "5000", "lots"),
            Err(ValidationError::NonPositiveTarget { target: 0 })
        );
    }

    #[test]
    fn test_negative_saved_is_stored_unclamped() {
        let goal = SavingsGoal::from_input("Emergency", "-200", "1000").unwrap();
        assert_eq!(goal.saved, -200);
        assert_eq!(goal.progress(), 0.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(SavingsGoal::new("Half", 500, 1000).progress(), 0.5);
        assert_eq!(SavingsGoal::new("Phone", 20000, 10000).progress(), 2.0);
        assert_eq!(SavingsGoal::new("Broken", 500, 0).progress(), 0.0);
        assert_eq!(SavingsGoal::new("Broken", 500, -5).progress(), 0.0);
    }

    #[test]
    fn test_is_reached() {
        assert!(SavingsGoal::new("Done", 1000, 1000).is_reached());
        assert!(!SavingsGoal::new("Almost", 999, 1000).is_reached());
    }
}
