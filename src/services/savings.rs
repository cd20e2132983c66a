//! Savings tracker
//!
//! Insertion-ordered collection of savings goals with progress queries.

use tracing::{debug, info};

use crate::models::{SavingsGoal, ValidationError};

/// Ordered collection of savings goals
#[derive(Debug, Clone, Default)]
pub struct SavingsTracker {
    goals: Vec<SavingsGoal>,
}

impl SavingsTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a goal from raw form input
    ///
    /// `saved_text` and `target_text` fall back to 0 when they do not parse.
    /// Fails with `BlankField` for a blank name, then `NonPositiveTarget` when
    /// the target is not above zero.
    pub fn add(
        &mut self,
        name: &str,
        saved_text: &str,
        target_text: &str,
    ) -> Result<(), ValidationError> {
        let goal = SavingsGoal::from_input(name, saved_text, target_text).inspect_err(|e| {
            debug!(error = %e, "savings goal rejected");
        })?;

        info!(
            name = %goal.name,
            saved = goal.saved,
            target = goal.target,
            "savings goal added"
        );
        self.goals.push(goal);
        Ok(())
    }

    /// All goals in the order they were added
    pub fn list(&self) -> &[SavingsGoal] {
        &self.goals
    }

    /// Progress of a goal as a fraction of its target
    pub fn progress_of(&self, goal: &SavingsGoal) -> f64 {
        goal.progress()
    }

    /// Number of goals
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Check if there are no goals
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
