//! NavigationState value object - where the wizard stands.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Step};

/// A snapshot of the wizard's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_step: Step,
    /// Steps the user has moved past at least once. Never shrinks.
    pub completed_steps: BTreeSet<Step>,
    pub can_advance: bool,
}

impl NavigationState {
    /// State of a freshly started wizard.
    pub fn initial() -> Self {
        Self {
            current_step: Step::first(),
            completed_steps: BTreeSet::new(),
            can_advance: false,
        }
    }

    /// Position-based progress: Objective is 14%, Results is 100%.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.current_step.position(), Step::COUNT)
    }

    /// Returns true if `step` has been moved past.
    pub fn is_completed(&self, step: Step) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Returns true once the wizard sits on Results.
    pub fn is_on_results(&self) -> bool {
        self.current_step == Step::Results
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::initial()
    }
}
