//! Step enum representing the 7 stages of the profiling wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// The 7 wizard stages, from the objective question to the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Objective,
    PhysicalData,
    HealthData,
    DietaryHabits,
    MotivationsAndBarriers,
    PhysicalActivities,
    Results,
}

impl Step {
    /// Number of stages in the wizard.
    pub const COUNT: usize = 7;

    /// Returns all steps in canonical order.
    pub fn all() -> &'static [Step] {
        &[
            Step::Objective,
            Step::PhysicalData,
            Step::HealthData,
            Step::DietaryHabits,
            Step::MotivationsAndBarriers,
            Step::PhysicalActivities,
            Step::Results,
        ]
    }

    /// Returns the six steps that collect answers (everything but Results).
    pub fn input_steps() -> &'static [Step] {
        &Self::all()[..Self::COUNT - 1]
    }

    /// The first step of every session.
    pub fn first() -> Step {
        Step::Objective
    }

    /// Returns the next step, if any.
    ///
    /// Spelled out per variant so that reordering the enum cannot silently
    /// change the flow.
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Objective => Some(Step::PhysicalData),
            Step::PhysicalData => Some(Step::HealthData),
            Step::HealthData => Some(Step::DietaryHabits),
            Step::DietaryHabits => Some(Step::MotivationsAndBarriers),
            Step::MotivationsAndBarriers => Some(Step::PhysicalActivities),
            Step::PhysicalActivities => Some(Step::Results),
            Step::Results => None,
        }
    }

    /// Returns the previous step, if any.
    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Objective => None,
            Step::PhysicalData => Some(Step::Objective),
            Step::HealthData => Some(Step::PhysicalData),
            Step::DietaryHabits => Some(Step::HealthData),
            Step::MotivationsAndBarriers => Some(Step::DietaryHabits),
            Step::PhysicalActivities => Some(Step::MotivationsAndBarriers),
            Step::Results => Some(Step::PhysicalActivities),
        }
    }

    /// Returns the 1-based position of this step (Objective = 1, Results = 7).
    pub fn position(&self) -> usize {
        match self {
            Step::Objective => 1,
            Step::PhysicalData => 2,
            Step::HealthData => 3,
            Step::DietaryHabits => 4,
            Step::MotivationsAndBarriers => 5,
            Step::PhysicalActivities => 6,
            Step::Results => 7,
        }
    }

    /// Returns true for the steps that collect answers.
    pub fn is_input(&self) -> bool {
        !matches!(self, Step::Results)
    }

    /// Returns true if advancing from this step finalizes the profile.
    pub fn is_last_input(&self) -> bool {
        matches!(self, Step::PhysicalActivities)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Step::Objective => "Objective",
            Step::PhysicalData => "Physical Data",
            Step::HealthData => "Health Data",
            Step::DietaryHabits => "Dietary Habits",
            Step::MotivationsAndBarriers => "Motivations & Barriers",
            Step::PhysicalActivities => "Physical Activities",
            Step::Results => "Results",
        }
    }
}

impl StateMachine for Step {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next().as_ref() == Some(target) || self.previous().as_ref() == Some(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().chain(self.previous()).collect()
    }

    /// Results accepts no forward move, even though retreating from it is allowed.
    fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
