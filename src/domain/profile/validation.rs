//! Step validators - may the user move past a step?
//!
//! Each step's answers implement [`StepValidator`]. An absent sub-structure
//! never validates. Dispatch from a [`Step`] goes through one exhaustive
//! match in [`PartialProfile::is_step_valid`].

use crate::domain::foundation::Step;

use super::{
    DietaryHabits, HealthData, MotivationsAndBarriers, Objective, PartialProfile, PhysicalActivities,
    PhysicalData,
};

/// A step's answers, judged on their own.
pub trait StepValidator {
    /// The step these answers belong to.
    const STEP: Step;

    /// Returns true if the answers are complete enough to move on.
    fn is_valid(&self) -> bool;
}

/// Validates optional answers; absent answers are never valid.
pub fn validate<T: StepValidator>(answers: Option<&T>) -> bool {
    answers.is_some_and(T::is_valid)
}

impl StepValidator for Objective {
    const STEP: Step = Step::Objective;

    /// Any chosen goal is enough.
    fn is_valid(&self) -> bool {
        true
    }
}

impl StepValidator for PhysicalData {
    const STEP: Step = Step::PhysicalData;

    /// Presence only; waist circumference is optional.
    fn is_valid(&self) -> bool {
        self.sex.is_some()
            && self.age.is_some()
            && self.height_cm.is_some()
            && self.weight_kg.is_some()
            && self.activity_level.is_some()
    }
}

impl StepValidator for HealthData {
    const STEP: Step = Step::HealthData;

    /// The selection exists as soon as the user touched it, even if the
    /// last toggle emptied it again.
    fn is_valid(&self) -> bool {
        true
    }
}

impl StepValidator for DietaryHabits {
    const STEP: Step = Step::DietaryHabits;

    fn is_valid(&self) -> bool {
        self.answered_count() == Self::QUESTION_COUNT
    }
}

impl StepValidator for MotivationsAndBarriers {
    const STEP: Step = Step::MotivationsAndBarriers;

    fn is_valid(&self) -> bool {
        !self.motivations.is_empty() && !self.barriers.is_empty()
    }
}

impl StepValidator for PhysicalActivities {
    const STEP: Step = Step::PhysicalActivities;

    /// The "other" qualifier is never required.
    fn is_valid(&self) -> bool {
        !self.activities.is_empty()
    }
}

impl PartialProfile {
    /// Runs the validator of `step` against the current answers.
    ///
    /// Results has no forward validator and always reports false.
    pub fn is_step_valid(&self, step: Step) -> bool {
        match step {
            Step::Objective => validate(self.objective.as_ref()),
            Step::PhysicalData => validate(self.physical.as_ref()),
            Step::HealthData => validate(self.health.as_ref()),
            Step::DietaryHabits => validate(self.dietary.as_ref()),
            Step::MotivationsAndBarriers => validate(self.motivations.as_ref()),
            Step::PhysicalActivities => validate(self.activities.as_ref()),
            Step::Results => false,
        }
    }

    /// Returns the first input step whose validator fails.
    pub fn first_invalid_step(&self) -> Option<Step> {
        Step::input_steps()
            .iter()
            .copied()
            .find(|step| !self.is_step_valid(*step))
    }

    /// Returns true if every input step validates.
    pub fn is_complete(&self) -> bool {
        self.first_invalid_step().is_none()
    }
}
