//! Profile module - the user's questionnaire answers.
//!
//! # Module Organization
//!
//! - `answers` - Closed answer sets for every step
//! - `partial` - `PartialProfile`, filled in gradually while the wizard runs
//! - `complete` - Fully-answered profile with classification and identifier
//! - `validation` - Per-step validators
//! - `aggregator` - Edits (`ProfileUpdate`) and the partial-to-complete conversion

mod aggregator;
mod answers;
mod complete;
mod partial;
mod validation;

pub use aggregator::{parse_age, parse_measurement, DietaryAnswer, NumericField, ProfileUpdate};
pub use answers::{
    Activity, ActivityLevel, Barrier, CookingMethod, HealthCondition, MealCount, Motivation,
    Objective, ProcessedFood, Sex, SnackingFrequency, SweetenedDrinks, VegetablePortions,
    WaterIntake,
};
pub use complete::{
    ActivitiesProfile, CompleteProfile, DietaryProfile, HealthProfile, MotivationsProfile,
    PhysicalProfile, ValidatedProfile,
};
pub use partial::{
    DietaryHabits, HealthData, MotivationsAndBarriers, PartialProfile, PhysicalActivities,
    PhysicalData,
};
pub use validation::{validate, StepValidator};
