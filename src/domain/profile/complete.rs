//! Fully-answered profile types.
//!
//! Every field here is required. The only way the wizard produces these is
//! `PartialProfile::finalize`, so holding a `CompleteProfile` means every
//! input step validated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::classification::{ClassificationCode, ProfileIdentifier};
use crate::domain::metrics::{Bmi, BmiCategory, ConditionBucket};

use super::{
    Activity, ActivityLevel, Barrier, CookingMethod, HealthCondition, MealCount, Motivation,
    Objective, ProcessedFood, Sex, SnackingFrequency, SweetenedDrinks, VegetablePortions,
    WaterIntake,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: Bmi,
    pub bmi_category: BmiCategory,
    pub waist_cm: Option<f64>,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub conditions: BTreeSet<HealthCondition>,
    pub bucket: ConditionBucket,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryProfile {
    pub meal_count: MealCount,
    pub snacking: SnackingFrequency,
    pub sweetened_drinks: SweetenedDrinks,
    pub water_intake: WaterIntake,
    pub vegetable_portions: VegetablePortions,
    pub cooking_method: CookingMethod,
    pub processed_food: ProcessedFood,
}

/// Both sets are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationsProfile {
    pub motivations: BTreeSet<Motivation>,
    pub barriers: BTreeSet<Barrier>,
}

/// At least one activity is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitiesProfile {
    pub activities: BTreeSet<Activity>,
    pub other_activity: Option<String>,
}

/// Every step's answers, with derived metrics filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedProfile {
    pub objective: Objective,
    pub physical: PhysicalProfile,
    pub health: HealthProfile,
    pub dietary: DietaryProfile,
    pub motivations: MotivationsProfile,
    pub activities: ActivitiesProfile,
}

/// The finished profile handed to whoever consumes the wizard's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteProfile {
    #[serde(flatten)]
    profile: ValidatedProfile,
    classification: ClassificationCode,
    identifier: ProfileIdentifier,
}

impl CompleteProfile {
    pub(super) fn new(
        profile: ValidatedProfile,
        classification: ClassificationCode,
        identifier: ProfileIdentifier,
    ) -> Self {
        Self {
            profile,
            classification,
            identifier,
        }
    }

    /// Returns the validated answers.
    pub fn profile(&self) -> &ValidatedProfile {
        &self.profile
    }

    /// Returns the composite classification code (e.g. `PERTE_SED_S`).
    pub fn classification(&self) -> &ClassificationCode {
        &self.classification
    }

    /// Returns the profile identifier.
    pub fn identifier(&self) -> &ProfileIdentifier {
        &self.identifier
    }

    /// Consumes the profile, returning its parts.
    pub fn into_parts(self) -> (ValidatedProfile, ClassificationCode, ProfileIdentifier) {
        (self.profile, self.classification, self.identifier)
    }
}
