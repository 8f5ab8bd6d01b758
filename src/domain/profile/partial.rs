//! PartialProfile - the answers accumulated while the wizard is running.
//!
//! Every step owns one optional sub-structure. A sub-structure appears the
//! first time one of its answers is edited; its fields fill in gradually.
//! Fields are only written by the aggregator so the derived values (BMI,
//! category, condition bucket) stay consistent with the raw answers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::metrics::{Bmi, BmiCategory, ConditionBucket};

use super::{
    Activity, ActivityLevel, Barrier, CookingMethod, HealthCondition, MealCount, Motivation,
    Objective, ProcessedFood, Sex, SnackingFrequency, SweetenedDrinks, VegetablePortions,
    WaterIntake,
};

/// Physical data answers plus the derived BMI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalData {
    pub(super) sex: Option<Sex>,
    pub(super) age: Option<u32>,
    pub(super) height_cm: Option<f64>,
    pub(super) weight_kg: Option<f64>,
    pub(super) bmi: Option<Bmi>,
    pub(super) bmi_category: Option<BmiCategory>,
    pub(super) waist_cm: Option<f64>,
    pub(super) activity_level: Option<ActivityLevel>,
}

impl PhysicalData {
    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    /// Age in years.
    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Present only while both height and weight are present.
    pub fn bmi(&self) -> Option<Bmi> {
        self.bmi
    }

    /// Present only while both height and weight are present.
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi_category
    }

    pub fn waist_cm(&self) -> Option<f64> {
        self.waist_cm
    }

    pub fn activity_level(&self) -> Option<ActivityLevel> {
        self.activity_level
    }

    /// Recomputes BMI and category together, or clears both.
    pub(super) fn refresh_bmi(&mut self) {
        match (self.height_cm, self.weight_kg) {
            (Some(height), Some(weight)) => {
                let bmi = Bmi::from_measurements(height, weight);
                self.bmi = Some(bmi);
                self.bmi_category = Some(bmi.category());
            }
            _ => {
                self.bmi = None;
                self.bmi_category = None;
            }
        }
    }
}

/// Selected health conditions and their bucketed count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    pub(super) conditions: BTreeSet<HealthCondition>,
    pub(super) bucket: ConditionBucket,
}

impl HealthData {
    pub fn conditions(&self) -> &BTreeSet<HealthCondition> {
        &self.conditions
    }

    pub fn bucket(&self) -> ConditionBucket {
        self.bucket
    }

    /// Returns true if "none" is the current answer.
    pub fn has_none_selected(&self) -> bool {
        self.conditions.contains(&HealthCondition::NoCondition)
    }

    /// Selects or deselects a condition, keeping "none" exclusive.
    pub(super) fn toggle(&mut self, condition: HealthCondition) {
        if condition.is_sentinel() {
            let was_selected = self.has_none_selected();
            self.conditions.clear();
            if !was_selected {
                self.conditions.insert(HealthCondition::NoCondition);
            }
        } else if !self.conditions.remove(&condition) {
            self.conditions.remove(&HealthCondition::NoCondition);
            self.conditions.insert(condition);
        }
        self.refresh_bucket();
    }

    pub(super) fn refresh_bucket(&mut self) {
        self.bucket = ConditionBucket::from_conditions(&self.conditions);
    }
}

/// The 7 dietary-habit answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryHabits {
    pub(super) meal_count: Option<MealCount>,
    pub(super) snacking: Option<SnackingFrequency>,
    pub(super) sweetened_drinks: Option<SweetenedDrinks>,
    pub(super) water_intake: Option<WaterIntake>,
    pub(super) vegetable_portions: Option<VegetablePortions>,
    pub(super) cooking_method: Option<CookingMethod>,
    pub(super) processed_food: Option<ProcessedFood>,
}

impl DietaryHabits {
    /// Number of questions on this step.
    pub const QUESTION_COUNT: usize = 7;

    pub fn meal_count(&self) -> Option<MealCount> {
        self.meal_count
    }

    pub fn snacking(&self) -> Option<SnackingFrequency> {
        self.snacking
    }

    pub fn sweetened_drinks(&self) -> Option<SweetenedDrinks> {
        self.sweetened_drinks
    }

    pub fn water_intake(&self) -> Option<WaterIntake> {
        self.water_intake
    }

    pub fn vegetable_portions(&self) -> Option<VegetablePortions> {
        self.vegetable_portions
    }

    pub fn cooking_method(&self) -> Option<CookingMethod> {
        self.cooking_method
    }

    pub fn processed_food(&self) -> Option<ProcessedFood> {
        self.processed_food
    }

    /// Number of questions answered so far.
    pub fn answered_count(&self) -> usize {
        [
            self.meal_count.is_some(),
            self.snacking.is_some(),
            self.sweetened_drinks.is_some(),
            self.water_intake.is_some(),
            self.vegetable_portions.is_some(),
            self.cooking_method.is_some(),
            self.processed_food.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count()
    }

    /// Share of the step's questions answered.
    pub fn answered_percentage(&self) -> Percentage {
        Percentage::from_ratio(self.answered_count(), Self::QUESTION_COUNT)
    }
}

/// What drives the user and what holds them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationsAndBarriers {
    pub(super) motivations: BTreeSet<Motivation>,
    pub(super) barriers: BTreeSet<Barrier>,
}

impl MotivationsAndBarriers {
    pub fn motivations(&self) -> &BTreeSet<Motivation> {
        &self.motivations
    }

    pub fn barriers(&self) -> &BTreeSet<Barrier> {
        &self.barriers
    }
}

/// Selected activities and the qualifier for "other".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalActivities {
    pub(super) activities: BTreeSet<Activity>,
    pub(super) other_activity: Option<String>,
}

impl PhysicalActivities {
    pub fn activities(&self) -> &BTreeSet<Activity> {
        &self.activities
    }

    /// Free text describing "other"; only ever set while `Other` is selected.
    pub fn other_activity(&self) -> Option<&str> {
        self.other_activity.as_deref()
    }

    pub(super) fn toggle(&mut self, activity: Activity) {
        if self.activities.remove(&activity) {
            if activity == Activity::Other {
                self.other_activity = None;
            }
        } else {
            self.activities.insert(activity);
        }
    }

    /// Stores the qualifier if "other" is selected. Returns false when ignored.
    pub(super) fn set_other_activity(&mut self, text: Option<String>) -> bool {
        if !self.activities.contains(&Activity::Other) {
            return false;
        }
        self.other_activity = text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        true
    }
}

/// The accumulating record of every answer given so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialProfile {
    pub(super) objective: Option<Objective>,
    pub(super) physical: Option<PhysicalData>,
    pub(super) health: Option<HealthData>,
    pub(super) dietary: Option<DietaryHabits>,
    pub(super) motivations: Option<MotivationsAndBarriers>,
    pub(super) activities: Option<PhysicalActivities>,
}

impl PartialProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objective(&self) -> Option<Objective> {
        self.objective
    }

    pub fn physical(&self) -> Option<&PhysicalData> {
        self.physical.as_ref()
    }

    pub fn health(&self) -> Option<&HealthData> {
        self.health.as_ref()
    }

    pub fn dietary(&self) -> Option<&DietaryHabits> {
        self.dietary.as_ref()
    }

    pub fn motivations(&self) -> Option<&MotivationsAndBarriers> {
        self.motivations.as_ref()
    }

    pub fn activities(&self) -> Option<&PhysicalActivities> {
        self.activities.as_ref()
    }

    /// Returns true if no answer has been given yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
