//! Profile aggregator - merges edits into the partial profile and finalizes it.
//!
//! The editing layer sends one [`ProfileUpdate`] per user interaction. The
//! aggregator writes it into the matching sub-structure and keeps derived
//! values in step with the raw answers. [`PartialProfile::finalize`] is the
//! single conversion point from partial to complete answers.

use serde::{Deserialize, Serialize};

use crate::domain::classification::{classify, generate_identifier};
use crate::domain::foundation::{DomainError, Step};

use super::{
    Activity, ActivityLevel, ActivitiesProfile, Barrier, CompleteProfile, CookingMethod,
    DietaryHabits, DietaryProfile, HealthCondition, HealthData, HealthProfile, MealCount,
    Motivation, MotivationsAndBarriers, MotivationsProfile, Objective, PartialProfile,
    PhysicalActivities, PhysicalData, PhysicalProfile, ProcessedFood, Sex, SnackingFrequency,
    SweetenedDrinks, ValidatedProfile, VegetablePortions, WaterIntake,
};

/// Numeric fields of the physical-data step that accept free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Age,
    HeightCm,
    WeightKg,
    WaistCm,
}

/// One answer of the dietary-habits step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "question", content = "answer", rename_all = "snake_case")]
pub enum DietaryAnswer {
    MealCount(MealCount),
    Snacking(SnackingFrequency),
    SweetenedDrinks(SweetenedDrinks),
    WaterIntake(WaterIntake),
    VegetablePortions(VegetablePortions),
    CookingMethod(CookingMethod),
    ProcessedFood(ProcessedFood),
}

/// A single edit coming from the editing layer.
///
/// Multi-select answers are toggles: sending an already-selected value
/// deselects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdate {
    Objective(Objective),
    Sex(Sex),
    Age(Option<u32>),
    HeightCm(Option<f64>),
    WeightKg(Option<f64>),
    WaistCm(Option<f64>),
    /// Raw text typed into a numeric field. Unusable text clears the field.
    NumericText { field: NumericField, raw: String },
    ActivityLevel(ActivityLevel),
    ToggleHealthCondition(HealthCondition),
    Dietary(DietaryAnswer),
    ToggleMotivation(Motivation),
    ToggleBarrier(Barrier),
    ToggleActivity(Activity),
    /// Qualifier for the "other" activity; ignored unless "other" is selected.
    OtherActivity(Option<String>),
}

impl ProfileUpdate {
    /// Returns the step whose answers this edit touches.
    pub fn step(&self) -> Step {
        match self {
            ProfileUpdate::Objective(_) => Step::Objective,
            ProfileUpdate::Sex(_)
            | ProfileUpdate::Age(_)
            | ProfileUpdate::HeightCm(_)
            | ProfileUpdate::WeightKg(_)
            | ProfileUpdate::WaistCm(_)
            | ProfileUpdate::NumericText { .. }
            | ProfileUpdate::ActivityLevel(_) => Step::PhysicalData,
            ProfileUpdate::ToggleHealthCondition(_) => Step::HealthData,
            ProfileUpdate::Dietary(_) => Step::DietaryHabits,
            ProfileUpdate::ToggleMotivation(_) | ProfileUpdate::ToggleBarrier(_) => {
                Step::MotivationsAndBarriers
            }
            ProfileUpdate::ToggleActivity(_) | ProfileUpdate::OtherActivity(_) => {
                Step::PhysicalActivities
            }
        }
    }
}

/// Parses a free-text measurement.
///
/// Returns `None` for anything that is not a finite, strictly positive number.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Parses a free-text age in whole years; decimals are truncated.
pub fn parse_age(raw: &str) -> Option<u32> {
    parse_measurement(raw)
        .map(|value| value.trunc())
        .filter(|years| *years >= 1.0 && *years <= f64::from(u32::MAX))
        .map(|years| years as u32)
}

impl PartialProfile {
    /// Merges one edit into the profile.
    ///
    /// Returns false when the edit was ignored (an "other" qualifier while
    /// "other" is not selected).
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        match update {
            ProfileUpdate::Objective(objective) => {
                self.objective = Some(objective);
            }
            ProfileUpdate::Sex(sex) => {
                self.physical_mut().sex = Some(sex);
            }
            ProfileUpdate::Age(age) => {
                self.physical_mut().age = age;
            }
            ProfileUpdate::HeightCm(height) => {
                let physical = self.physical_mut();
                physical.height_cm = height;
                physical.refresh_bmi();
            }
            ProfileUpdate::WeightKg(weight) => {
                let physical = self.physical_mut();
                physical.weight_kg = weight;
                physical.refresh_bmi();
            }
            ProfileUpdate::WaistCm(waist) => {
                self.physical_mut().waist_cm = waist;
            }
            ProfileUpdate::NumericText { field, raw } => {
                let physical = self.physical_mut();
                match field {
                    NumericField::Age => physical.age = parse_age(&raw),
                    NumericField::HeightCm => physical.height_cm = parse_measurement(&raw),
                    NumericField::WeightKg => physical.weight_kg = parse_measurement(&raw),
                    NumericField::WaistCm => physical.waist_cm = parse_measurement(&raw),
                }
                physical.refresh_bmi();
            }
            ProfileUpdate::ActivityLevel(level) => {
                self.physical_mut().activity_level = Some(level);
            }
            ProfileUpdate::ToggleHealthCondition(condition) => {
                self.health
                    .get_or_insert_with(HealthData::default)
                    .toggle(condition);
            }
            ProfileUpdate::Dietary(answer) => {
                let dietary = self.dietary.get_or_insert_with(DietaryHabits::default);
                match answer {
                    DietaryAnswer::MealCount(v) => dietary.meal_count = Some(v),
                    DietaryAnswer::Snacking(v) => dietary.snacking = Some(v),
                    DietaryAnswer::SweetenedDrinks(v) => dietary.sweetened_drinks = Some(v),
                    DietaryAnswer::WaterIntake(v) => dietary.water_intake = Some(v),
                    DietaryAnswer::VegetablePortions(v) => dietary.vegetable_portions = Some(v),
                    DietaryAnswer::CookingMethod(v) => dietary.cooking_method = Some(v),
                    DietaryAnswer::ProcessedFood(v) => dietary.processed_food = Some(v),
                }
            }
            ProfileUpdate::ToggleMotivation(motivation) => {
                let answers = self.motivations_mut();
                if !answers.motivations.remove(&motivation) {
                    answers.motivations.insert(motivation);
                }
            }
            ProfileUpdate::ToggleBarrier(barrier) => {
                let answers = self.motivations_mut();
                if !answers.barriers.remove(&barrier) {
                    answers.barriers.insert(barrier);
                }
            }
            ProfileUpdate::ToggleActivity(activity) => {
                self.activities
                    .get_or_insert_with(PhysicalActivities::default)
                    .toggle(activity);
            }
            ProfileUpdate::OtherActivity(text) => {
                let applied = self
                    .activities
                    .as_mut()
                    .is_some_and(|activities| activities.set_other_activity(text));
                if !applied {
                    tracing::debug!("Ignoring other-activity text while 'other' is not selected");
                }
                return applied;
            }
        }
        true
    }

    /// Recomputes derived fields and converts the answers into a complete profile.
    ///
    /// Derived values written back to the partial record stay there, so the
    /// caller sees the same BMI and bucket as the complete profile.
    ///
    /// # Errors
    ///
    /// Returns `StepIncomplete` naming the first input step whose validator fails.
    pub fn finalize(&mut self) -> Result<CompleteProfile, DomainError> {
        if let Some(physical) = self.physical.as_mut() {
            physical.refresh_bmi();
        }
        if let Some(health) = self.health.as_mut() {
            health.refresh_bucket();
        }

        if let Some(step) = self.first_invalid_step() {
            return Err(DomainError::step_incomplete(
                step,
                format!("{} answers are incomplete", step),
            ));
        }

        let profile = self.to_validated()?;
        let classification = classify(&profile);
        let identifier = generate_identifier(&profile);

        tracing::debug!(
            classification = %classification,
            identifier = %identifier,
            "Profile finalized"
        );

        Ok(CompleteProfile::new(profile, classification, identifier))
    }

    fn to_validated(&self) -> Result<ValidatedProfile, DomainError> {
        let objective = self
            .objective
            .ok_or_else(|| missing(Step::Objective, "objective"))?;
        let physical = self
            .physical
            .as_ref()
            .ok_or_else(|| missing(Step::PhysicalData, "physical_data"))?;
        let health = self
            .health
            .as_ref()
            .ok_or_else(|| missing(Step::HealthData, "health_data"))?;
        let dietary = self
            .dietary
            .as_ref()
            .ok_or_else(|| missing(Step::DietaryHabits, "dietary_habits"))?;
        let motivations = self
            .motivations
            .as_ref()
            .ok_or_else(|| missing(Step::MotivationsAndBarriers, "motivations_and_barriers"))?;
        let activities = self
            .activities
            .as_ref()
            .ok_or_else(|| missing(Step::PhysicalActivities, "physical_activities"))?;

        Ok(ValidatedProfile {
            objective,
            physical: physical_profile(physical)?,
            health: HealthProfile {
                conditions: health.conditions.clone(),
                bucket: health.bucket,
            },
            dietary: dietary_profile(dietary)?,
            motivations: MotivationsProfile {
                motivations: motivations.motivations.clone(),
                barriers: motivations.barriers.clone(),
            },
            activities: ActivitiesProfile {
                activities: activities.activities.clone(),
                other_activity: activities.other_activity.clone(),
            },
        })
    }

    fn physical_mut(&mut self) -> &mut PhysicalData {
        self.physical.get_or_insert_with(PhysicalData::default)
    }

    fn motivations_mut(&mut self) -> &mut MotivationsAndBarriers {
        self.motivations
            .get_or_insert_with(MotivationsAndBarriers::default)
    }
}

fn physical_profile(data: &PhysicalData) -> Result<PhysicalProfile, DomainError> {
    let field = |name: &str| missing(Step::PhysicalData, name);
    Ok(PhysicalProfile {
        sex: data.sex.ok_or_else(|| field("sex"))?,
        age: data.age.ok_or_else(|| field("age"))?,
        height_cm: data.height_cm.ok_or_else(|| field("height_cm"))?,
        weight_kg: data.weight_kg.ok_or_else(|| field("weight_kg"))?,
        bmi: data.bmi.ok_or_else(|| field("bmi"))?,
        bmi_category: data.bmi_category.ok_or_else(|| field("bmi_category"))?,
        waist_cm: data.waist_cm,
        activity_level: data.activity_level.ok_or_else(|| field("activity_level"))?,
    })
}

fn dietary_profile(data: &DietaryHabits) -> Result<DietaryProfile, DomainError> {
    let field = |name: &str| missing(Step::DietaryHabits, name);
    Ok(DietaryProfile {
        meal_count: data.meal_count.ok_or_else(|| field("meal_count"))?,
        snacking: data.snacking.ok_or_else(|| field("snacking"))?,
        sweetened_drinks: data.sweetened_drinks.ok_or_else(|| field("sweetened_drinks"))?,
        water_intake: data.water_intake.ok_or_else(|| field("water_intake"))?,
        vegetable_portions: data
            .vegetable_portions
            .ok_or_else(|| field("vegetable_portions"))?,
        cooking_method: data.cooking_method.ok_or_else(|| field("cooking_method"))?,
        processed_food: data.processed_food.ok_or_else(|| field("processed_food"))?,
    })
}

fn missing(step: Step, field: &str) -> DomainError {
    DomainError::step_incomplete(step, format!("Missing answer '{}'", field))
        .with_detail("field", field)
}
