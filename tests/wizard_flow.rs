//! Integration tests for a full profiling session.
//!
//! These tests drive `ProfilingWizard` through its public API only:
//! 1. Answers are applied step by step
//! 2. Forward moves are gated by the step validators
//! 3. Leaving the last input step finalizes the profile
//! 4. The host collects the complete profile and drains events

use nutri_profile::config::{AppConfig, FeatureFlags};
use nutri_profile::domain::classification::Archetype;
use nutri_profile::domain::foundation::{ErrorCode, Step};
use nutri_profile::domain::metrics::BmiCategory;
use nutri_profile::domain::profile::{
    Activity, ActivityLevel, Barrier, CompleteProfile, CookingMethod, DietaryAnswer,
    HealthCondition, MealCount, Motivation, NumericField, Objective, ProcessedFood, ProfileUpdate,
    Sex, SnackingFrequency, SweetenedDrinks, VegetablePortions, WaterIntake,
};
use nutri_profile::domain::wizard::{ProfilingWizard, WizardEvent, WizardOptions};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn dietary_answers() -> Vec<ProfileUpdate> {
    vec![
        ProfileUpdate::Dietary(DietaryAnswer::MealCount(MealCount::Three)),
        ProfileUpdate::Dietary(DietaryAnswer::Snacking(SnackingFrequency::Often)),
        ProfileUpdate::Dietary(DietaryAnswer::SweetenedDrinks(SweetenedDrinks::OnceADay)),
        ProfileUpdate::Dietary(DietaryAnswer::WaterIntake(WaterIntake::UnderOneLitre)),
        ProfileUpdate::Dietary(DietaryAnswer::VegetablePortions(VegetablePortions::UpToTwo)),
        ProfileUpdate::Dietary(DietaryAnswer::CookingMethod(CookingMethod::Fried)),
        ProfileUpdate::Dietary(DietaryAnswer::ProcessedFood(ProcessedFood::Daily)),
    ]
}

/// Applies `updates`, checks the step unlocked, and moves on.
fn answer_and_advance(wizard: &mut ProfilingWizard, updates: Vec<ProfileUpdate>) {
    let step = wizard.current_step();
    for update in updates {
        wizard.update_profile(update);
    }
    assert!(wizard.can_advance(), "{:?} should validate", step);
    wizard.advance();
    assert_eq!(wizard.current_step(), step.next().unwrap());
}

/// Runs the reference session: weight loss, male, 30, 180 cm, 90 kg, sedentary.
fn run_reference_session(wizard: &mut ProfilingWizard, conditions: &[HealthCondition]) {
    answer_and_advance(wizard, vec![ProfileUpdate::Objective(Objective::LoseWeight)]);
    answer_and_advance(
        wizard,
        vec![
            ProfileUpdate::Sex(Sex::Male),
            ProfileUpdate::NumericText {
                field: NumericField::Age,
                raw: "30".to_string(),
            },
            ProfileUpdate::NumericText {
                field: NumericField::HeightCm,
                raw: "180".to_string(),
            },
            ProfileUpdate::NumericText {
                field: NumericField::WeightKg,
                raw: "90".to_string(),
            },
            ProfileUpdate::ActivityLevel(ActivityLevel::Sedentary),
        ],
    );
    answer_and_advance(
        wizard,
        conditions
            .iter()
            .map(|c| ProfileUpdate::ToggleHealthCondition(*c))
            .collect(),
    );
    answer_and_advance(wizard, dietary_answers());
    answer_and_advance(
        wizard,
        vec![
            ProfileUpdate::ToggleMotivation(Motivation::FeelBetterInBody),
            ProfileUpdate::ToggleMotivation(Motivation::MoreConfident),
            ProfileUpdate::ToggleBarrier(Barrier::LackOfTime),
        ],
    );
    answer_and_advance(
        wizard,
        vec![
            ProfileUpdate::ToggleActivity(Activity::BriskWalking),
            ProfileUpdate::ToggleActivity(Activity::Other),
            ProfileUpdate::OtherActivity(Some(" aqua gym ".to_string())),
        ],
    );
}

// =============================================================================
// Full Session
// =============================================================================

#[test]
fn reference_session_classifies_as_weight_loss_sedentary_overweight() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(&mut wizard, &[HealthCondition::NoCondition]);

    assert_eq!(wizard.current_step(), Step::Results);
    assert_eq!(wizard.state().progress().value(), 100);
    assert!(!wizard.can_advance());

    let complete = wizard.complete().unwrap();
    let physical = &complete.profile().physical;
    assert_eq!(physical.bmi.value(), 27.8);
    assert_eq!(physical.bmi_category, BmiCategory::Overweight);
    assert_eq!(complete.classification().as_str(), "PERTE_SED_S");
    assert_eq!(complete.classification().archetype(), Some(Archetype::WeightLoss));
    assert_eq!(
        complete.identifier().as_str(),
        "lose_weight_male_overweight_sedentary_0_3_often_2_1_2"
    );
    assert_eq!(
        complete.profile().activities.other_activity.as_deref(),
        Some("aqua gym")
    );
}

#[test]
fn four_conditions_append_capped_health_bucket() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(
        &mut wizard,
        &[
            HealthCondition::Diabetes,
            HealthCondition::Hypertension,
            HealthCondition::Cholesterol,
            HealthCondition::ChronicFatigue,
        ],
    );

    let complete = wizard.complete().unwrap();
    assert_eq!(complete.profile().health.conditions.len(), 4);
    assert_eq!(complete.profile().health.bucket.value(), 3);
    assert_eq!(complete.classification().as_str(), "PERTE_SED_S_H3");
}

#[test]
fn none_then_condition_counts_only_the_condition() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(
        &mut wizard,
        &[HealthCondition::NoCondition, HealthCondition::StressAnxiety],
    );

    let complete = wizard.complete().unwrap();
    assert!(!complete
        .profile()
        .health
        .conditions
        .contains(&HealthCondition::NoCondition));
    assert_eq!(complete.classification().as_str(), "PERTE_SED_S_H1");
}

#[test]
fn health_step_validates_after_toggling_back_to_empty() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(
        &mut wizard,
        &[HealthCondition::NoCondition, HealthCondition::NoCondition],
    );

    let complete = wizard.complete().unwrap();
    assert!(complete.profile().health.conditions.is_empty());
    assert_eq!(complete.classification().as_str(), "PERTE_SED_S");
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn completed_steps_grow_monotonically() {
    let mut wizard = ProfilingWizard::new();
    answer_and_advance(&mut wizard, vec![ProfileUpdate::Objective(Objective::GainWeight)]);
    assert_eq!(wizard.state().progress().value(), 28);

    wizard.retreat();
    assert_eq!(wizard.current_step(), Step::Objective);
    assert!(wizard.state().is_completed(Step::Objective));
    assert!(wizard.can_advance());

    wizard.advance();
    assert_eq!(wizard.current_step(), Step::PhysicalData);
    assert_eq!(wizard.state().completed_steps.len(), 1);
}

#[test]
fn retreat_from_health_keeps_physical_data() {
    let mut wizard = ProfilingWizard::new();
    answer_and_advance(&mut wizard, vec![ProfileUpdate::Objective(Objective::LoseWeight)]);
    answer_and_advance(
        &mut wizard,
        vec![
            ProfileUpdate::Sex(Sex::Female),
            ProfileUpdate::Age(Some(44)),
            ProfileUpdate::HeightCm(Some(165.0)),
            ProfileUpdate::WeightKg(Some(58.0)),
            ProfileUpdate::ActivityLevel(ActivityLevel::ModeratelyActive),
        ],
    );
    assert_eq!(wizard.current_step(), Step::HealthData);

    wizard.retreat();

    assert_eq!(wizard.current_step(), Step::PhysicalData);
    assert!(wizard.can_advance());
    let physical = wizard.partial_profile().physical().unwrap();
    assert_eq!(physical.age(), Some(44));
    assert_eq!(physical.bmi().map(|b| b.value()), Some(21.3));
    assert_eq!(physical.bmi_category(), Some(BmiCategory::Normal));
}

#[test]
fn invalid_numeric_text_blocks_physical_step() {
    let mut wizard = ProfilingWizard::new();
    answer_and_advance(&mut wizard, vec![ProfileUpdate::Objective(Objective::MaintainWeight)]);
    for update in [
        ProfileUpdate::Sex(Sex::Male),
        ProfileUpdate::Age(Some(52)),
        ProfileUpdate::HeightCm(Some(175.0)),
        ProfileUpdate::ActivityLevel(ActivityLevel::PhysicalWork),
        ProfileUpdate::NumericText {
            field: NumericField::WeightKg,
            raw: "-70".to_string(),
        },
    ] {
        wizard.update_profile(update);
    }

    assert!(!wizard.can_advance());
    wizard.advance();
    assert_eq!(wizard.current_step(), Step::PhysicalData);
    assert_eq!(wizard.partial_profile().physical().unwrap().bmi(), None);
}

#[test]
fn complete_is_refused_before_results() {
    let mut wizard = ProfilingWizard::new();
    let err = wizard.complete().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidStateTransition);
}

#[test]
fn back_and_forth_from_results_recomputes_profile() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(&mut wizard, &[HealthCondition::NoCondition]);

    wizard.retreat();
    wizard.update_profile(ProfileUpdate::WeightKg(Some(110.0)));
    wizard.advance();

    let complete = wizard.complete().unwrap();
    assert_eq!(complete.profile().physical.bmi.value(), 34.0);
    assert_eq!(complete.classification().as_str(), "PERTE_SED_O");
}

// =============================================================================
// Events and Configuration
// =============================================================================

#[test]
fn events_trace_the_session() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(&mut wizard, &[HealthCondition::NoCondition]);
    wizard.complete().unwrap();

    let events = wizard.take_events();
    assert!(matches!(events.first(), Some(WizardEvent::Started { .. })));
    assert!(matches!(events.last(), Some(WizardEvent::Completed { .. })));

    let advances = events
        .iter()
        .filter(|e| matches!(e, WizardEvent::Advanced { .. }))
        .count();
    assert_eq!(advances, 6);
    assert!(events.iter().all(|e| e.session_id() == wizard.id()));

    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(json["type"], "started");
}

#[test]
fn feature_flags_configure_the_wizard() {
    let config = AppConfig {
        features: FeatureFlags {
            record_events: false,
            log_profile_edits: true,
        },
        ..Default::default()
    };
    let options = config.wizard_options();
    assert_eq!(
        options,
        WizardOptions {
            record_events: false,
            log_profile_edits: true,
        }
    );

    let mut wizard = ProfilingWizard::with_options(options);
    run_reference_session(&mut wizard, &[HealthCondition::NoCondition]);
    assert!(wizard.take_events().is_empty());
    assert!(wizard.complete().is_ok());
}

#[test]
fn complete_profile_serializes_flat() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(&mut wizard, &[HealthCondition::NoCondition]);
    let complete = wizard.complete().unwrap();

    let json = serde_json::to_value(&complete).unwrap();
    assert_eq!(json["objective"], "lose_weight");
    assert_eq!(json["physical"]["bmi"], 27.8);
    assert_eq!(json["health"]["conditions"][0], "none");
    assert_eq!(json["classification"], "PERTE_SED_S");
}

#[test]
fn zero_height_profile_round_trips_through_json() {
    let mut wizard = ProfilingWizard::new();
    run_reference_session(&mut wizard, &[HealthCondition::NoCondition]);

    wizard.retreat();
    wizard.update_profile(ProfileUpdate::HeightCm(Some(0.0)));
    wizard.advance();

    let complete = wizard.complete().unwrap();
    assert_eq!(complete.classification().as_str(), "PERTE_SED_O");

    let json = serde_json::to_string(&complete).unwrap();
    assert!(json.contains("\"bmi\":\"inf\""));

    let restored: CompleteProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, complete);
    assert_eq!(restored.profile().physical.bmi_category, BmiCategory::Obese);
}
