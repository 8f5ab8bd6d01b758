//! ProfilingWizard aggregate - the step sequencer.
//!
//! The wizard owns the one `PartialProfile` of a session and moves through
//! the 7 steps. Forward moves are gated by the current step's validator;
//! moving past the last input step finalizes the profile. Navigation never
//! fails loudly: a refused move leaves the state untouched and is logged.

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, StateMachine, Step, Timestamp,
};
use crate::domain::profile::{CompleteProfile, PartialProfile, ProfileUpdate};

use super::{NavigationState, WizardEvent, WizardOptions};

/// The profiling wizard aggregate root.
#[derive(Debug, Clone)]
pub struct ProfilingWizard {
    id: SessionId,
    started_at: Timestamp,
    navigation: NavigationState,
    profile: PartialProfile,
    /// Present only while on Results.
    completed: Option<CompleteProfile>,
    options: WizardOptions,
    domain_events: Vec<WizardEvent>,
}

impl ProfilingWizard {
    /// Starts a new session on the first step with an empty profile.
    pub fn new() -> Self {
        Self::with_options(WizardOptions::default())
    }

    /// Starts a new session with explicit options.
    pub fn with_options(options: WizardOptions) -> Self {
        let id = SessionId::new();
        let started_at = Timestamp::now();

        let mut wizard = Self {
            id,
            started_at,
            navigation: NavigationState::initial(),
            profile: PartialProfile::new(),
            completed: None,
            options,
            domain_events: Vec::new(),
        };

        tracing::info!(session_id = %id, "Profiling session started");
        wizard.record_event(WizardEvent::Started {
            session_id: id,
            started_at,
        });

        wizard
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when this session started.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns the current navigation snapshot.
    pub fn state(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_step(&self) -> Step {
        self.navigation.current_step
    }

    pub fn can_advance(&self) -> bool {
        self.navigation.can_advance
    }

    /// Returns the answers collected so far.
    pub fn partial_profile(&self) -> &PartialProfile {
        &self.profile
    }

    /// Returns the finalized profile while on Results.
    pub fn complete_profile(&self) -> Option<&CompleteProfile> {
        self.completed.as_ref()
    }

    pub fn options(&self) -> WizardOptions {
        self.options
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Editing
    // ───────────────────────────────────────────────────────────────

    /// Merges one edit into the profile and re-evaluates `can_advance`.
    ///
    /// Never changes the current step. On Results the finalized profile is
    /// rebuilt from the edited answers, or dropped if they no longer validate.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        let step = update.step();
        if self.options.log_profile_edits {
            tracing::debug!(
                session_id = %self.id,
                step = ?step,
                update = ?update,
                "Profile edit"
            );
        }

        if !self.profile.apply(update) {
            return;
        }

        if self.navigation.is_on_results() {
            self.refinalize();
        }
        self.refresh_can_advance();

        self.record_event(WizardEvent::ProfileUpdated {
            session_id: self.id,
            step,
            can_advance: self.navigation.can_advance,
        });
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves to the next step if the current step validates.
    ///
    /// Leaving PhysicalActivities finalizes the profile; the move is refused
    /// if an earlier step no longer validates.
    pub fn advance(&mut self) {
        let from = self.navigation.current_step;
        if !self.navigation.can_advance {
            tracing::debug!(session_id = %self.id, step = ?from, "Advance ignored: step incomplete");
            return;
        }

        let Some(to) = from.next() else {
            tracing::debug!(session_id = %self.id, step = ?from, "Advance ignored: last step");
            return;
        };
        let to = match from.transition_to(to) {
            Ok(to) => to,
            Err(err) => {
                tracing::debug!(session_id = %self.id, error = %err, "Advance ignored");
                return;
            }
        };

        if from.is_last_input() {
            match self.profile.finalize() {
                Ok(complete) => {
                    tracing::info!(
                        session_id = %self.id,
                        classification = %complete.classification(),
                        "Profile finalized"
                    );
                    self.record_event(WizardEvent::Finalized {
                        session_id: self.id,
                        classification: complete.classification().clone(),
                    });
                    self.completed = Some(complete);
                }
                Err(err) => {
                    tracing::warn!(
                        session_id = %self.id,
                        error = %err,
                        "Advance to results refused"
                    );
                    return;
                }
            }
        }

        self.navigation.completed_steps.insert(from);
        self.navigation.current_step = to;
        self.refresh_can_advance();

        tracing::debug!(session_id = %self.id, from = ?from, to = ?to, "Advanced");
        self.record_event(WizardEvent::Advanced {
            session_id: self.id,
            from,
            to,
        });
    }

    /// Moves back one step. The step moved to is assumed still valid.
    ///
    /// Leaving Results discards the finalized profile.
    pub fn retreat(&mut self) {
        let from = self.navigation.current_step;
        let Some(to) = from.previous() else {
            tracing::debug!(session_id = %self.id, step = ?from, "Retreat ignored: first step");
            return;
        };

        if from == Step::Results {
            self.completed = None;
        }
        self.navigation.current_step = to;
        self.navigation.can_advance = true;

        tracing::debug!(session_id = %self.id, from = ?from, to = ?to, "Retreated");
        self.record_event(WizardEvent::Retreated {
            session_id: self.id,
            from,
            to,
        });
    }

    // ───────────────────────────────────────────────────────────────
    // Completion
    // ───────────────────────────────────────────────────────────────

    /// Returns the complete profile. Only available on Results.
    pub fn complete(&mut self) -> Result<CompleteProfile, DomainError> {
        if !self.navigation.is_on_results() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Profile can only be completed on Results, current step is {:?}",
                    self.navigation.current_step
                ),
            ));
        }

        let complete = self.completed.clone().ok_or_else(|| {
            DomainError::new(
                ErrorCode::ProfileNotFinalized,
                "No finalized profile is available",
            )
        })?;

        tracing::info!(
            session_id = %self.id,
            identifier = %complete.identifier(),
            "Profiling session completed"
        );
        self.record_event(WizardEvent::Completed {
            session_id: self.id,
            completed_at: Timestamp::now(),
        });

        Ok(complete)
    }

    // ───────────────────────────────────────────────────────────────
    // Internal Helpers
    // ───────────────────────────────────────────────────────────────

    fn refresh_can_advance(&mut self) {
        self.navigation.can_advance = self.profile.is_step_valid(self.navigation.current_step);
    }

    fn refinalize(&mut self) {
        match self.profile.finalize() {
            Ok(complete) => {
                self.record_event(WizardEvent::Finalized {
                    session_id: self.id,
                    classification: complete.classification().clone(),
                });
                self.completed = Some(complete);
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %self.id,
                    error = %err,
                    "Edit on results invalidated the profile"
                );
                self.completed = None;
            }
        }
    }

    fn record_event(&mut self, event: WizardEvent) {
        if self.options.record_events {
            self.domain_events.push(event);
        }
    }
}

impl Default for ProfilingWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{
        Activity, ActivityLevel, Barrier, CookingMethod, DietaryAnswer, HealthCondition,
        MealCount, Motivation, Objective, ProcessedFood, Sex, SnackingFrequency,
        SweetenedDrinks, VegetablePortions, WaterIntake,
    };

    fn create_test_wizard() -> ProfilingWizard {
        ProfilingWizard::new()
    }

    fn answer_physical(wizard: &mut ProfilingWizard) {
        wizard.update_profile(ProfileUpdate::Sex(Sex::Male));
        wizard.update_profile(ProfileUpdate::Age(Some(30)));
        wizard.update_profile(ProfileUpdate::HeightCm(Some(180.0)));
        wizard.update_profile(ProfileUpdate::WeightKg(Some(90.0)));
        wizard.update_profile(ProfileUpdate::ActivityLevel(ActivityLevel::Sedentary));
    }

    fn answer_dietary(wizard: &mut ProfilingWizard) {
        for answer in [
            DietaryAnswer::MealCount(MealCount::Three),
            DietaryAnswer::Snacking(SnackingFrequency::Rarely),
            DietaryAnswer::SweetenedDrinks(SweetenedDrinks::Never),
            DietaryAnswer::WaterIntake(WaterIntake::OneToTwoLitres),
            DietaryAnswer::VegetablePortions(VegetablePortions::UpToTwo),
            DietaryAnswer::CookingMethod(CookingMethod::Steamed),
            DietaryAnswer::ProcessedFood(ProcessedFood::Regularly),
        ] {
            wizard.update_profile(ProfileUpdate::Dietary(answer));
        }
    }

    /// Answers every step and stops on PhysicalActivities.
    fn wizard_on_last_input() -> ProfilingWizard {
        let mut wizard = create_test_wizard();
        wizard.update_profile(ProfileUpdate::Objective(Objective::LoseWeight));
        wizard.advance();
        answer_physical(&mut wizard);
        wizard.advance();
        wizard.update_profile(ProfileUpdate::ToggleHealthCondition(HealthCondition::NoCondition));
        wizard.advance();
        answer_dietary(&mut wizard);
        wizard.advance();
        wizard.update_profile(ProfileUpdate::ToggleMotivation(Motivation::MoreEnergy));
        wizard.update_profile(ProfileUpdate::ToggleBarrier(Barrier::LackOfTime));
        wizard.advance();
        wizard.update_profile(ProfileUpdate::ToggleActivity(Activity::BriskWalking));
        assert_eq!(wizard.current_step(), Step::PhysicalActivities);
        wizard
    }

    fn wizard_on_results() -> ProfilingWizard {
        let mut wizard = wizard_on_last_input();
        wizard.advance();
        assert_eq!(wizard.current_step(), Step::Results);
        wizard
    }

    // ───────────────────────────────────────────────────────────────
    // Creation Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_wizard_starts_on_objective() {
        let wizard = create_test_wizard();
        assert_eq!(wizard.current_step(), Step::Objective);
        assert!(!wizard.can_advance());
        assert!(wizard.state().completed_steps.is_empty());
        assert!(wizard.partial_profile().is_empty());
    }

    #[test]
    fn new_wizard_records_started_event() {
        let mut wizard = create_test_wizard();
        let events = wizard.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], WizardEvent::Started { .. }));
        assert_eq!(events[0].session_id(), wizard.id());
    }

    #[test]
    fn event_recording_can_be_disabled() {
        let mut wizard = ProfilingWizard::with_options(WizardOptions {
            record_events: false,
            log_profile_edits: true,
        });
        wizard.update_profile(ProfileUpdate::Objective(Objective::GainWeight));
        wizard.advance();
        assert!(wizard.take_events().is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Advance Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn advance_is_noop_while_step_invalid() {
        let mut wizard = create_test_wizard();
        wizard.advance();
        assert_eq!(wizard.current_step(), Step::Objective);
        assert!(wizard.state().completed_steps.is_empty());
    }

    #[test]
    fn edit_enables_advance_immediately() {
        let mut wizard = create_test_wizard();
        wizard.update_profile(ProfileUpdate::Objective(Objective::SleepBetter));
        assert!(wizard.can_advance());
    }

    #[test]
    fn advance_marks_step_completed_and_reevaluates() {
        let mut wizard = create_test_wizard();
        wizard.update_profile(ProfileUpdate::Objective(Objective::SleepBetter));
        wizard.advance();

        assert_eq!(wizard.current_step(), Step::PhysicalData);
        assert!(wizard.state().is_completed(Step::Objective));
        assert!(!wizard.can_advance());
    }

    #[test]
    fn physical_data_unlocks_after_last_required_field() {
        let mut wizard = create_test_wizard();
        wizard.update_profile(ProfileUpdate::Objective(Objective::LoseWeight));
        wizard.advance();

        wizard.update_profile(ProfileUpdate::Sex(Sex::Male));
        wizard.update_profile(ProfileUpdate::Age(Some(30)));
        wizard.update_profile(ProfileUpdate::HeightCm(Some(180.0)));
        wizard.update_profile(ProfileUpdate::WeightKg(Some(90.0)));
        assert!(!wizard.can_advance());

        wizard.update_profile(ProfileUpdate::ActivityLevel(ActivityLevel::Sedentary));
        assert!(wizard.can_advance());
    }

    #[test]
    fn advancing_past_activities_finalizes_profile() {
        let mut wizard = wizard_on_last_input();
        wizard.take_events();
        wizard.advance();

        assert_eq!(wizard.current_step(), Step::Results);
        assert!(!wizard.can_advance());
        assert_eq!(wizard.state().completed_steps.len(), 6);
        let complete = wizard.complete_profile().unwrap();
        assert_eq!(complete.classification().as_str(), "PERTE_SED_S");

        let events = wizard.take_events();
        assert!(matches!(events[0], WizardEvent::Finalized { .. }));
        assert!(matches!(
            events[1],
            WizardEvent::Advanced {
                from: Step::PhysicalActivities,
                to: Step::Results,
                ..
            }
        ));
    }

    #[test]
    fn advance_on_results_is_noop() {
        let mut wizard = wizard_on_results();
        wizard.advance();
        assert_eq!(wizard.current_step(), Step::Results);
    }

    #[test]
    fn advance_to_results_refused_when_earlier_answers_invalid() {
        let mut wizard = wizard_on_last_input();
        wizard.update_profile(ProfileUpdate::WeightKg(None));
        assert!(wizard.can_advance());
        wizard.take_events();

        wizard.advance();

        assert_eq!(wizard.current_step(), Step::PhysicalActivities);
        assert!(!wizard.state().is_completed(Step::PhysicalActivities));
        assert!(wizard.complete_profile().is_none());
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn revisited_invalid_step_blocks_advance() {
        let mut wizard = create_test_wizard();
        wizard.update_profile(ProfileUpdate::Objective(Objective::LoseWeight));
        wizard.advance();
        answer_physical(&mut wizard);
        wizard.advance();
        wizard.retreat();

        wizard.update_profile(ProfileUpdate::HeightCm(None));
        assert!(!wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.current_step(), Step::PhysicalData);
    }

    // ───────────────────────────────────────────────────────────────
    // Retreat Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn retreat_on_first_step_is_noop() {
        let mut wizard = create_test_wizard();
        wizard.take_events();
        wizard.retreat();
        assert_eq!(wizard.current_step(), Step::Objective);
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn retreat_keeps_answers_and_allows_advance() {
        let mut wizard = create_test_wizard();
        wizard.update_profile(ProfileUpdate::Objective(Objective::LoseWeight));
        wizard.advance();
        answer_physical(&mut wizard);
        wizard.advance();
        assert_eq!(wizard.current_step(), Step::HealthData);

        wizard.retreat();
        assert_eq!(wizard.current_step(), Step::PhysicalData);
        assert!(wizard.can_advance());
        assert_eq!(
            wizard.partial_profile().physical().and_then(|p| p.weight_kg()),
            Some(90.0)
        );
        assert!(!wizard.state().is_completed(Step::HealthData));
        assert!(wizard.state().is_completed(Step::PhysicalData));
    }

    #[test]
    fn retreat_from_results_discards_finalized_profile() {
        let mut wizard = wizard_on_results();
        wizard.retreat();

        assert_eq!(wizard.current_step(), Step::PhysicalActivities);
        assert!(wizard.complete_profile().is_none());
        assert_eq!(wizard.state().completed_steps.len(), 6);

        wizard.advance();
        assert!(wizard.complete_profile().is_some());
    }

    // ───────────────────────────────────────────────────────────────
    // Results Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn edit_on_results_refinalizes() {
        let mut wizard = wizard_on_results();
        for condition in [
            HealthCondition::Diabetes,
            HealthCondition::Hypertension,
            HealthCondition::Cholesterol,
            HealthCondition::SleepDisorders,
        ] {
            wizard.update_profile(ProfileUpdate::ToggleHealthCondition(condition));
        }

        assert_eq!(wizard.current_step(), Step::Results);
        assert_eq!(
            wizard.complete_profile().unwrap().classification().as_str(),
            "PERTE_SED_S_H3"
        );
    }

    #[test]
    fn invalidating_edit_on_results_drops_profile() {
        let mut wizard = wizard_on_results();
        wizard.update_profile(ProfileUpdate::ToggleActivity(Activity::BriskWalking));

        assert!(wizard.complete_profile().is_none());
        let err = wizard.complete().unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFinalized);
    }

    #[test]
    fn complete_returns_profile_on_results() {
        let mut wizard = wizard_on_results();
        wizard.take_events();

        let complete = wizard.complete().unwrap();
        assert_eq!(complete.classification().as_str(), "PERTE_SED_S");
        assert_eq!(complete.profile().physical.bmi.value(), 27.8);

        let events = wizard.take_events();
        assert!(matches!(events[0], WizardEvent::Completed { .. }));
    }

    #[test]
    fn complete_before_results_fails() {
        let mut wizard = wizard_on_last_input();
        let err = wizard.complete().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn ignored_other_qualifier_records_no_event() {
        let mut wizard = create_test_wizard();
        wizard.take_events();
        wizard.update_profile(ProfileUpdate::OtherActivity(Some("padel".to_string())));
        assert!(wizard.take_events().is_empty());
    }
}
