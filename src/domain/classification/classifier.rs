//! Classifier - composite classification code for a validated profile.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::metrics::BmiCategory;
use crate::domain::profile::{ActivityLevel, Objective, ValidatedProfile};

/// Composite code such as `PERTE_SED_S` or `PERTE_SED_S_H3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationCode(String);

impl ClassificationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the archetype named by the code's prefix.
    ///
    /// Codes built by [`classify`] always have one; `None` only for codes
    /// deserialized from foreign input.
    pub fn archetype(&self) -> Option<Archetype> {
        let prefix = self.0.split('_').next()?;
        Archetype::ALL
            .iter()
            .copied()
            .find(|archetype| archetype.prefix() == prefix)
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad family of a profile, read from the first code segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    WeightLoss,
    WeightGain,
    Maintenance,
    Energy,
    Sports,
    Balance,
}

impl Archetype {
    pub const ALL: &'static [Archetype] = &[
        Archetype::WeightLoss,
        Archetype::WeightGain,
        Archetype::Maintenance,
        Archetype::Energy,
        Archetype::Sports,
        Archetype::Balance,
    ];

    /// Returns the archetype for an objective. Goals without a dedicated
    /// family fall back to `Balance`.
    pub fn for_objective(objective: Objective) -> Self {
        match objective {
            Objective::LoseWeight => Archetype::WeightLoss,
            Objective::GainWeight => Archetype::WeightGain,
            Objective::MaintainWeight => Archetype::Maintenance,
            Objective::ImproveEnergy => Archetype::Energy,
            Objective::SportsPerformance => Archetype::Sports,
            Objective::ManageStress
            | Objective::SleepBetter
            | Objective::HealthSupport
            | Objective::BetterFoodRelationship => Archetype::Balance,
        }
    }

    /// Returns the code prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Archetype::WeightLoss => "PERTE",
            Archetype::WeightGain => "PRISE",
            Archetype::Maintenance => "MAINTIEN",
            Archetype::Energy => "ENERGIE",
            Archetype::Sports => "SPORT",
            Archetype::Balance => "EQUILIBRE",
        }
    }

    /// Returns a short description for result screens.
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::WeightLoss => "Profile focused on weight loss",
            Archetype::WeightGain => "Profile focused on weight gain",
            Archetype::Maintenance => "Profile focused on weight maintenance",
            Archetype::Energy => "Profile focused on improving energy",
            Archetype::Sports => "Profile focused on sports performance",
            Archetype::Balance => "Profile focused on overall balance",
        }
    }
}

fn activity_token(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "SED",
        ActivityLevel::LightlyActive => "LEG",
        ActivityLevel::ModeratelyActive => "MOD",
        ActivityLevel::VeryActive => "ACT",
        ActivityLevel::PhysicalWork => "PHY",
    }
}

fn category_letter(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "M",
        BmiCategory::Normal => "N",
        BmiCategory::Overweight => "S",
        BmiCategory::Obese => "O",
    }
}

/// Builds `{prefix}_{activity}_{category}[_H{bucket}]`.
///
/// Deterministic and independent of selection order. Distinct profiles may
/// share a code.
pub fn classify(profile: &ValidatedProfile) -> ClassificationCode {
    let mut code = format!(
        "{}_{}_{}",
        Archetype::for_objective(profile.objective).prefix(),
        activity_token(profile.physical.activity_level),
        category_letter(profile.physical.bmi_category),
    );
    if profile.health.bucket.has_conditions() {
        code.push_str(&format!("_H{}", profile.health.bucket));
    }
    ClassificationCode(code)
}
