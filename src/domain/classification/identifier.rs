//! Identifier Generator - readable identifier built from key answers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::profile::ValidatedProfile;

/// Lowercase identifier such as `lose_weight_male_overweight_sedentary_0_3_never_1_1_1`.
///
/// Carries no uniqueness guarantee: profiles that agree on the ten source
/// fields share an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileIdentifier(String);

impl ProfileIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Joins objective, sex, BMI category, activity level, health bucket, meal
/// count, snacking, motivation count, barrier count and activity count.
pub fn generate_identifier(profile: &ValidatedProfile) -> ProfileIdentifier {
    let parts = [
        profile.objective.as_str().to_string(),
        profile.physical.sex.as_str().to_string(),
        profile.physical.bmi_category.as_str().to_string(),
        profile.physical.activity_level.as_str().to_string(),
        profile.health.bucket.to_string(),
        profile.dietary.meal_count.as_str().to_string(),
        profile.dietary.snacking.as_str().to_string(),
        profile.motivations.motivations.len().to_string(),
        profile.motivations.barriers.len().to_string(),
        profile.activities.activities.len().to_string(),
    ];
    ProfileIdentifier(normalize(&parts.join("_")))
}

/// Collapses whitespace runs into `_` and lowercases.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    out
}
