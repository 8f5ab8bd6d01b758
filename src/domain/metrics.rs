//! Derived metrics - body-mass index, its category, and the health-condition bucket.
//!
//! Pure functions only. Nothing here validates its inputs: a non-positive
//! height or weight yields a meaningless BMI rather than an error, since the
//! wizard only calls in once the physical-data step reports its fields present.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::profile::HealthCondition;

/// Upper bound (exclusive) of the underweight range.
pub const UNDERWEIGHT_BELOW: f64 = 18.5;
/// Upper bound (exclusive) of the normal range.
pub const NORMAL_BELOW: f64 = 25.0;
/// Upper bound (exclusive) of the overweight range.
pub const OVERWEIGHT_BELOW: f64 = 30.0;

answer_set! {
    /// Weight category derived from the BMI.
    BmiCategory {
        Underweight => "underweight",
        Normal => "normal",
        Overweight => "overweight",
        Obese => "obese",
    }
}

impl BmiCategory {
    /// Categorizes a BMI value. Each range includes its lower bound.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < NORMAL_BELOW {
            BmiCategory::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Body-mass index, rounded to one decimal place.
///
/// Serializes as a JSON number. A zero height gives a non-finite value,
/// which serializes as the string `"inf"`, `"-inf"` or `"nan"` and parses
/// back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bmi(f64);

impl Bmi {
    /// Computes `weight / (height in metres)^2`, rounded half-up to one decimal.
    pub fn from_measurements(height_cm: f64, weight_kg: f64) -> Self {
        let height_m = height_cm / 100.0;
        Self(round_half_up_one_decimal(weight_kg / (height_m * height_m)))
    }

    /// Returns the rounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the weight category for this BMI.
    pub fn category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.0)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Serialize for Bmi {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else if self.0.is_nan() {
            serializer.serialize_str(NAN_LITERAL)
        } else if self.0 > 0.0 {
            serializer.serialize_str(INFINITY_LITERAL)
        } else {
            serializer.serialize_str(NEG_INFINITY_LITERAL)
        }
    }
}

impl<'de> Deserialize<'de> for Bmi {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BmiRepr {
            Number(f64),
            Literal(String),
        }

        match BmiRepr::deserialize(deserializer)? {
            BmiRepr::Number(value) => Ok(Self(value)),
            BmiRepr::Literal(literal) => match literal.as_str() {
                INFINITY_LITERAL => Ok(Self(f64::INFINITY)),
                NEG_INFINITY_LITERAL => Ok(Self(f64::NEG_INFINITY)),
                NAN_LITERAL => Ok(Self(f64::NAN)),
                other => Err(de::Error::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"nan\"",
                )),
            },
        }
    }
}

const INFINITY_LITERAL: &str = "inf";
const NEG_INFINITY_LITERAL: &str = "-inf";
const NAN_LITERAL: &str = "nan";

fn round_half_up_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Number of selected health conditions, with 3 or more collapsed into 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionBucket(u8);

impl ConditionBucket {
    /// Largest bucket value ("3 or more").
    pub const MAX: u8 = 3;

    /// No condition selected.
    pub const NONE: Self = Self(0);

    /// Buckets a raw count.
    pub fn from_count(count: usize) -> Self {
        Self(count.min(Self::MAX as usize) as u8)
    }

    /// Buckets a selection, ignoring the "none" sentinel.
    pub fn from_conditions<'a, I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = &'a HealthCondition>,
    {
        let count = conditions
            .into_iter()
            .filter(|c| !c.is_sentinel())
            .count();
        Self::from_count(count)
    }

    /// Returns the bucket value (0 to 3).
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true if at least one real condition is selected.
    pub fn has_conditions(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ConditionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
