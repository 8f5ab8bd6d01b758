//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (steps, IDs, percentages, errors)
//! - `metrics` - BMI, BMI category and health-condition bucket
//! - `profile` - Answer sets, partial and complete profiles, validators, aggregator
//! - `classification` - Classification code and profile identifier
//! - `wizard` - `ProfilingWizard` step sequencer and its events

#[macro_use]
mod macros;

pub mod classification;
pub mod foundation;
pub mod metrics;
pub mod profile;
pub mod wizard;
