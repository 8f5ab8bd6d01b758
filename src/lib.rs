//! Nutri Profile - nutrition profiling wizard core
//!
//! This crate drives a 7-step questionnaire that builds a user's nutrition
//! profile, validates every step before moving on, derives BMI and health
//! metrics, and finishes with a classification code and profile identifier.
//! Rendering and persistence belong to the host.

pub mod config;
pub mod domain;
pub mod telemetry;
