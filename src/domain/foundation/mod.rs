//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the wizard step enum and error types
//! that form the vocabulary of the profiling domain.

mod errors;
mod ids;
mod percentage;
mod state_machine;
mod step;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use step::Step;
pub use timestamp::Timestamp;
