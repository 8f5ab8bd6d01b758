//! Wizard module - the step sequencer that drives a profiling session.
//!
//! # Module Organization
//!
//! - `session` - `ProfilingWizard` aggregate (navigation, editing, completion)
//! - `navigation` - `NavigationState` snapshot
//! - `events` - Domain events drained by the host
//! - `options` - Behavior switches

mod events;
mod navigation;
mod options;
mod session;

pub use events::WizardEvent;
pub use navigation::NavigationState;
pub use options::WizardOptions;
pub use session::ProfilingWizard;
