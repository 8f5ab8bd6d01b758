//! Per-wizard behavior switches.

use serde::{Deserialize, Serialize};

/// Switches for side behavior that never changes navigation or results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardOptions {
    /// Buffer `WizardEvent`s for `take_events`.
    pub record_events: bool,
    /// Emit a debug log line for every profile edit.
    pub log_profile_edits: bool,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            record_events: true,
            log_profile_edits: false,
        }
    }
}
