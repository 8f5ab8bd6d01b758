//! Feature flags configuration

use serde::Deserialize;

use crate::domain::wizard::WizardOptions;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Buffer wizard domain events for the host
    #[serde(default = "default_record_events")]
    pub record_events: bool,

    /// Log every profile edit at debug level (answers included)
    #[serde(default)]
    pub log_profile_edits: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            record_events: default_record_events(),
            log_profile_edits: false,
        }
    }
}

impl From<&FeatureFlags> for WizardOptions {
    fn from(flags: &FeatureFlags) -> Self {
        WizardOptions {
            record_events: flags.record_events,
            log_profile_edits: flags.log_profile_edits,
        }
    }
}

fn default_record_events() -> bool {
    true
}
