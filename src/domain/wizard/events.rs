//! Wizard domain events.

use serde::{Deserialize, Serialize};

use crate::domain::classification::ClassificationCode;
use crate::domain::foundation::{SessionId, Step, Timestamp};

/// Events that can occur during a profiling session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// A new session was started.
    Started {
        session_id: SessionId,
        started_at: Timestamp,
    },

    /// An answer of `step` was edited.
    ProfileUpdated {
        session_id: SessionId,
        step: Step,
        can_advance: bool,
    },

    /// The user moved forward.
    Advanced {
        session_id: SessionId,
        from: Step,
        to: Step,
    },

    /// The user moved back.
    Retreated {
        session_id: SessionId,
        from: Step,
        to: Step,
    },

    /// The answers were converted into a complete profile.
    Finalized {
        session_id: SessionId,
        classification: ClassificationCode,
    },

    /// The host collected the complete profile.
    Completed {
        session_id: SessionId,
        completed_at: Timestamp,
    },
}

impl WizardEvent {
    /// Returns the session this event belongs to.
    pub fn session_id(&self) -> SessionId {
        match self {
            WizardEvent::Started { session_id, .. }
            | WizardEvent::ProfileUpdated { session_id, .. }
            | WizardEvent::Advanced { session_id, .. }
            | WizardEvent::Retreated { session_id, .. }
            | WizardEvent::Finalized { session_id, .. }
            | WizardEvent::Completed { session_id, .. } => *session_id,
        }
    }
}
