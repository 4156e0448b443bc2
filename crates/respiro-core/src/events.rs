use serde::{Deserialize, Serialize};

use crate::session::Phase;

/// Side effects requested by the session controller.
///
/// The controller only returns these; dispatching them to a notifier is the
/// caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PhaseStarted { phase: Phase },
    SessionFinished,
}

impl Event {
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Event::PhaseStarted { phase } => Some(*phase),
            Event::SessionFinished => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let json = serde_json::to_value(Event::PhaseStarted { phase: Phase::Exhale }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "phase_started", "phase": "exhale"}));

        let json = serde_json::to_value(Event::SessionFinished).unwrap();
        assert_eq!(json, serde_json::json!({"type": "session_finished"}));
    }
}
