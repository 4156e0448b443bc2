use serde::{Deserialize, Serialize};

use super::controller::SessionState;
use super::phase::Phase;

/// Read-only view of a session, built by [`super::SessionController::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// `None` until the countdown completes.
    pub current_phase: Option<Phase>,
    pub phase_elapsed: u32,
    pub phase_duration: u32,
    pub phase_remaining: u32,
    pub total_seconds_configured: u64,
    pub total_seconds_remaining: u64,
    pub countdown_remaining: u32,
    pub progress_pct: f64,
}

impl SessionSnapshot {
    /// Remaining session time as `m:ss`.
    pub fn remaining_clock(&self) -> String {
        format_clock(self.total_seconds_remaining)
    }
}

/// Format seconds as `m:ss` (minutes unpadded).
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(754), "12:34");
    }

    #[test]
    fn snapshot_serializes_state_snake_case() {
        let snap = crate::SessionController::new().snapshot();
        let json = serde_json::to_value(snap).unwrap();
        assert_eq!(json["state"], "unconfigured");
        assert!(json["current_phase"].is_null());
        assert_eq!(json["phase_duration"], 0);
    }
}
