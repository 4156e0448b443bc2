//! Session controller implementation.
//!
//! The controller is a tick-driven state machine. It owns no clock and no
//! thread - the caller delivers one `tick()` per elapsed time-unit and
//! dispatches the returned events itself.
//!
//! ## State Transitions
//!
//! ```text
//! Unconfigured -> CountingDown -> Running <-> Paused
//!                                    |
//!                                    v
//!                                 Finished
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = SessionController::new();
//! session.configure(60)?;
//! // Once per second:
//! if let Some(event) = session.tick() {
//!     notifier.notify(&event);
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::phase::{Phase, COUNTDOWN_SECS};
use super::snapshot::SessionSnapshot;
use crate::error::SessionError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Unconfigured,
    CountingDown,
    Running,
    Paused,
    Finished,
}

/// Core session controller.
///
/// Every method is synchronous; the controller must not be ticked
/// concurrently with itself or with the commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionController {
    state: SessionState,
    total_seconds_configured: u64,
    /// Decreases by one per tick while running, never increases.
    total_seconds_remaining: u64,
    countdown_remaining: u32,
    current_phase: Phase,
    /// Always strictly below `current_phase.duration_secs()`.
    phase_elapsed: u32,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    /// Create an unconfigured controller.
    pub fn new() -> Self {
        Self {
            state: SessionState::Unconfigured,
            total_seconds_configured: 0,
            total_seconds_remaining: 0,
            countdown_remaining: 0,
            current_phase: Phase::Inhale,
            phase_elapsed: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_phase(&self) -> Option<Phase> {
        match self.state {
            SessionState::Running | SessionState::Paused | SessionState::Finished => {
                Some(self.current_phase)
            }
            SessionState::Unconfigured | SessionState::CountingDown => None,
        }
    }

    pub fn phase_elapsed(&self) -> u32 {
        self.phase_elapsed
    }

    pub fn total_seconds_configured(&self) -> u64 {
        self.total_seconds_configured
    }

    pub fn total_seconds_remaining(&self) -> u64 {
        self.total_seconds_remaining
    }

    pub fn countdown_remaining(&self) -> u32 {
        self.countdown_remaining
    }

    /// Whether the clock source should keep delivering ticks.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            SessionState::CountingDown | SessionState::Running | SessionState::Paused
        )
    }

    /// Build a read-only view of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let current_phase = self.current_phase();
        let phase_duration = current_phase.map(Phase::duration_secs).unwrap_or(0);
        let phase_elapsed = if current_phase.is_some() {
            self.phase_elapsed
        } else {
            0
        };
        SessionSnapshot {
            state: self.state,
            current_phase,
            phase_elapsed,
            phase_duration,
            phase_remaining: phase_duration.saturating_sub(phase_elapsed),
            total_seconds_configured: self.total_seconds_configured,
            total_seconds_remaining: self.total_seconds_remaining,
            countdown_remaining: self.countdown_remaining,
            progress_pct: self.progress_pct(),
        }
    }

    /// 0.0 .. 100.0 progress across the configured duration.
    pub fn progress_pct(&self) -> f64 {
        if self.total_seconds_configured == 0 {
            return 0.0;
        }
        let done = self.total_seconds_configured - self.total_seconds_remaining;
        (done as f64 / self.total_seconds_configured as f64 * 100.0).min(100.0)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Configure a new session and start the countdown.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfiguration`] for a zero duration.
    /// Calling this on an already configured session is ignored.
    pub fn configure(&mut self, total_seconds: u64) -> Result<(), SessionError> {
        if total_seconds == 0 {
            return Err(SessionError::InvalidConfiguration {
                total_seconds: 0,
            });
        }
        if self.state != SessionState::Unconfigured {
            tracing::debug!(state = ?self.state, "configure ignored: session already configured");
            return Ok(());
        }
        self.state = SessionState::CountingDown;
        self.total_seconds_configured = total_seconds;
        self.total_seconds_remaining = total_seconds;
        self.countdown_remaining = COUNTDOWN_SECS;
        self.current_phase = Phase::Inhale;
        self.phase_elapsed = 0;
        tracing::info!(total_seconds, "session configured, countdown started");
        Ok(())
    }

    /// Configure from a user-supplied minute count.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfiguration`] when `minutes <= 0`.
    pub fn configure_minutes(&mut self, minutes: i64) -> Result<(), SessionError> {
        if minutes <= 0 {
            return Err(SessionError::InvalidConfiguration {
                total_seconds: minutes.saturating_mul(60),
            });
        }
        self.configure((minutes as u64).saturating_mul(60))
    }

    /// Freeze the session. Returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                true
            }
            _ => {
                tracing::debug!(state = ?self.state, "pause ignored");
                false
            }
        }
    }

    /// Unfreeze a paused session. Returns whether the state changed.
    pub fn resume(&mut self) -> bool {
        match self.state {
            SessionState::Paused => {
                self.state = SessionState::Running;
                true
            }
            _ => {
                tracing::debug!(state = ?self.state, "resume ignored");
                false
            }
        }
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            _ => false,
        }
    }

    /// Drop the current session and return to `Unconfigured`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance by exactly one time-unit.
    ///
    /// Returns `Some(Event::PhaseStarted)` when a phase begins and
    /// `Some(Event::SessionFinished)` on the terminal tick. Ignored outside
    /// `CountingDown` and `Running`.
    pub fn tick(&mut self) -> Option<Event> {
        match self.state {
            SessionState::CountingDown => {
                if self.countdown_remaining > 1 {
                    self.countdown_remaining -= 1;
                    return None;
                }
                self.countdown_remaining = 0;
                self.state = SessionState::Running;
                self.current_phase = Phase::Inhale;
                self.phase_elapsed = 0;
                tracing::debug!("countdown complete");
                Some(Event::PhaseStarted {
                    phase: Phase::Inhale,
                })
            }
            SessionState::Running => {
                // Session end wins over phase rollover on the same tick.
                if self.total_seconds_remaining <= 1 {
                    self.total_seconds_remaining = 0;
                    self.state = SessionState::Finished;
                    tracing::info!(
                        total_seconds = self.total_seconds_configured,
                        "session finished"
                    );
                    return Some(Event::SessionFinished);
                }
                self.total_seconds_remaining -= 1;
                if self.phase_elapsed + 1 < self.current_phase.duration_secs() {
                    self.phase_elapsed += 1;
                    return None;
                }
                self.current_phase = self.current_phase.next();
                self.phase_elapsed = 0;
                Some(Event::PhaseStarted {
                    phase: self.current_phase,
                })
            }
            SessionState::Unconfigured | SessionState::Paused | SessionState::Finished => None,
        }
    }
}
