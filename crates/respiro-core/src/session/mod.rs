mod controller;
mod phase;
mod snapshot;

pub use controller::{SessionController, SessionState};
pub use phase::{phase_table, Phase, PhaseInfo, COUNTDOWN_SECS, CYCLE_SECS};
pub use snapshot::{format_clock, SessionSnapshot};
