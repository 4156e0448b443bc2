//! # Respiro Core Library
//!
//! This library provides the core logic for Respiro, a guided 4-7-8
//! breathing timer. Every operation is available from the standalone CLI
//! binary, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Session Controller**: A tick-driven state machine that requires the
//!   caller to invoke `tick()` once per time-unit
//! - **Events**: The only side-effect channel out of the controller
//! - **Notifier**: Fire-and-forget consumers of events
//! - **Runner**: A `tokio` interval that acts as the clock source
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SessionController`]: Core session state machine
//! - [`SessionRunner`]: Clock source and command loop
//! - [`Notifier`]: Trait for event consumers
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod notifier;
pub mod runner;
pub mod session;
pub mod storage;

pub use error::{ConfigError, CoreError, SessionError};
pub use events::Event;
pub use notifier::{dispatch, LogNotifier, Notifier, NullNotifier, RecordingNotifier};
pub use runner::{command_channel, RunOutcome, RunnerCommand, SessionRunner};
pub use session::{
    format_clock, phase_table, Phase, PhaseInfo, SessionController, SessionSnapshot,
    SessionState, COUNTDOWN_SECS, CYCLE_SECS,
};
pub use storage::Config;
