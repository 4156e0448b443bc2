//! Clock source for a session.
//!
//! [`SessionRunner`] owns a [`SessionController`] and feeds it one tick per
//! period from a `tokio` interval. Commands arrive over an mpsc channel and
//! are applied between ticks, so the controller is never touched from two
//! places at once.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

use crate::notifier::Notifier;
use crate::session::{SessionController, SessionSnapshot};

const COMMAND_BUFFER: usize = 16;

/// Commands accepted while a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerCommand {
    Pause,
    Resume,
    TogglePause,
    Quit,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// `true` when the session reached `Finished`. `false` when `Quit` was
    /// received, or when every sender was dropped while the session was
    /// paused and nothing could resume it.
    pub finished: bool,
    /// Clock ticks delivered, including ones ignored while paused.
    pub ticks: u64,
    pub snapshot: SessionSnapshot,
}

/// Create the command channel for a runner.
pub fn command_channel() -> (mpsc::Sender<RunnerCommand>, mpsc::Receiver<RunnerCommand>) {
    mpsc::channel(COMMAND_BUFFER)
}

pub struct SessionRunner<N> {
    session: SessionController,
    notifier: N,
    period: Duration,
}

impl<N: Notifier> SessionRunner<N> {
    pub fn new(session: SessionController, notifier: N, period: Duration) -> Self {
        Self {
            session,
            notifier,
            period,
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    /// Drive the session until it finishes or `Quit` is received.
    ///
    /// `render` sees the initial snapshot, the snapshot after every tick,
    /// and the snapshot after every command that changed state. Dropping
    /// every sender leaves a running session to finish on its own; a paused
    /// session can no longer be resumed, so the run stops there.
    pub async fn run<F>(
        &mut self,
        mut commands: mpsc::Receiver<RunnerCommand>,
        mut render: F,
    ) -> RunOutcome
    where
        F: FnMut(&SessionSnapshot),
    {
        render(&self.session.snapshot());

        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0u64;
        let mut commands_open = true;

        while self.session.is_active() {
            tokio::select! {
                _ = interval.tick() => {
                    ticks += 1;
                    if let Some(event) = self.session.tick() {
                        self.notifier.notify(&event);
                    }
                    render(&self.session.snapshot());
                }
                command = commands.recv(), if commands_open => match command {
                    Some(RunnerCommand::Quit) => {
                        tracing::info!(ticks, "session quit by user");
                        break;
                    }
                    Some(command) => {
                        let resumed = matches!(
                            command,
                            RunnerCommand::Resume | RunnerCommand::TogglePause
                        ) && self.session.state() == crate::SessionState::Paused;
                        if self.apply(command) {
                            if resumed {
                                // Resume gets a full period before the next tick.
                                interval.reset();
                            }
                            render(&self.session.snapshot());
                        }
                    }
                    None => {
                        commands_open = false;
                        if self.session.state() == crate::SessionState::Paused {
                            tracing::info!(ticks, "command channel closed while paused");
                            break;
                        }
                    }
                },
            }
        }

        RunOutcome {
            finished: self.session.state() == crate::SessionState::Finished,
            ticks,
            snapshot: self.session.snapshot(),
        }
    }

    fn apply(&mut self, command: RunnerCommand) -> bool {
        match command {
            RunnerCommand::Pause => self.session.pause(),
            RunnerCommand::Resume => self.session.resume(),
            RunnerCommand::TogglePause => self.session.toggle_pause(),
            RunnerCommand::Quit => false,
        }
    }
}
