use clap::Args;
use respiro_core::{Event, SessionController, SessionSnapshot, SessionState};
use serde::Serialize;

#[derive(Args)]
pub struct SimulateArgs {
    /// Session length in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: i64,
    /// Number of ticks to apply (defaults to running until the session ends)
    #[arg(long)]
    pub ticks: Option<u64>,
    /// Pause just before this tick (1-based)
    #[arg(long)]
    pub pause_at: Option<u64>,
    /// Resume just before this tick (1-based)
    #[arg(long)]
    pub resume_at: Option<u64>,
}

#[derive(Serialize)]
struct TickRecord {
    tick: u64,
    event: Event,
}

#[derive(Serialize)]
struct FinalRecord {
    ticks: u64,
    snapshot: SessionSnapshot,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = SessionController::new();
    session.configure_minutes(args.minutes)?;

    let mut tick = 0u64;
    loop {
        if args.ticks.is_some_and(|limit| tick >= limit) || !session.is_active() {
            break;
        }
        let next = tick + 1;
        if args.pause_at == Some(next) {
            session.pause();
        }
        if args.resume_at == Some(next) {
            session.resume();
        }
        // Without a tick limit, a pause nobody resumes would never end.
        let resume_pending = args.resume_at.is_some_and(|at| at > next);
        if args.ticks.is_none() && session.state() == SessionState::Paused && !resume_pending {
            break;
        }

        tick = next;
        if let Some(event) = session.tick() {
            println!("{}", serde_json::to_string(&TickRecord { tick, event })?);
        }
    }

    let summary = FinalRecord {
        ticks: tick,
        snapshot: session.snapshot(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
