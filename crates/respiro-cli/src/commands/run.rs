use std::io::BufRead;
use std::time::Duration;

use clap::Args;
use respiro_core::{
    command_channel, Config, LogNotifier, Notifier, RunnerCommand, SessionRunner,
};
use tokio::sync::mpsc;

use crate::notify::{CueNotifier, Fanout, JsonEventLog};
use crate::render::Renderer;

#[derive(Args)]
pub struct RunArgs {
    /// Session length in minutes (defaults to session.default_minutes)
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,
    /// Length of one time-unit in milliseconds (defaults to session.tick_ms)
    #[arg(long)]
    pub tick_ms: Option<u64>,
    /// Print snapshots and events as JSON lines
    #[arg(long)]
    pub json: bool,
    /// Disable bell and sound cues
    #[arg(long)]
    pub quiet: bool,
}

/// Map a line typed by the user to a runner command.
fn parse_command(line: &str) -> Option<RunnerCommand> {
    match line.trim() {
        "" | "p" => Some(RunnerCommand::TogglePause),
        "pause" => Some(RunnerCommand::Pause),
        "resume" => Some(RunnerCommand::Resume),
        "q" | "quit" | "exit" => Some(RunnerCommand::Quit),
        _ => None,
    }
}

/// Forward stdin lines as commands from a plain thread; stdin reads block.
fn spawn_stdin_reader(tx: mpsc::Sender<RunnerCommand>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(command) => {
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
                None => tracing::debug!(input = %line, "ignored input"),
            }
        }
    });
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let session = config.new_session(args.minutes)?;

    let period = match args.tick_ms {
        Some(0) => return Err("tick period must be positive".into()),
        Some(ms) => Duration::from_millis(ms),
        None => config.tick_period(),
    };

    let mut notifiers: Vec<Box<dyn Notifier + Send>> = vec![Box::new(LogNotifier)];
    if args.json {
        notifiers.push(Box::new(JsonEventLog));
    }
    if config.notifications.enabled && !args.quiet {
        notifiers.push(Box::new(CueNotifier::from_config(&config.notifications)));
    }

    let renderer = Renderer::new(args.json, config.display.show_phase_countdown);
    if !args.json {
        eprintln!("Press Enter or p to pause/resume, q to quit.");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(async {
        let (tx, rx) = command_channel();
        spawn_stdin_reader(tx.clone());
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(RunnerCommand::Quit).await;
            }
        });

        let mut runner = SessionRunner::new(session, Fanout(notifiers), period);
        runner.run(rx, |snapshot| renderer.render(snapshot)).await
    });

    if !outcome.finished && !args.json {
        println!(
            "Stopped with {} remaining",
            outcome.snapshot.remaining_clock()
        );
    }
    Ok(())
}
