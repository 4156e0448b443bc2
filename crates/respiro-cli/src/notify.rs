//! Terminal-side notifiers.
//!
//! [`CueNotifier`] owns the per-phase cue resources (bell, sound files,
//! player processes). It lives and dies independently of the session it
//! listens to, and never reports back.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use respiro_core::storage::{CueConfig, NotificationsConfig};
use respiro_core::{Event, Notifier};
use serde::Serialize;

pub struct CueNotifier {
    bell: bool,
    player: Option<Vec<String>>,
    cues: CueConfig,
    /// Player processes still running.
    playing: Vec<Child>,
}

impl CueNotifier {
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let player = config
            .player
            .as_deref()
            .map(|cmd| cmd.split_whitespace().map(String::from).collect::<Vec<_>>())
            .filter(|argv| !argv.is_empty());
        Self {
            bell: config.bell,
            player,
            cues: config.cues.clone(),
            playing: Vec::new(),
        }
    }

    fn cue_for(&self, event: &Event) -> Option<&str> {
        match event {
            Event::PhaseStarted { phase } => self.cues.for_phase(*phase),
            Event::SessionFinished => self.cues.finish.as_deref(),
        }
    }

    fn reap(&mut self) {
        self.playing
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }

    fn play(&mut self, path: &str) {
        let Some(argv) = &self.player else {
            return;
        };
        let spawned = Command::new(&argv[0])
            .args(&argv[1..])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.playing.push(child),
            Err(e) => tracing::warn!(player = %argv[0], path, error = %e, "failed to start cue player"),
        }
    }
}

impl Notifier for CueNotifier {
    fn notify(&mut self, event: &Event) {
        self.reap();
        if self.bell {
            let mut stderr = std::io::stderr();
            let _ = stderr.write_all(b"\x07");
            let _ = stderr.flush();
        }
        if let Some(path) = self.cue_for(event).map(str::to_owned) {
            self.play(&path);
        }
    }
}

/// Writes every event as a JSON line on stdout.
pub struct JsonEventLog;

#[derive(Serialize)]
struct EventRecord<'a> {
    at: chrono::DateTime<chrono::Utc>,
    event: &'a Event,
}

impl Notifier for JsonEventLog {
    fn notify(&mut self, event: &Event) {
        let record = EventRecord {
            at: chrono::Utc::now(),
            event,
        };
        match serde_json::to_string(&record) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to encode event"),
        }
    }
}

/// Forwards each event to every inner notifier.
#[derive(Default)]
pub struct Fanout(pub Vec<Box<dyn Notifier + Send>>);

impl Notifier for Fanout {
    fn notify(&mut self, event: &Event) {
        for notifier in &mut self.0 {
            notifier.notify(event);
        }
    }
}
