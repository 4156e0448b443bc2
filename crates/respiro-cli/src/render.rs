use respiro_core::{SessionSnapshot, SessionState};
use serde::Serialize;

/// Presentation of snapshots on stdout, one line per update.
pub struct Renderer {
    json: bool,
    show_phase_countdown: bool,
}

#[derive(Serialize)]
struct SnapshotRecord<'a> {
    at: chrono::DateTime<chrono::Utc>,
    snapshot: &'a SessionSnapshot,
}

impl Renderer {
    pub fn new(json: bool, show_phase_countdown: bool) -> Self {
        Self {
            json,
            show_phase_countdown,
        }
    }

    pub fn render(&self, snapshot: &SessionSnapshot) {
        if self.json {
            let record = SnapshotRecord {
                at: chrono::Utc::now(),
                snapshot,
            };
            match serde_json::to_string(&record) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(error = %e, "failed to encode snapshot"),
            }
        } else {
            println!("{}", self.line(snapshot));
        }
    }

    pub fn line(&self, snapshot: &SessionSnapshot) -> String {
        match snapshot.state {
            SessionState::Unconfigured => "Not configured".to_string(),
            SessionState::CountingDown => format!("Starting in {}", snapshot.countdown_remaining),
            SessionState::Running => {
                let phase = snapshot.current_phase.map(|p| p.label()).unwrap_or_default();
                if self.show_phase_countdown {
                    format!(
                        "{:<7} {}s / {}s   remaining {}",
                        phase,
                        snapshot.phase_remaining,
                        snapshot.phase_duration,
                        snapshot.remaining_clock()
                    )
                } else {
                    format!("{:<7} remaining {}", phase, snapshot.remaining_clock())
                }
            }
            SessionState::Paused => format!(
                "Paused  remaining {}  (p to resume, q to quit)",
                snapshot.remaining_clock()
            ),
            SessionState::Finished => "Session complete".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respiro_core::SessionController;

    #[test]
    fn countdown_line() {
        let mut session = SessionController::new();
        session.configure(60).unwrap();
        let renderer = Renderer::new(false, true);
        assert_eq!(renderer.line(&session.snapshot()), "Starting in 5");
    }

    #[test]
    fn running_line_shows_phase_countdown() {
        let mut session = SessionController::new();
        session.configure(60).unwrap();
        for _ in 0..6 {
            session.tick();
        }
        let renderer = Renderer::new(false, true);
        assert_eq!(
            renderer.line(&session.snapshot()),
            "Inhale  3s / 4s   remaining 0:59"
        );

        let renderer = Renderer::new(false, false);
        assert_eq!(renderer.line(&session.snapshot()), "Inhale  remaining 0:59");
    }

    #[test]
    fn paused_line() {
        let mut session = SessionController::new();
        session.configure(60).unwrap();
        for _ in 0..5 {
            session.tick();
        }
        session.pause();
        let renderer = Renderer::new(false, true);
        assert!(renderer.line(&session.snapshot()).starts_with("Paused  remaining 1:00"));
    }
}
