//! End-to-end session scenarios driven tick by tick.

use respiro_core::{
    dispatch, Event, Phase, RecordingNotifier, SessionController, SessionState, CYCLE_SECS,
};

fn tick_n(session: &mut SessionController, n: u64) -> Vec<Event> {
    (0..n).filter_map(|_| session.tick()).collect()
}

#[test]
fn one_minute_session_timeline() {
    let mut session = SessionController::new();
    session.configure_minutes(1).unwrap();

    let events = tick_n(&mut session, 5);
    assert_eq!(events, vec![Event::PhaseStarted { phase: Phase::Inhale }]);
    let snap = session.snapshot();
    assert_eq!(snap.state, SessionState::Running);
    assert_eq!(snap.current_phase, Some(Phase::Inhale));
    assert_eq!(snap.phase_elapsed, 0);
    assert_eq!(snap.total_seconds_remaining, 60);

    let events = tick_n(&mut session, 4);
    assert_eq!(events, vec![Event::PhaseStarted { phase: Phase::Hold }]);
    let snap = session.snapshot();
    assert_eq!(snap.current_phase, Some(Phase::Hold));
    assert_eq!(snap.phase_elapsed, 0);
    assert_eq!(snap.phase_remaining, 7);
    assert_eq!(snap.total_seconds_remaining, 56);
    assert_eq!(snap.remaining_clock(), "0:56");

    let events = tick_n(&mut session, 56);
    assert_eq!(events.last(), Some(&Event::SessionFinished));
    let snap = session.snapshot();
    assert_eq!(snap.state, SessionState::Finished);
    assert_eq!(snap.total_seconds_remaining, 0);
    assert_eq!(snap.progress_pct, 100.0);
}

#[test]
fn phase_events_cycle_in_order() {
    let mut session = SessionController::new();
    session.configure_minutes(5).unwrap();
    let mut recorder = RecordingNotifier::default();
    dispatch(&mut recorder, tick_n(&mut session, 5 + 300));

    let phases: Vec<Phase> = recorder.events.iter().filter_map(Event::phase).collect();
    assert_eq!(recorder.events.last(), Some(&Event::SessionFinished));
    // Opening inhale, 15 full cycles, then Hold and Exhale of the 16th.
    assert_eq!(phases.len() as u32, 1 + 300 / CYCLE_SECS * 3 + 2);
    for pair in phases.windows(2) {
        assert_eq!(pair[1], pair[0].next());
    }
}

#[test]
fn resume_while_running_changes_nothing() {
    let mut session = SessionController::new();
    session.configure_minutes(5).unwrap();
    tick_n(&mut session, 12);
    let before = session.snapshot();
    assert!(!session.resume());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn rapid_pause_resume_loses_no_ticks() {
    let mut session = SessionController::new();
    session.configure(60).unwrap();
    tick_n(&mut session, 5);
    for _ in 0..10 {
        session.pause();
        session.resume();
        session.tick();
    }
    assert_eq!(session.total_seconds_remaining(), 50);
}
