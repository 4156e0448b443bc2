//! Property tests for the session controller invariants.

use proptest::prelude::*;
use respiro_core::{Event, Phase, SessionController, SessionState, COUNTDOWN_SECS};

#[derive(Debug, Clone, Copy)]
enum Op {
    Tick,
    Pause,
    Resume,
    Toggle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => Just(Op::Tick),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
        1 => Just(Op::Toggle),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn running_after_exactly_five_ticks(total in 1u64..100_000) {
        let mut session = SessionController::new();
        session.configure(total).unwrap();
        for _ in 0..COUNTDOWN_SECS - 1 {
            prop_assert_eq!(session.tick(), None);
            prop_assert_eq!(session.state(), SessionState::CountingDown);
        }
        prop_assert_eq!(session.tick(), Some(Event::PhaseStarted { phase: Phase::Inhale }));
        prop_assert_eq!(session.state(), SessionState::Running);
        prop_assert_eq!(session.current_phase(), Some(Phase::Inhale));
        prop_assert_eq!(session.phase_elapsed(), 0);
        prop_assert_eq!(session.total_seconds_remaining(), total);
    }

    #[test]
    fn invariants_hold_under_random_commands(
        total in 1u64..400,
        ops in prop::collection::vec(op_strategy(), 0..600),
    ) {
        let mut session = SessionController::new();
        session.configure(total).unwrap();
        let mut phases = Vec::new();
        let mut finished_events = 0;

        for op in ops {
            let before = session.snapshot();
            let event = match op {
                Op::Tick => session.tick(),
                Op::Pause => { session.pause(); None }
                Op::Resume => { session.resume(); None }
                Op::Toggle => { session.toggle_pause(); None }
            };
            let after = session.snapshot();

            prop_assert!(after.total_seconds_remaining <= before.total_seconds_remaining);
            if let Some(phase) = after.current_phase {
                prop_assert!(after.phase_elapsed < phase.duration_secs());
            }

            match (op, before.state) {
                (Op::Tick, SessionState::Running) => {
                    prop_assert_eq!(
                        after.total_seconds_remaining,
                        before.total_seconds_remaining - 1
                    );
                }
                (Op::Tick, SessionState::Paused) => prop_assert_eq!(after, before),
                (Op::Tick, _) => {
                    prop_assert_eq!(after.total_seconds_remaining, before.total_seconds_remaining);
                }
                _ => {
                    // Commands never move time.
                    prop_assert_eq!(after.total_seconds_remaining, before.total_seconds_remaining);
                    prop_assert_eq!(after.phase_elapsed, before.phase_elapsed);
                    prop_assert_eq!(after.countdown_remaining, before.countdown_remaining);
                }
            }

            match event {
                Some(Event::PhaseStarted { phase }) => phases.push(phase),
                Some(Event::SessionFinished) => {
                    finished_events += 1;
                    prop_assert_eq!(after.total_seconds_remaining, 0);
                    prop_assert_eq!(after.state, SessionState::Finished);
                }
                None => {}
            }
            prop_assert_eq!(
                after.total_seconds_remaining == 0,
                after.state == SessionState::Finished
            );
        }

        prop_assert!(finished_events <= 1);
        for (i, phase) in phases.iter().enumerate() {
            prop_assert_eq!(*phase, Phase::ALL[i % 3]);
        }
    }

    #[test]
    fn finishes_after_countdown_plus_total(total in 1u64..2_000) {
        let mut session = SessionController::new();
        session.configure(total).unwrap();
        let ticks = COUNTDOWN_SECS as u64 + total;
        let mut finished_at = None;
        for i in 1..=ticks + 10 {
            if session.tick() == Some(Event::SessionFinished) {
                finished_at = Some(i);
            }
        }
        prop_assert_eq!(finished_at, Some(ticks));
    }
}
