//! Event consumers.
//!
//! A [`Notifier`] turns session events into side effects (sounds, bells,
//! log lines). Delivery is fire-and-forget: a notifier cannot influence the
//! session, and its failures stay inside it.

use crate::events::Event;

pub trait Notifier {
    fn notify(&mut self, event: &Event);
}

/// Deliver each event to the notifier exactly once, in order.
pub fn dispatch<N, I>(notifier: &mut N, events: I)
where
    N: Notifier + ?Sized,
    I: IntoIterator<Item = Event>,
{
    for event in events {
        notifier.notify(&event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _event: &Event) {}
}

/// Reports events through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::PhaseStarted { phase } => {
                tracing::info!(phase = %phase, secs = phase.duration_secs(), "phase started")
            }
            Event::SessionFinished => tracing::info!("session finished"),
        }
    }
}

/// Keeps every event it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub events: Vec<Event>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: &Event) {
        self.events.push(*event);
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, event: &Event) {
        (**self).notify(event)
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, event: &Event) {
        (**self).notify(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Phase;

    #[test]
    fn dispatch_delivers_in_order() {
        let mut recorder = RecordingNotifier::default();
        dispatch(
            &mut recorder,
            [
                Event::PhaseStarted { phase: Phase::Inhale },
                Event::SessionFinished,
            ],
        );
        assert_eq!(
            recorder.events,
            vec![
                Event::PhaseStarted { phase: Phase::Inhale },
                Event::SessionFinished
            ]
        );
    }

    #[test]
    fn boxed_notifier_forwards() {
        let mut boxed: Box<dyn Notifier> = Box::new(NullNotifier);
        boxed.notify(&Event::SessionFinished);
    }
}
