//! Fire-and-forget feedback events.

use crate::Line;

/// A discrete cue emitted by the engine for the presentation layer's
/// audio/visual feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A number was successfully placed on the board.
    Placed,
    /// A line's aggregate just reached the target value.
    LineCompleted(Line),
    /// The whole board just reached the target. Emitted at most once per
    /// session.
    Won,
}

/// Receiver for [`GameEvent`] cues.
///
/// Injected into the engine at construction so there is no process-wide
/// audio singleton; test doubles simply record the events. Sinks are
/// fire-and-forget: the engine never reads anything back and its state
/// is unaffected by whatever the sink does.
pub trait FeedbackSink {
    /// Delivers one event.
    fn notify(&mut self, event: GameEvent);
}

/// A sink that drops every event. Used when no feedback is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}

impl<F> FeedbackSink for F
where
    F: FnMut(GameEvent),
{
    fn notify(&mut self, event: GameEvent) {
        self(event);
    }
}
