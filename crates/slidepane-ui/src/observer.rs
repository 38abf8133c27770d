//! Observer contract for pane phase transitions.

/// How a drag cycle resolved. Derived once from the release sample; the
/// settle notification re-derives it independently from the settle target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The pane returns to its resting position.
    Cancelled,
    /// The pane animates fully off-screen.
    Committed,
}

/// Receiver for drag/settle notifications.
///
/// The began/changed callbacks are optional and default to no-ops. The ended
/// callbacks are the mandatory part of the contract: `on_drag_ended` fires
/// immediately at release, before the settle animation completes, and
/// `on_settle_ended` fires when the spring comes to rest. A controller
/// without a registered observer drops all notifications silently.
pub trait PaneObserver {
    fn on_drag_began(&mut self) {}

    fn on_drag_changed(&mut self, _offset: f32) {}

    fn on_drag_ended(&mut self, outcome: Outcome);

    fn on_settle_ended(&mut self, outcome: Outcome);
}
