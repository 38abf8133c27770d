//! Recording doubles for observer and step-loop contracts.

use std::cell::RefCell;
use std::rc::Rc;

use slidepane_animation::StepLoop;
use slidepane_ui::{Outcome, PaneObserver};

/// One observer notification, in delivery order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObservedEvent {
    DragBegan,
    DragChanged(f32),
    DragEnded(Outcome),
    SettleEnded(Outcome),
}

/// Observer that appends every notification to a shared log.
///
/// Clone it before boxing to keep a handle on the log.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<ObservedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.borrow().clone()
    }

    pub fn settle_events(&self) -> Vec<ObservedEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, ObservedEvent::SettleEnded(_)))
            .copied()
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl PaneObserver for RecordingObserver {
    fn on_drag_began(&mut self) {
        self.events.borrow_mut().push(ObservedEvent::DragBegan);
    }

    fn on_drag_changed(&mut self, offset: f32) {
        self.events
            .borrow_mut()
            .push(ObservedEvent::DragChanged(offset));
    }

    fn on_drag_ended(&mut self, outcome: Outcome) {
        self.events
            .borrow_mut()
            .push(ObservedEvent::DragEnded(outcome));
    }

    fn on_settle_ended(&mut self, outcome: Outcome) {
        self.events
            .borrow_mut()
            .push(ObservedEvent::SettleEnded(outcome));
    }
}

/// Activation/deactivation tallies for a [`CountingLoop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopCounts {
    pub activated: usize,
    pub deactivated: usize,
}

/// Step loop that only counts the calls it receives.
///
/// Clone it before boxing to keep a handle on the counts.
#[derive(Clone, Default)]
pub struct CountingLoop {
    counts: Rc<RefCell<LoopCounts>>,
}

impl CountingLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> LoopCounts {
        *self.counts.borrow()
    }
}

impl StepLoop for CountingLoop {
    fn activate(&mut self) {
        self.counts.borrow_mut().activated += 1;
    }

    fn deactivate(&mut self) {
        self.counts.borrow_mut().deactivated += 1;
    }
}
