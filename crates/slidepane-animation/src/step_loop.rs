//! Port to the host's physics step loop.
//!
//! The core never owns a scheduler; it only opts the simulator in and out of
//! whatever step loop the host runs (frame clock, display link, test
//! harness). Hosts that step unconditionally every frame can use
//! [`NoopStepLoop`].

/// Participation handle for the host step loop.
pub trait StepLoop {
    /// Called when the simulator starts needing step callbacks.
    fn activate(&mut self);

    /// Called when the simulator no longer needs stepping, either because it
    /// settled or was stopped.
    fn deactivate(&mut self);
}

/// Step loop that does nothing; stepping an inactive simulator is a no-op
/// anyway, so hosts without registration semantics need no bookkeeping.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStepLoop;

impl StepLoop for NoopStepLoop {
    fn activate(&mut self) {}

    fn deactivate(&mut self) {}
}
