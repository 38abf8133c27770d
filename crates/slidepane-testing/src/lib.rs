//! Testing utilities and harness for Slidepane.
//!
//! Provides a robot-style API for driving a real [`slidepane_ui::DragController`]
//! through scripted gestures and frame steps, with recorded observer events
//! and step-loop bookkeeping for assertions.

pub mod recording;
pub mod robot;

pub use recording::{CountingLoop, LoopCounts, ObservedEvent, RecordingObserver};
pub use robot::PaneRobot;

pub mod prelude {
    pub use crate::recording::*;
    pub use crate::robot::*;
}
