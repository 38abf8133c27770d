//! Foundation types for Slidepane: gesture samples, drag resistance, and
//! release-velocity tracking.
//!
//! Everything in this crate is host-agnostic: the gesture layer that produces
//! samples and the render layer that consumes offsets live outside the
//! workspace.

pub mod constants;
pub mod gesture;
pub mod resistance;
pub mod velocity_tracker;

pub use gesture::{GesturePhase, GestureSample};
pub use resistance::DragResistance;
pub use velocity_tracker::VelocityTracker;
