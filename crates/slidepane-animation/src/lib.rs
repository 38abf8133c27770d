//! Spring physics for Slidepane settle animations.
//!
//! One simulated point body, one damped spring anchored to a movable target,
//! plus air-drag-like velocity decay. The host environment owns the step
//! scheduling; this crate only integrates when stepped and says when the
//! body has come to rest.

pub mod simulator;
pub mod spring;
pub mod step_loop;

pub use simulator::{SpringSimulator, StepPhase};
pub use spring::{BodySpec, SpringSpec};
pub use step_loop::{NoopStepLoop, StepLoop};
