//! Damped-spring simulator for one point body.

use std::f32::consts::TAU;

use crate::spring::{BodySpec, SpringSpec, REST_DISPLACEMENT, REST_VELOCITY};
use crate::step_loop::{NoopStepLoop, StepLoop};

/// Fixed internal substep in seconds. Host step deltas are sliced to this so
/// integration stays stable regardless of frame pacing.
const SUBSTEP: f32 = 1.0 / 60.0;

/// Result of advancing the simulation by one host step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Not attached; nothing moved.
    Idle,
    /// Attached and still in motion.
    Active,
    /// Came to rest during this step. Reported exactly once per activation;
    /// the simulator is inactive again afterwards.
    Settled,
}

/// One simulated body under a damped spring anchored to a movable target,
/// with additional air-drag velocity decay.
///
/// The simulator never schedules itself; the host calls [`step`] while the
/// attached [`StepLoop`] is active.
///
/// [`step`]: SpringSimulator::step
pub struct SpringSimulator {
    spring: SpringSpec,
    body: BodySpec,
    position: f32,
    velocity: f32,
    target: f32,
    active: bool,
    step_loop: Box<dyn StepLoop>,
}

impl SpringSimulator {
    pub fn new(spring: SpringSpec, body: BodySpec) -> Self {
        Self::with_step_loop(spring, body, Box::new(NoopStepLoop))
    }

    pub fn with_step_loop(spring: SpringSpec, body: BodySpec, step_loop: Box<dyn StepLoop>) -> Self {
        Self {
            spring,
            body,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            active: false,
            step_loop,
        }
    }

    /// Anchors the spring to `target` and adds `velocity_delta` to the body's
    /// current velocity, so a fast release carries its momentum into the
    /// spring motion.
    ///
    /// Activates step-loop participation if not already active. Calling while
    /// active re-targets in place; nothing restarts or duplicates.
    pub fn attach(&mut self, target: f32, velocity_delta: f32) {
        self.target = target;
        self.velocity += velocity_delta;
        if !self.active {
            self.active = true;
            self.step_loop.activate();
        }
    }

    /// Sets the body's velocity to an absolute value.
    ///
    /// Expressed as a delta against the current velocity and applied through
    /// the same additive path as [`attach`], matching backends that only
    /// expose additive velocity impulses.
    ///
    /// [`attach`]: SpringSimulator::attach
    pub fn set_velocity(&mut self, velocity: f32) {
        let delta = velocity - self.velocity;
        self.velocity += delta;
    }

    /// Places the body before attaching. Ignored (with a warning) while the
    /// simulation is running; the spring owns the position then.
    pub fn set_position(&mut self, position: f32) {
        if self.active {
            log::warn!("set_position while simulation is active, ignoring");
            return;
        }
        self.position = position;
    }

    /// Detaches from the step loop. The body keeps its last position and
    /// velocity; no settle report fires for the abandoned activation.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.step_loop.deactivate();
        }
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Integrates with semi-implicit Euler in fixed substeps. When both the
    /// spring stretch and the body speed have decayed below the rest
    /// thresholds, the body snaps to the target (with a zero rest length;
    /// a slack spring leaves it where it stopped), the step loop is
    /// released, and [`StepPhase::Settled`] is reported, once per
    /// activation.
    pub fn step(&mut self, dt: f32) -> StepPhase {
        if !self.active {
            return StepPhase::Idle;
        }
        if !(dt > 0.0) {
            return StepPhase::Active;
        }

        let omega = TAU * self.spring.frequency;
        let damping = 2.0 * self.spring.damping_ratio * omega;
        let drag = self.body.resistance / self.body.density;

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = SUBSTEP.min(remaining);
            let stretch = self.displacement();
            let accel = -omega * omega * stretch - (damping + drag) * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.at_rest() {
            if self.spring.rest_length == 0.0 {
                self.position = self.target;
            }
            self.velocity = 0.0;
            self.active = false;
            self.step_loop.deactivate();
            log::trace!("spring settled at {}", self.target);
            return StepPhase::Settled;
        }
        StepPhase::Active
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Signed spring stretch past the rest length.
    fn displacement(&self) -> f32 {
        let offset = self.position - self.target;
        if self.spring.rest_length == 0.0 {
            return offset;
        }
        let stretch = offset.abs() - self.spring.rest_length;
        if stretch <= 0.0 {
            0.0
        } else {
            stretch.copysign(offset)
        }
    }

    fn at_rest(&self) -> bool {
        self.displacement().abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_VELOCITY
    }
}

#[cfg(test)]
#[path = "tests/simulator_tests.rs"]
mod tests;
