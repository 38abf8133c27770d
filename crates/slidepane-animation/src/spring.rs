//! Spring and body parameter specs.

/// Damped-spring attachment parameters.
///
/// `frequency` is the undamped oscillation frequency in Hz; stiffness is
/// derived from it per unit mass (`k = (2πf)²·m`). `damping_ratio` below 1.0
/// is under-damped (bouncy). `rest_length` is the anchor offset the spring
/// maintains; zero pulls the body all the way to the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub frequency: f32,
    pub damping_ratio: f32,
    pub rest_length: f32,
}

impl SpringSpec {
    /// The pane settle spring: lively but strongly decayed.
    pub fn pane() -> Self {
        Self {
            frequency: 3.0,
            damping_ratio: 0.4,
            rest_length: 0.0,
        }
    }

    /// A critically damped spring (no overshoot); used by tests that want a
    /// monotonic approach.
    pub fn critically_damped() -> Self {
        Self {
            frequency: 3.0,
            damping_ratio: 1.0,
            rest_length: 0.0,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::pane()
    }
}

/// Simulated body parameters.
///
/// `resistance` is a linear air-drag coefficient applied to the body's
/// velocity on top of the spring damping, so motion decays even while the
/// spring force is small.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub density: f32,
    pub resistance: f32,
}

impl BodySpec {
    pub fn pane() -> Self {
        Self {
            density: 1.0,
            resistance: 2.0,
        }
    }
}

impl Default for BodySpec {
    fn default() -> Self {
        Self::pane()
    }
}

/// Displacement below which the spring is considered relaxed, in units.
pub const REST_DISPLACEMENT: f32 = 0.5;

/// Speed below which the body is considered stopped, in units per second.
pub const REST_VELOCITY: f32 = 0.5;
