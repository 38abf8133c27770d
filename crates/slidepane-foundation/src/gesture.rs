//! Gesture phase and sample types delivered by the host's gesture layer.

/// Discrete phase of a horizontal pan gesture.
///
/// The host is responsible for phase ordering: `Began`, then zero or more
/// `Changed`, then exactly one `Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
}

/// One gesture event as reported by the host.
///
/// `translation` is the cumulative horizontal displacement since the gesture
/// started. `velocity` is the instantaneous horizontal velocity and is only
/// meaningful on an [`GesturePhase::Ended`] sample. Samples are transient;
/// nothing in the core retains them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub translation: f32,
    pub velocity: f32,
}

impl GestureSample {
    pub fn began() -> Self {
        Self {
            phase: GesturePhase::Began,
            translation: 0.0,
            velocity: 0.0,
        }
    }

    pub fn changed(translation: f32) -> Self {
        Self {
            phase: GesturePhase::Changed,
            translation,
            velocity: 0.0,
        }
    }

    pub fn ended(translation: f32, velocity: f32) -> Self {
        Self {
            phase: GesturePhase::Ended,
            translation,
            velocity,
        }
    }
}
