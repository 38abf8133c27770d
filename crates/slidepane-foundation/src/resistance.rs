//! Rubber-band resistance for wrong-way dragging.
//!
//! Dragging the pane rightwards (the disallowed direction) is mapped through
//! a rational curve that yields diminishing visual movement the further the
//! finger travels. Leftward drags pass through untouched.

use crate::constants::RESISTANCE_FACTOR;

/// Resistance curve configuration.
///
/// `factor` controls how quickly the curve flattens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResistance {
    pub factor: f32,
}

impl Default for DragResistance {
    fn default() -> Self {
        Self {
            factor: RESISTANCE_FACTOR,
        }
    }
}

impl DragResistance {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Maps a raw drag distance to the resisted visual offset.
    ///
    /// For `distance <= 0` (the allowed direction) this is the identity. For
    /// `distance > 0` the output stays bounded below `range` however far the
    /// drag travels. A zero `range` is defined as no movement at all.
    pub fn resist(&self, distance: f32, range: f32) -> f32 {
        if distance <= 0.0 {
            return distance;
        }
        if range == 0.0 || !distance.is_finite() || !range.is_finite() {
            return 0.0;
        }
        let k = self.factor;
        (-distance * k * range) / (-distance * k - range)
    }
}
