//! Controller configuration.

use slidepane_animation::{BodySpec, SpringSpec};
use slidepane_foundation::constants::{COMMIT_DISTANCE, OFF_SCREEN_MARGIN, RESISTANCE_FACTOR};

/// Tunables for one pane controller.
///
/// Tests rely on the default values; change them only together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneConfig {
    /// Rubber-band factor for wrong-way drags.
    pub resistance_factor: f32,
    /// Offset past which a non-positive-velocity release commits.
    pub commit_distance: f32,
    /// Margin beyond the half-width for the off-screen settle target.
    pub off_screen_margin: f32,
    /// Settle spring parameters.
    pub spring: SpringSpec,
    /// Simulated body parameters.
    pub body: BodySpec,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            resistance_factor: RESISTANCE_FACTOR,
            commit_distance: COMMIT_DISTANCE,
            off_screen_margin: OFF_SCREEN_MARGIN,
            spring: SpringSpec::pane(),
            body: BodySpec::pane(),
        }
    }
}
