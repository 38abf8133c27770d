//! Shared gesture constants for consistent pane behavior.
//!
//! These values are in logical pixels (or logical pixels per second) in the
//! host's coordinate space. They are hoisted here so the controller, the
//! tests, and any host-side gesture plumbing agree on the same numbers.

/// Resistance factor applied when dragging in the disallowed direction.
///
/// Feeds the rational rubber-band curve in [`crate::resistance`]. Larger
/// values make the pane feel stiffer; 0.55 gives the familiar iOS-style
/// rubber-band feel.
pub const RESISTANCE_FACTOR: f32 = 0.55;

/// Offset past which a leftward release commits the dismissal.
///
/// A drag that releases with non-positive velocity while the pane sits left
/// of this offset is treated as an intentional dismiss rather than an
/// accidental drag.
pub const COMMIT_DISTANCE: f32 = -100.0;

/// Extra margin added beyond the half-width when animating off-screen, so the
/// settled pane is unambiguously outside the viewport.
pub const OFF_SCREEN_MARGIN: f32 = 20.0;

/// Maximum release velocity in logical pixels per second.
///
/// Hosts estimating release velocity with [`crate::VelocityTracker`] should
/// clamp to this before handing the sample to the controller, so a noisy
/// tracker cannot launch the pane at absurd speed.
pub const MAX_RELEASE_VELOCITY: f32 = 8_000.0;
