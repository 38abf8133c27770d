//! The drag-to-physics state machine.

use slidepane_animation::{SpringSimulator, StepLoop, StepPhase};
use slidepane_foundation::{DragResistance, GesturePhase, GestureSample};

use crate::config::PaneConfig;
use crate::observer::{Outcome, PaneObserver};
use crate::pane_state::{OffsetAuthor, PaneState};

/// Controller phase. Cyclic: every drag ends back in `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Settling,
}

/// Translates gesture phases into pane motion.
///
/// While `Dragging` the controller writes the pane offset directly through
/// the resistance curve. At release it decides the outcome, notifies the
/// observer immediately, and hands the pane to the spring simulator; while
/// `Settling` the simulator is the sole writer until it reports rest.
pub struct DragController {
    pane: PaneState,
    phase: DragPhase,
    config: PaneConfig,
    resistance: DragResistance,
    simulator: SpringSimulator,
    observer: Option<Box<dyn PaneObserver>>,
    enabled: bool,
}

impl DragController {
    pub fn new(rest_offset: f32, width: f32, config: PaneConfig) -> Self {
        let simulator = SpringSimulator::new(config.spring, config.body);
        Self::build(rest_offset, width, config, simulator)
    }

    /// Like [`new`], with the simulator wired into a host step loop.
    ///
    /// [`new`]: DragController::new
    pub fn with_step_loop(
        rest_offset: f32,
        width: f32,
        config: PaneConfig,
        step_loop: Box<dyn StepLoop>,
    ) -> Self {
        let simulator = SpringSimulator::with_step_loop(config.spring, config.body, step_loop);
        Self::build(rest_offset, width, config, simulator)
    }

    fn build(rest_offset: f32, width: f32, config: PaneConfig, simulator: SpringSimulator) -> Self {
        if rest_offset < 0.0 {
            // The settle outcome is re-derived from `target < 0`; a negative
            // rest offset would make a cancelled settle read as committed.
            log::warn!("rest offset {rest_offset} is negative; settle outcomes will disagree");
        }
        Self {
            pane: PaneState::new(rest_offset, width),
            phase: DragPhase::Idle,
            resistance: DragResistance::new(config.resistance_factor),
            config,
            simulator,
            observer: None,
            enabled: true,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn PaneObserver>) {
        self.observer = Some(observer);
    }

    /// Gates gesture delivery, mirroring a host-side recognizer enable flag.
    /// An in-flight settle still runs to completion while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn offset(&self) -> f32 {
        self.pane.current_offset()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn pane(&self) -> &PaneState {
        &self.pane
    }

    /// Inbound gesture phase from the host.
    pub fn on_gesture(&mut self, sample: GestureSample) {
        if !self.enabled {
            log::trace!("gesture {:?} ignored while disabled", sample.phase);
            return;
        }
        match sample.phase {
            GesturePhase::Began => self.begin_drag(),
            GesturePhase::Changed => self.apply_drag(sample.translation),
            GesturePhase::Ended => self.release(sample.velocity),
        }
    }

    /// Inbound physics step from the host loop, `dt` in seconds.
    pub fn on_frame(&mut self, dt: f32) {
        if self.phase != DragPhase::Settling {
            return;
        }
        match self.simulator.step(dt) {
            StepPhase::Idle => {
                log::warn!("settling with an inactive simulator");
            }
            StepPhase::Active => {
                self.pane
                    .write_offset(OffsetAuthor::Spring, self.simulator.position());
            }
            StepPhase::Settled => self.finish_settle(),
        }
    }

    fn begin_drag(&mut self) {
        match self.phase {
            DragPhase::Settling => {
                // New drag takes precedence; kill the in-flight simulation
                // before any offset math. No settle notification fires.
                self.simulator.stop();
            }
            DragPhase::Dragging => {
                log::warn!("gesture began while already dragging, ignoring");
                return;
            }
            DragPhase::Idle => {}
        }
        self.phase = DragPhase::Dragging;
        self.pane.grant(OffsetAuthor::Gesture);
        log::trace!("drag began");
        self.notify(|observer| observer.on_drag_began());
    }

    fn apply_drag(&mut self, translation: f32) {
        if self.phase != DragPhase::Dragging {
            log::warn!("gesture changed outside of a drag, ignoring");
            return;
        }
        let resisted = self.resistance.resist(translation, self.pane.width());
        self.pane.write_offset(OffsetAuthor::Gesture, resisted);
        self.notify(|observer| observer.on_drag_changed(resisted));
    }

    fn release(&mut self, velocity: f32) {
        if self.phase != DragPhase::Dragging {
            log::warn!("gesture ended outside of a drag, ignoring");
            return;
        }

        let committed = velocity <= 0.0 && self.pane.current_offset() < self.config.commit_distance;
        let outcome = if committed {
            Outcome::Committed
        } else {
            Outcome::Cancelled
        };
        // Fires at release, before the settle animation completes.
        self.notify(|observer| observer.on_drag_ended(outcome));

        let target = match outcome {
            Outcome::Committed => -self.pane.width() / 2.0 - self.config.off_screen_margin,
            Outcome::Cancelled => self.pane.rest_offset(),
        };
        log::debug!(
            "drag ended: outcome {:?}, velocity {velocity}, target {target}",
            outcome
        );

        self.pane.grant(OffsetAuthor::Spring);
        self.simulator.set_position(self.pane.current_offset());
        let velocity_delta = velocity - self.simulator.velocity();
        self.simulator.attach(target, velocity_delta);
        self.phase = DragPhase::Settling;
    }

    fn finish_settle(&mut self) {
        self.pane
            .write_offset(OffsetAuthor::Spring, self.simulator.position());
        // Independently re-derived from the target's side of the screen;
        // must agree with the outcome computed at release.
        let outcome = if self.simulator.target() < 0.0 {
            Outcome::Committed
        } else {
            Outcome::Cancelled
        };
        self.pane.grant(OffsetAuthor::Nobody);
        self.phase = DragPhase::Idle;
        log::debug!("settled at {} as {:?}", self.pane.current_offset(), outcome);
        self.notify(|observer| observer.on_settle_ended(outcome));
    }

    fn notify(&mut self, event: impl FnOnce(&mut dyn PaneObserver)) {
        if let Some(observer) = self.observer.as_deref_mut() {
            event(observer);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
