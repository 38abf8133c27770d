//! Robot-style driver for a real drag controller.
//!
//! Scripts gestures and pumps frames the way a host would, so tests read as
//! interactions rather than state-machine plumbing:
//!
//! ```
//! use slidepane_testing::PaneRobot;
//!
//! let mut robot = PaneRobot::new(0.0, 300.0);
//! robot.begin().drag_to(-150.0).release(-5.0).settle();
//! assert_eq!(robot.offset(), -170.0);
//! ```

use slidepane_foundation::GestureSample;
use slidepane_ui::{DragController, DragPhase, PaneConfig};

use crate::recording::{CountingLoop, LoopCounts, ObservedEvent, RecordingObserver};

/// Frame delta the robot steps with, in seconds.
pub const FRAME: f32 = 1.0 / 60.0;

/// Settling longer than this many frames is a non-terminating simulation.
const FRAME_CAP: usize = 6_000;

pub struct PaneRobot {
    controller: DragController,
    observer: RecordingObserver,
    step_loop: CountingLoop,
}

impl PaneRobot {
    pub fn new(rest_offset: f32, width: f32) -> Self {
        Self::with_config(rest_offset, width, PaneConfig::default())
    }

    pub fn with_config(rest_offset: f32, width: f32, config: PaneConfig) -> Self {
        let observer = RecordingObserver::new();
        let step_loop = CountingLoop::new();
        let mut controller =
            DragController::with_step_loop(rest_offset, width, config, Box::new(step_loop.clone()));
        controller.set_observer(Box::new(observer.clone()));
        Self {
            controller,
            observer,
            step_loop,
        }
    }

    pub fn begin(&mut self) -> &mut Self {
        self.controller.on_gesture(GestureSample::began());
        self
    }

    pub fn drag_to(&mut self, translation: f32) -> &mut Self {
        self.controller.on_gesture(GestureSample::changed(translation));
        self
    }

    pub fn release(&mut self, velocity: f32) -> &mut Self {
        let translation = self.controller.offset();
        self.controller
            .on_gesture(GestureSample::ended(translation, velocity));
        self
    }

    /// Pumps frames until the controller is idle again.
    ///
    /// Panics if the simulation does not terminate within the frame cap.
    pub fn settle(&mut self) -> &mut Self {
        for _ in 0..FRAME_CAP {
            self.controller.on_frame(FRAME);
            if self.controller.phase() == DragPhase::Idle {
                return self;
            }
        }
        panic!("pane did not settle within {FRAME_CAP} frames");
    }

    /// Pumps a fixed number of frames without requiring quiescence.
    pub fn pump(&mut self, frames: usize) -> &mut Self {
        for _ in 0..frames {
            self.controller.on_frame(FRAME);
        }
        self
    }

    pub fn offset(&self) -> f32 {
        self.controller.offset()
    }

    pub fn phase(&self) -> DragPhase {
        self.controller.phase()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.observer.events()
    }

    pub fn settle_events(&self) -> Vec<ObservedEvent> {
        self.observer.settle_events()
    }

    pub fn loop_counts(&self) -> LoopCounts {
        self.step_loop.counts()
    }

    pub fn controller_mut(&mut self) -> &mut DragController {
        &mut self.controller
    }
}
