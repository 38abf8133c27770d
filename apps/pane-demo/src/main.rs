//! Scripted drive of the pane controller: one cancelled drag, one committed
//! swipe, frames paced off a real clock. Run with `RUST_LOG=trace` to see the
//! controller's transition logging.

use slidepane_foundation::constants::MAX_RELEASE_VELOCITY;
use slidepane_foundation::{GestureSample, VelocityTracker};
use slidepane_ui::{DragController, DragPhase, Outcome, PaneConfig, PaneObserver};
use web_time::Instant;

const PANE_WIDTH: f32 = 320.0;

struct PrintingObserver;

impl PaneObserver for PrintingObserver {
    fn on_drag_began(&mut self) {
        println!("  drag began");
    }

    fn on_drag_changed(&mut self, offset: f32) {
        println!("  drag changed: offset {offset:.1}");
    }

    fn on_drag_ended(&mut self, outcome: Outcome) {
        println!("  drag ended: {outcome:?}");
    }

    fn on_settle_ended(&mut self, outcome: Outcome) {
        println!("  settled: {outcome:?}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut controller = DragController::new(0.0, PANE_WIDTH, PaneConfig::default());
    controller.set_observer(Box::new(PrintingObserver));

    println!("slow short drag (should cancel):");
    run_gesture(&mut controller, &[(0, 0.0), (40, -20.0), (80, -45.0), (120, -60.0)]);

    println!("fast long swipe (should commit):");
    run_gesture(
        &mut controller,
        &[(0, 0.0), (30, -60.0), (60, -130.0), (90, -210.0)],
    );
}

/// Feeds a scripted gesture as (time ms, translation) pairs, estimating the
/// release velocity from the samples, then pumps frames until the pane
/// settles.
fn run_gesture(controller: &mut DragController, samples: &[(i64, f32)]) {
    let last_translation = match samples.last() {
        Some(&(_, translation)) => translation,
        None => return,
    };
    let mut tracker = VelocityTracker::new();

    controller.on_gesture(GestureSample::began());
    for &(time_ms, translation) in samples {
        tracker.add_sample(time_ms, translation);
        controller.on_gesture(GestureSample::changed(translation));
    }

    let velocity = tracker.velocity_clamped(MAX_RELEASE_VELOCITY);
    log::info!("estimated release velocity: {velocity:.0}");
    controller.on_gesture(GestureSample::ended(last_translation, velocity));

    let mut previous = Instant::now();
    while controller.phase() == DragPhase::Settling {
        let now = Instant::now();
        controller.on_frame(now.duration_since(previous).as_secs_f32());
        previous = now;
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
    println!("  final offset: {:.1}\n", controller.offset());
}
