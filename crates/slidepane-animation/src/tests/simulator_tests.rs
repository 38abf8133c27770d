use super::*;

use std::cell::RefCell;
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;
const FRAME_CAP: usize = 6_000;

#[derive(Default)]
struct LoopCounts {
    activated: usize,
    deactivated: usize,
}

#[derive(Clone, Default)]
struct SharedLoop {
    counts: Rc<RefCell<LoopCounts>>,
}

impl StepLoop for SharedLoop {
    fn activate(&mut self) {
        self.counts.borrow_mut().activated += 1;
    }

    fn deactivate(&mut self) {
        self.counts.borrow_mut().deactivated += 1;
    }
}

fn pane_simulator() -> SpringSimulator {
    SpringSimulator::new(SpringSpec::pane(), BodySpec::pane())
}

fn settle(simulator: &mut SpringSimulator) -> usize {
    for frame in 0..FRAME_CAP {
        if simulator.step(FRAME) == StepPhase::Settled {
            return frame;
        }
    }
    panic!("simulator did not settle within {FRAME_CAP} frames");
}

#[test]
fn inactive_simulator_reports_idle_and_stays_put() {
    let mut simulator = pane_simulator();
    simulator.set_position(-150.0);
    assert_eq!(simulator.step(FRAME), StepPhase::Idle);
    assert_eq!(simulator.position(), -150.0);
}

#[test]
fn settles_at_target_with_zero_velocity() {
    let mut simulator = pane_simulator();
    simulator.set_position(-150.0);
    simulator.attach(0.0, 10.0);

    settle(&mut simulator);

    assert_eq!(simulator.position(), 0.0);
    assert_eq!(simulator.velocity(), 0.0);
    assert!(!simulator.is_active());
}

#[test]
fn settled_is_reported_exactly_once_per_activation() {
    let mut simulator = pane_simulator();
    simulator.set_position(-150.0);
    simulator.attach(-170.0, -300.0);

    settle(&mut simulator);

    for _ in 0..10 {
        assert_eq!(simulator.step(FRAME), StepPhase::Idle);
    }
}

#[test]
fn attach_adds_velocity_instead_of_replacing() {
    let mut simulator = pane_simulator();
    simulator.attach(100.0, 200.0);
    assert_eq!(simulator.velocity(), 200.0);

    simulator.attach(100.0, 50.0);
    assert_eq!(simulator.velocity(), 250.0);
}

#[test]
fn set_velocity_is_absolute() {
    let mut simulator = pane_simulator();
    simulator.attach(100.0, 200.0);
    simulator.set_velocity(-40.0);
    assert_eq!(simulator.velocity(), -40.0);
}

#[test]
fn reattach_pursues_only_the_latest_target() {
    let counts = Rc::new(RefCell::new(LoopCounts::default()));
    let mut simulator = SpringSimulator::with_step_loop(
        SpringSpec::pane(),
        BodySpec::pane(),
        Box::new(SharedLoop {
            counts: Rc::clone(&counts),
        }),
    );
    simulator.set_position(-150.0);
    simulator.attach(-170.0, 0.0);
    for _ in 0..5 {
        simulator.step(FRAME);
    }
    simulator.attach(0.0, 0.0);

    settle(&mut simulator);

    assert_eq!(simulator.position(), 0.0);
    assert_eq!(counts.borrow().activated, 1, "one activation for both attaches");
    assert_eq!(counts.borrow().deactivated, 1);
}

#[test]
fn stop_retains_state_and_releases_the_loop_once() {
    let counts = Rc::new(RefCell::new(LoopCounts::default()));
    let mut simulator = SpringSimulator::with_step_loop(
        SpringSpec::pane(),
        BodySpec::pane(),
        Box::new(SharedLoop {
            counts: Rc::clone(&counts),
        }),
    );
    simulator.set_position(-150.0);
    simulator.attach(0.0, 400.0);
    for _ in 0..3 {
        assert_eq!(simulator.step(FRAME), StepPhase::Active);
    }

    let position = simulator.position();
    let velocity = simulator.velocity();
    simulator.stop();
    simulator.stop();

    assert!(!simulator.is_active());
    assert_eq!(simulator.position(), position);
    assert_eq!(simulator.velocity(), velocity);
    assert_eq!(counts.borrow().deactivated, 1);
    assert_eq!(simulator.step(FRAME), StepPhase::Idle);
}

#[test]
fn set_position_is_ignored_while_active() {
    let mut simulator = pane_simulator();
    simulator.set_position(-150.0);
    simulator.attach(0.0, 0.0);
    simulator.step(FRAME);

    let position = simulator.position();
    simulator.set_position(500.0);
    assert_eq!(simulator.position(), position);
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let mut simulator = SpringSimulator::new(SpringSpec::critically_damped(), BodySpec::pane());
    simulator.set_position(100.0);
    simulator.attach(0.0, 0.0);

    for frame in 0..FRAME_CAP {
        match simulator.step(FRAME) {
            StepPhase::Settled => return,
            StepPhase::Active => {
                assert!(simulator.position() > -1.0, "overshot to {}", simulator.position());
            }
            StepPhase::Idle => panic!("active simulator reported idle at frame {frame}"),
        }
    }
    panic!("simulator did not settle within {FRAME_CAP} frames");
}

#[test]
fn slack_spring_rests_within_its_rest_length() {
    let spec = SpringSpec {
        frequency: 3.0,
        damping_ratio: 1.0,
        rest_length: 40.0,
    };
    let mut simulator = SpringSimulator::new(spec, BodySpec::pane());
    simulator.set_position(100.0);
    simulator.attach(0.0, 0.0);

    settle(&mut simulator);

    let distance = (simulator.position() - simulator.target()).abs();
    assert!(
        distance <= spec.rest_length + 1.0,
        "rested {distance} from the anchor"
    );
    assert!(
        distance > 1.0,
        "slack spring must not be pulled onto the anchor"
    );
    assert_eq!(simulator.velocity(), 0.0);
}

#[test]
fn zero_dt_step_does_not_move_the_body() {
    let mut simulator = pane_simulator();
    simulator.set_position(-150.0);
    simulator.attach(0.0, 0.0);
    assert_eq!(simulator.step(0.0), StepPhase::Active);
    assert_eq!(simulator.position(), -150.0);
}
