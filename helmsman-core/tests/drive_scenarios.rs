//! End-to-end tick scenarios driving the controller the way the real
//! loop does: one tick at a time, events injected between maneuver
//! increments.

use std::collections::VecDeque;
use std::time::Duration;

use helmsman_core::config::Tuning;
use helmsman_core::controller::Controller;
use helmsman_core::maneuver::{Route, StepSpec, SPIRAL_STEPS};
use helmsman_core::state::{MissionKind, Mode};
use helmsman_core::timer::Instant;
use helmsman_core::traits::{CarLink, EventSource};
use helmsman_protocol::{ActuatorCommand, Event};

#[derive(Default)]
struct Script {
    queue: VecDeque<Event>,
}

impl Script {
    fn push_command(&mut self, text: &str) {
        self.queue.push_back(Event::command(text).unwrap());
    }
}

impl EventSource for Script {
    fn poll(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }
}

#[derive(Default)]
struct Recorder {
    sent: Vec<ActuatorCommand>,
}

impl CarLink for Recorder {
    fn send(&mut self, command: ActuatorCommand) {
        self.sent.push(command);
    }
}

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// The full spiral scenario: SPIRAL command, 7200 pulse ticks with
/// angles 0..=7199, one stop on the final tick, mode Stopped.
#[test]
fn spiral_runs_7200_pulses_then_one_stop() {
    let mut controller = Controller::new(Tuning::default());
    let mut events = Script::default();
    let mut car = Recorder::default();

    events.push_command("SPIRAL");
    controller.tick(at(0), &mut events, &mut car);
    assert_eq!(controller.mode(), Mode::Moving(MissionKind::Spiral));

    let mut now = 0;
    while controller.mode().is_driving() {
        now += 100;
        controller.tick(at(now), &mut events, &mut car);
        assert!(
            car.sent.len() <= SPIRAL_STEPS as usize + 1,
            "command flood: {} sends",
            car.sent.len()
        );
    }

    assert_eq!(controller.mode(), Mode::Stopped);
    assert_eq!(car.sent.len(), SPIRAL_STEPS as usize + 1);

    for (index, command) in car.sent[..SPIRAL_STEPS as usize].iter().enumerate() {
        assert_eq!(command.v, index as f32, "pulse angle at step {}", index);
        assert_eq!(command.u, 3.0);
    }
    assert_eq!(*car.sent.last().unwrap(), ActuatorCommand::stop());

    // Stopped means stopped: further quiet ticks stay silent
    controller.tick(at(now + 100), &mut events, &mut car);
    assert_eq!(car.sent.len(), SPIRAL_STEPS as usize + 1);
}

/// Square: 8 sub-step activations (4 legs + 4 corner pulses), then
/// exactly one stop.
#[test]
fn square_drives_four_legs_and_corners() {
    let mut controller = Controller::new(Tuning::default());
    let mut events = Script::default();
    let mut car = Recorder::default();

    events.push_command("SQUARE");
    controller.tick(at(0), &mut events, &mut car);

    // Each leg is side/speed = 2 s; tick generously past every deadline
    let mut now = 0;
    while controller.mode().is_driving() {
        now += 500;
        controller.tick(at(now), &mut events, &mut car);
        assert!(now < 120_000, "square never completed");
    }

    let stops: Vec<_> = car.sent.iter().filter(|c| c.is_stop()).collect();
    let legs: Vec<_> = car
        .sent
        .iter()
        .filter(|c| !c.is_stop() && c.v == 0.0)
        .collect();
    let corners: Vec<_> = car.sent.iter().filter(|c| c.v == 90.0).collect();

    assert_eq!(legs.len(), 4);
    assert_eq!(corners.len(), 4);
    assert_eq!(stops.len(), 1);
    assert!(car.sent.last().unwrap().is_stop());
    assert_eq!(controller.mode(), Mode::Stopped);
}

/// STOP mid-spiral: immediate halt, exactly one stop command, and the
/// abandoned mission never resumes.
#[test]
fn stop_mid_mission_abandons_progress() {
    let mut controller = Controller::new(Tuning::default());
    let mut events = Script::default();
    let mut car = Recorder::default();

    events.push_command("SPIRAL");
    controller.tick(at(0), &mut events, &mut car);
    for tick in 1..=10 {
        controller.tick(at(tick * 100), &mut events, &mut car);
    }
    assert_eq!(car.sent.len(), 10);

    events.push_command("STOP");
    controller.tick(at(1_100), &mut events, &mut car);
    assert_eq!(controller.mode(), Mode::Stopped);
    assert_eq!(car.sent.len(), 11);
    assert!(car.sent.last().unwrap().is_stop());

    for tick in 12..20 {
        controller.tick(at(tick * 100), &mut events, &mut car);
    }
    assert_eq!(car.sent.len(), 11);
}

/// Replacing one maneuver by another mid-flight: the old one's
/// remaining sub-steps never execute.
#[test]
fn replacement_is_atomic() {
    let mut controller = Controller::new(Tuning::default());
    let mut events = Script::default();
    let mut car = Recorder::default();

    events.push_command("SPIRAL");
    controller.tick(at(0), &mut events, &mut car);
    for tick in 1..=5 {
        controller.tick(at(tick * 100), &mut events, &mut car);
    }
    // Spiral pulses 0..=4 went out
    assert_eq!(car.sent.len(), 5);

    events.push_command("SQUARE");
    controller.tick(at(600), &mut events, &mut car);
    assert_eq!(controller.mode(), Mode::Moving(MissionKind::Square));
    assert!(car.sent.last().unwrap().is_stop());

    // From here on, only square traffic: legs at cruise speed and
    // 90-degree corners, never another incrementing spiral pulse
    let mut now = 600;
    while controller.mode().is_driving() {
        now += 500;
        controller.tick(at(now), &mut events, &mut car);
    }
    for command in &car.sent[6..] {
        assert!(
            command.is_stop() || command.v == 0.0 || command.v == 90.0,
            "stray spiral pulse {:?}",
            command
        );
    }
}

/// A scripted route exercises the general composite form, including the
/// radius-based turn step.
#[test]
fn scripted_route_runs_in_order() {
    let tuning = Tuning::default();
    let mut controller = Controller::new(tuning);
    let mut events = Script::default();
    let mut car = Recorder::default();

    let mut steps = heapless::Vec::new();
    steps
        .push(StepSpec::Forward {
            duration: Duration::from_secs(1),
            speed: 0.4,
        })
        .unwrap();
    steps.push(StepSpec::Turn { radius: 3.0 }).unwrap();
    steps.push(StepSpec::Rotate { angle_deg: -45.0 }).unwrap();
    controller.begin(Route::Script(steps), &mut car);
    assert_eq!(controller.mode(), Mode::Moving(MissionKind::Script));

    let mut now = 0;
    while controller.mode().is_driving() {
        now += 250;
        controller.tick(at(now), &mut events, &mut car);
        assert!(now < 60_000, "script never completed");
    }

    assert_eq!(car.sent[0], ActuatorCommand::forward(0.4));
    assert_eq!(car.sent[1].v, 3.0 * tuning.turn_angle_per_radius);
    assert_eq!(car.sent[2].v, -45.0);
    assert!(car.sent[3].is_stop());
    assert_eq!(car.sent.len(), 4);
}
