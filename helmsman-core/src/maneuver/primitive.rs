//! Atomic suspendable actuator actions

use core::time::Duration;

use helmsman_protocol::ActuatorCommand;

use crate::timer::{Countdown, Instant, StepStatus};
use crate::traits::CarLink;

/// One controlled steering pulse.
///
/// The first advance sends a single command encoding the pulse speed and
/// the relative angle, then reports `Done`. Settling after the pulse is
/// tick pacing owned by the loop driver, not a sleep in here; that keeps
/// composite sequencing a pure in-progress/done affair. No stop command
/// is sent either - the level that decides the maneuver is over does
/// that.
#[derive(Debug, Clone, Copy)]
pub struct Rotate {
    command: ActuatorCommand,
    fired: bool,
}

impl Rotate {
    /// A pulse turning by `angle_deg` at the given forward speed
    pub fn new(angle_deg: f32, pulse_speed: f32) -> Self {
        Self {
            command: ActuatorCommand::pulse(pulse_speed, angle_deg),
            fired: false,
        }
    }

    /// The relative angle this pulse commands
    pub fn angle_deg(&self) -> f32 {
        self.command.v
    }

    /// Send the pulse (once) and report `Done`
    pub fn advance(&mut self, car: &mut impl CarLink) -> StepStatus {
        if !self.fired {
            car.send(self.command);
            self.fired = true;
        }
        StepStatus::Done
    }
}

/// Straight-line driving for a fixed duration.
///
/// The first advance sends one forward command and starts the internal
/// countdown; every advance polls the countdown and returns its status.
/// Reaching `Done` does NOT stop the car: forward motion is halted
/// explicitly by whichever composite or the state machine decides the
/// maneuver is over.
#[derive(Debug, Clone, Copy)]
pub struct GoForward {
    speed: f32,
    timer: Countdown,
}

impl GoForward {
    /// Drive at `speed` for `duration`
    pub fn new(duration: Duration, speed: f32) -> Self {
        Self {
            speed,
            timer: Countdown::new(duration),
        }
    }

    /// The commanded speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Advance: issue the forward command on the first call, then poll
    /// the countdown.
    pub fn advance(&mut self, now: Instant, car: &mut impl CarLink) -> StepStatus {
        if !self.timer.is_started() {
            car.send(ActuatorCommand::forward(self.speed));
            self.timer.start(now);
        }
        self.timer.poll(now)
    }
}

/// An atomic maneuver step
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Rotate(Rotate),
    GoForward(GoForward),
}

impl Primitive {
    /// A steering pulse by `angle_deg`
    pub fn rotate(angle_deg: f32, pulse_speed: f32) -> Self {
        Primitive::Rotate(Rotate::new(angle_deg, pulse_speed))
    }

    /// Straight driving for `duration` at `speed`
    pub fn go_forward(duration: Duration, speed: f32) -> Self {
        Primitive::GoForward(GoForward::new(duration, speed))
    }

    /// Advance this step by one increment
    pub fn advance(&mut self, now: Instant, car: &mut impl CarLink) -> StepStatus {
        match self {
            Primitive::Rotate(rotate) => rotate.advance(car),
            Primitive::GoForward(forward) => forward.advance(now, car),
        }
    }
}
