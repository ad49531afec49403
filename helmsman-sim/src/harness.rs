//! Tick loop harness

use std::time::Duration;

use helmsman_core::controller::Controller;
use helmsman_core::timer::Instant;
use helmsman_core::traits::CarLink;
use helmsman_protocol::ActuatorCommand;

use crate::script::ScriptedSource;

/// Actuator link that logs every command instead of driving hardware.
#[derive(Debug, Default)]
pub struct TracingCar {
    sent: u64,
}

impl TracingCar {
    /// Number of commands sent so far
    pub fn sent(&self) -> u64 {
        self.sent
    }
}

impl CarLink for TracingCar {
    fn send(&mut self, command: ActuatorCommand) {
        self.sent += 1;
        tracing::info!(
            x = command.x,
            y = command.y,
            u = command.u,
            v = command.v,
            "car.send"
        );
    }
}

/// A controller wired to a scripted source and a logging car.
///
/// Ticks are driven by [`Harness::run`], which sleeps the configured
/// interval between ticks — the bounded settle pacing after steering
/// pulses. Time handed to the core is simulated, derived from the tick
/// count, so a zero interval replays a scenario instantly with the same
/// decisions.
pub struct Harness {
    controller: Controller,
    events: ScriptedSource,
    car: TracingCar,
    tick_interval: Duration,
    ticks: u64,
}

impl Harness {
    pub fn new(controller: Controller, events: ScriptedSource, tick_interval: Duration) -> Self {
        Self {
            controller,
            events,
            car: TracingCar::default(),
            tick_interval,
            ticks: 0,
        }
    }

    /// Ticks executed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The wrapped controller
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The logging actuator link
    pub fn car(&self) -> &TracingCar {
        &self.car
    }

    /// One tick: simulated now, one poll, at most one command
    pub fn tick(&mut self) {
        let now = Instant::from_millis(self.ticks * self.tick_interval.as_millis().max(1) as u64);
        self.controller.tick(now, &mut self.events, &mut self.car);
        self.ticks += 1;
    }

    /// Run until the script is exhausted and the car is no longer
    /// moving, or `max_ticks` elapse.
    pub fn run(&mut self, max_ticks: u64) {
        while self.ticks < max_ticks {
            self.tick();

            if self.events.is_exhausted() && !self.controller.mode().is_driving() {
                break;
            }
            if !self.tick_interval.is_zero() {
                std::thread::sleep(self.tick_interval);
            }
        }
        tracing::info!(
            ticks = self.ticks,
            commands = self.car.sent(),
            mode = ?self.controller.mode(),
            "run finished"
        );
    }
}

/// Parse and run a script to completion; returns the harness for
/// inspection.
pub fn run_script(
    script: &str,
    tick_interval: Duration,
    max_ticks: u64,
) -> Result<Harness, crate::script::ScriptError> {
    let events = crate::script::parse_script(script)?;
    let controller = Controller::new(helmsman_core::config::Tuning::default());
    let mut harness = Harness::new(controller, events, tick_interval);
    harness.run(max_ticks);
    Ok(harness)
}
