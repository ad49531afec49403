//! Top-level controller
//!
//! The event-driven state machine over the mission driver. One call to
//! [`Controller::tick`] handles exactly one of: a polled event, or one
//! increment of the active maneuver. At most one actuator command is
//! sent per tick, and nothing ever escapes the tick boundary: malformed
//! or unexpected input is logged and the tick completes normally.

use helmsman_protocol::{ActuatorCommand, CarStatus, Event, RemoteCommand};

use crate::config::Tuning;
use crate::driver::Driver;
use crate::maneuver::{Mission, Route};
use crate::state::{Mode, Trigger};
use crate::timer::Instant;
use crate::traits::{CarLink, EventSource};

/// The decision core's whole mutable state.
///
/// Initialized once at startup (idle, no mission) and mutated only
/// inside `tick`; lifetime equals process lifetime. Single-threaded
/// ticks make the mode/driver pair effectively single-writer.
#[derive(Debug)]
pub struct Controller {
    mode: Mode,
    driver: Driver,
    tuning: Tuning,
    last_car_status: Option<CarStatus>,
}

impl Controller {
    /// A fresh controller in `Idle` with the given tuning
    pub fn new(tuning: Tuning) -> Self {
        Self {
            mode: Mode::Idle,
            driver: Driver::new(),
            tuning,
            last_car_status: None,
        }
    }

    /// Current operating mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Tuning in effect for newly started maneuvers
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The most recent status message from the car, if any
    pub fn last_car_status(&self) -> Option<CarStatus> {
        self.last_car_status
    }

    /// One control-loop tick.
    ///
    /// Polls for at most one event. If one is present it is dispatched
    /// and the driver is NOT advanced this tick; otherwise, while
    /// moving, the driver advances the mission by one increment.
    pub fn tick<E, C>(&mut self, now: Instant, events: &mut E, car: &mut C)
    where
        E: EventSource,
        C: CarLink,
    {
        if let Some(event) = events.poll() {
            self.dispatch(event, car);
        } else if self.mode.is_driving() {
            if let Some(trigger) = self.driver.tick(now, car) {
                self.apply(trigger);
            }
        }
    }

    /// Act on one polled event
    fn dispatch(&mut self, event: Event, car: &mut impl CarLink) {
        match event {
            Event::Command(text) => match RemoteCommand::parse(&text) {
                Some(RemoteCommand::Go) => {
                    log::info!("remotely ordered to GO");
                    // TODO: leave Idle only after the arduino reports a
                    // ready CarStatus; until then GO is an acknowledgement
                    self.apply(Trigger::Go);
                }
                Some(RemoteCommand::Spiral) => self.begin(Route::Spiral, car),
                Some(RemoteCommand::Forth) => self.begin(
                    Route::Forth {
                        interval: self.tuning.forth_interval,
                    },
                    car,
                ),
                Some(RemoteCommand::Square) => self.begin(
                    Route::Square {
                        side_m: self.tuning.square_side_m,
                        speed: self.tuning.square_speed,
                    },
                    car,
                ),
                Some(RemoteCommand::Stop) => {
                    log::info!("remotely ordered to STOP");
                    self.halt(car);
                }
                None => {
                    log::debug!("ignoring unrecognized command {:?}", text.as_str());
                }
            },
            Event::Path(report) => {
                // Integration point for the path-following policy
                log::trace!("path report: offset {} m", report.offset_m);
            }
            Event::Sign(report) => {
                // Integration point for the sign-reaction policy
                log::trace!("sign detected: {:?}", report.kind);
            }
            Event::Car(status) => {
                log::debug!(
                    "car status x={} y={} u={} v={}",
                    status.x,
                    status.y,
                    status.u,
                    status.v
                );
                self.last_car_status = Some(status);
            }
        }
    }

    /// Start driving a route, replacing any active mission atomically.
    ///
    /// Replacement abandons partial progress without rollback; the only
    /// cleanup is one stop command so the car is not left mid-motion
    /// under stale orders.
    pub fn begin(&mut self, route: Route, car: &mut impl CarLink) {
        let kind = route.kind();

        if self.driver.is_active() {
            log::info!("replacing active maneuver with {:?}", kind);
            car.send(ActuatorCommand::stop());
        } else {
            log::info!("starting maneuver {:?}", kind);
        }

        self.driver.install(Mission::new(route, self.tuning));
        self.apply(Trigger::MissionStarted(kind));
    }

    /// Halt immediately: one stop command, mission discarded, `Stopped`
    fn halt(&mut self, car: &mut impl CarLink) {
        car.send(ActuatorCommand::stop());
        self.driver.clear();
        self.apply(Trigger::StopOrdered);
    }

    fn apply(&mut self, trigger: Trigger) {
        let next = self.mode.transition(trigger);
        if next != self.mode {
            log::info!("mode {:?} -> {:?}", self.mode, next);
            self.mode = next;
        }
    }
}
