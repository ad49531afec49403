//! Mission driver
//!
//! Holds the one active mission and advances it by a single increment on
//! each event-free tick. Repeated ticks resume exactly where the
//! previous one left off; nothing restarts implicitly.

use helmsman_protocol::ActuatorCommand;

use crate::maneuver::Mission;
use crate::state::Trigger;
use crate::timer::Instant;
use crate::traits::CarLink;

/// Scheduler for the active mission.
///
/// At most one mission exists at a time. Installing a new one replaces
/// the old wholesale: its remaining sub-steps never run again.
#[derive(Debug, Default)]
pub struct Driver {
    mission: Option<Mission>,
}

impl Driver {
    /// A driver with nothing to do
    pub const fn new() -> Self {
        Self { mission: None }
    }

    /// True while a mission is installed
    pub fn is_active(&self) -> bool {
        self.mission.is_some()
    }

    /// The installed mission, if any
    pub fn current(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Install a mission, replacing any current one
    pub fn install(&mut self, mission: Mission) {
        self.mission = Some(mission);
    }

    /// Discard the current mission without any cleanup sequence
    pub fn clear(&mut self) {
        self.mission = None;
    }

    /// Advance the active mission by one increment.
    ///
    /// The finished check runs before anything new is pulled; advancing
    /// the mission past a completion it has not yet been harvested for
    /// would skip steps. A mission observed finished gets the single
    /// stop command that ends the maneuver, and the returned trigger
    /// tells the controller to leave `Moving`. Either path sends at most
    /// one actuator command.
    pub fn tick(&mut self, now: Instant, car: &mut impl CarLink) -> Option<Trigger> {
        let mission = self.mission.as_mut()?;

        if mission.is_finished() {
            car.send(ActuatorCommand::stop());
            self.mission = None;
            return Some(Trigger::MissionComplete);
        }

        mission.advance(now, car);
        None
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use helmsman_protocol::ActuatorCommand;

    use super::*;
    use crate::config::Tuning;
    use crate::maneuver::Route;
    use crate::state::MissionKind;

    #[derive(Default)]
    struct Recorder {
        sent: heapless::Vec<ActuatorCommand, 32>,
    }

    impl CarLink for Recorder {
        fn send(&mut self, command: ActuatorCommand) {
            let _ = self.sent.push(command);
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn forth(interval_ms: u64) -> Mission {
        Mission::new(
            Route::Forth {
                interval: Duration::from_millis(interval_ms),
            },
            Tuning::default(),
        )
    }

    #[test]
    fn test_idle_driver_does_nothing() {
        let mut driver = Driver::new();
        let mut car = Recorder::default();

        assert_eq!(driver.tick(at(0), &mut car), None);
        assert!(car.sent.is_empty());
        assert!(!driver.is_active());
    }

    #[test]
    fn test_stop_emitted_on_tick_after_completion() {
        let mut driver = Driver::new();
        let mut car = Recorder::default();
        driver.install(forth(1_000));

        // Tick 1: forward command goes out
        assert_eq!(driver.tick(at(0), &mut car), None);
        assert_eq!(car.sent.len(), 1);

        // Tick 2: countdown elapses; the mission finishes but the stop
        // waits for the harvest tick
        assert_eq!(driver.tick(at(1_000), &mut car), None);
        assert_eq!(car.sent.len(), 1);

        // Tick 3: exactly one stop, mission cleared
        assert_eq!(driver.tick(at(1_100), &mut car), Some(Trigger::MissionComplete));
        assert_eq!(car.sent.len(), 2);
        assert_eq!(car.sent[1], ActuatorCommand::stop());
        assert!(!driver.is_active());

        // Tick 4: nothing left
        assert_eq!(driver.tick(at(1_200), &mut car), None);
        assert_eq!(car.sent.len(), 2);
    }

    #[test]
    fn test_install_replaces_wholesale() {
        let mut driver = Driver::new();
        let mut car = Recorder::default();
        driver.install(forth(60_000));
        driver.tick(at(0), &mut car);

        driver.install(Mission::new(Route::Spiral, Tuning::default()));
        assert_eq!(driver.current().map(Mission::kind), Some(MissionKind::Spiral));

        // The next tick drives the spiral, not the old forth leg
        driver.tick(at(100), &mut car);
        assert_eq!(car.sent.len(), 2);
        assert_eq!(car.sent[1].v, 0.0);
        assert_eq!(car.sent[1].u, Tuning::default().rotate_pulse_speed);
    }

    #[test]
    fn test_clear_discards_without_commands() {
        let mut driver = Driver::new();
        let mut car = Recorder::default();
        driver.install(forth(60_000));
        driver.tick(at(0), &mut car);

        driver.clear();
        assert!(!driver.is_active());
        assert_eq!(driver.tick(at(100), &mut car), None);
        assert_eq!(car.sent.len(), 1);
    }
}
