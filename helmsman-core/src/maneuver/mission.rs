//! A composite maneuver in flight

use crate::config::Tuning;
use crate::maneuver::primitive::Primitive;
use crate::maneuver::route::Route;
use crate::state::MissionKind;
use crate::timer::{Instant, StepStatus};
use crate::traits::CarLink;

/// A route being executed, one sub-step at a time.
///
/// The mission holds exactly the resumption state a suspended execution
/// would need: the cursor into the route and the currently active
/// sub-step. Advancing is the only suspension point; between calls all
/// state lives here as plain data, never on a call stack.
///
/// A mission that has finished stays finished: advancing it again is a
/// defined no-op returning `Done`. Restarting means installing a fresh
/// mission.
#[derive(Debug, Clone)]
pub struct Mission {
    route: Route,
    tuning: Tuning,
    cursor: u32,
    active: Option<Primitive>,
    finished: bool,
}

impl Mission {
    /// Begin a route with the given tuning snapshot
    pub fn new(route: Route, tuning: Tuning) -> Self {
        Self {
            route,
            tuning,
            cursor: 0,
            active: None,
            finished: false,
        }
    }

    /// The mission kind being driven
    pub fn kind(&self) -> MissionKind {
        self.route.kind()
    }

    /// Index of the sub-step the mission is on
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// True once every sub-step has completed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by one increment.
    ///
    /// Activates the sub-step at the cursor if none is active, advances
    /// it, and moves the cursor when it completes. Returns `Done` on the
    /// advance that completes the final sub-step; the caller owns the
    /// stop command that ends the maneuver, so a tick never carries more
    /// than one actuator send.
    pub fn advance(&mut self, now: Instant, car: &mut impl CarLink) -> StepStatus {
        if self.finished {
            return StepStatus::Done;
        }

        if self.active.is_none() {
            match self.route.step_at(self.cursor, &self.tuning) {
                Some(step) => self.active = Some(step),
                None => {
                    // Empty route; nothing to drive
                    self.finished = true;
                    return StepStatus::Done;
                }
            }
        }

        let status = match self.active.as_mut() {
            Some(step) => step.advance(now, car),
            None => return StepStatus::Done,
        };

        match status {
            StepStatus::InProgress => StepStatus::InProgress,
            StepStatus::Done => {
                self.active = None;
                self.cursor += 1;
                if self.cursor >= self.route.len() {
                    self.finished = true;
                    StepStatus::Done
                } else {
                    StepStatus::InProgress
                }
            }
        }
    }
}
