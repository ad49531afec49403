//! Composite maneuver shapes
//!
//! A route describes an ordered sequence of primitive sub-steps. The
//! sequence is yielded lazily by index: a 7200-step spiral costs the
//! same to hold as a one-step straight run, and resuming after any tick
//! needs nothing but the cursor.

use core::time::Duration;

use heapless::Vec;

use crate::config::Tuning;
use crate::maneuver::primitive::Primitive;
use crate::state::MissionKind;

/// Number of steering pulses in the spiral maneuver
pub const SPIRAL_STEPS: u32 = 7200;

/// Sub-steps in the square maneuver (4 sides, 4 corners)
pub const SQUARE_STEPS: u32 = 8;

/// Maximum steps in a scripted route
pub const MAX_SCRIPT_STEPS: usize = 16;

/// One step of a scripted route
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSpec {
    /// Drive straight for `duration` at `speed`
    Forward { duration: Duration, speed: f32 },
    /// Pulse-turn by a relative angle
    Rotate { angle_deg: f32 },
    /// Pulse-turn sized for a turn radius; the angle is
    /// `radius * Tuning::turn_angle_per_radius`
    Turn { radius: f32 },
}

/// The shape of a composite maneuver.
///
/// Routes own their step sequence outright; there is no sharing and no
/// cycles, so traversal always terminates after [`Route::len`] steps.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Four sides of `side_m` meters driven at `speed`, a 90-degree
    /// pulse after each
    Square { side_m: f32, speed: f32 },
    /// 7200 steering pulses with linearly growing angle 0..=7199,
    /// tracing an expanding spiral
    Spiral,
    /// Straight ahead for `interval`, then done
    Forth { interval: Duration },
    /// An explicit ordered sequence of steps
    Script(Vec<StepSpec, MAX_SCRIPT_STEPS>),
}

impl Route {
    /// The mission kind this route drives
    pub fn kind(&self) -> MissionKind {
        match self {
            Route::Square { .. } => MissionKind::Square,
            Route::Spiral => MissionKind::Spiral,
            Route::Forth { .. } => MissionKind::Forth,
            Route::Script(_) => MissionKind::Script,
        }
    }

    /// Total number of sub-steps
    pub fn len(&self) -> u32 {
        match self {
            Route::Square { .. } => SQUARE_STEPS,
            Route::Spiral => SPIRAL_STEPS,
            Route::Forth { .. } => 1,
            Route::Script(steps) => steps.len() as u32,
        }
    }

    /// True if the route has no sub-steps at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Construct the sub-step at `index`, or `None` past the end.
    pub fn step_at(&self, index: u32, tuning: &Tuning) -> Option<Primitive> {
        if index >= self.len() {
            return None;
        }

        let step = match self {
            Route::Square { side_m, speed } => {
                if index % 2 == 0 {
                    Primitive::go_forward(leg_duration(*side_m, *speed), *speed)
                } else {
                    Primitive::rotate(90.0, tuning.rotate_pulse_speed)
                }
            }
            Route::Spiral => Primitive::rotate(index as f32, tuning.rotate_pulse_speed),
            Route::Forth { interval } => Primitive::go_forward(*interval, tuning.cruise_speed),
            Route::Script(steps) => match steps[index as usize] {
                StepSpec::Forward { duration, speed } => Primitive::go_forward(duration, speed),
                StepSpec::Rotate { angle_deg } => {
                    Primitive::rotate(angle_deg, tuning.rotate_pulse_speed)
                }
                StepSpec::Turn { radius } => Primitive::rotate(
                    radius * tuning.turn_angle_per_radius,
                    tuning.rotate_pulse_speed,
                ),
            },
        };

        Some(step)
    }
}

/// Time to cover one square side. Anything that does not divide into a
/// finite positive interval (non-positive speed or side, NaN) degrades
/// to a zero-length leg; `Duration::from_secs_f32` panics on negative
/// or non-finite input, which must never escape a tick.
fn leg_duration(side_m: f32, speed: f32) -> Duration {
    let seconds = side_m / speed;
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f32(seconds)
    } else {
        Duration::ZERO
    }
}
