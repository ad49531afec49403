//! Tuning constants
//!
//! Several of these values are empirically chosen for the physical car
//! (pulse speed, settle delay, the turn radius-to-angle ratio) and have
//! no derivation; they are kept here as named, overridable fields rather
//! than literals scattered through the maneuver code.

use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default forward speed of a steering pulse
pub const DEFAULT_ROTATE_PULSE_SPEED: f32 = 3.0;

/// Default settle delay after a steering pulse, in milliseconds.
///
/// The core never sleeps; this is the recommended pacing between ticks
/// while a pulse-heavy maneuver is running, enforced by the loop driver.
pub const DEFAULT_ROTATE_SETTLE_MS: u64 = 3_000;

/// Default cruising speed for straight-line maneuvers
pub const DEFAULT_CRUISE_SPEED: f32 = 0.5;

/// Default duration of the FORTH maneuver, in seconds
pub const DEFAULT_FORTH_INTERVAL_S: u64 = 5;

/// Default side length of the SQUARE maneuver, in meters
pub const DEFAULT_SQUARE_SIDE_M: f32 = 1.0;

/// Conversion ratio from turn radius to steering angle
pub const DEFAULT_TURN_ANGLE_PER_RADIUS: f32 = 5.0;

/// Tuning values for maneuver generation and pacing.
///
/// Owned by the controller for its whole lifetime; missions copy it at
/// installation so a mid-flight retune never changes a running maneuver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuning {
    /// Forward speed encoded into every steering pulse
    pub rotate_pulse_speed: f32,
    /// Pause between ticks after a steering pulse
    pub rotate_settle: Duration,
    /// Speed for GoForward steps that do not specify their own
    pub cruise_speed: f32,
    /// How long the FORTH maneuver drives straight
    pub forth_interval: Duration,
    /// Side length of the SQUARE maneuver
    pub square_side_m: f32,
    /// Speed driven along each SQUARE side
    pub square_speed: f32,
    /// Steering angle produced per unit of turn radius
    pub turn_angle_per_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rotate_pulse_speed: DEFAULT_ROTATE_PULSE_SPEED,
            rotate_settle: Duration::from_millis(DEFAULT_ROTATE_SETTLE_MS),
            cruise_speed: DEFAULT_CRUISE_SPEED,
            forth_interval: Duration::from_secs(DEFAULT_FORTH_INTERVAL_S),
            square_side_m: DEFAULT_SQUARE_SIDE_M,
            square_speed: DEFAULT_CRUISE_SPEED,
            turn_angle_per_radius: DEFAULT_TURN_ANGLE_PER_RADIUS,
        }
    }
}

#[cfg(feature = "serde")]
impl Tuning {
    /// Serialize into a postcard blob for persistent storage
    pub fn encode<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buffer)
    }

    /// Deserialize from a postcard blob
    pub fn decode(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
