//! Outbound actuator command.
//!
//! The car's low-level controller accepts one message shape: two
//! integers and two floats. For the simulator target, `x` and `y` are
//! ignored while `u` encodes the forward speed and `v` the relative
//! steering angle in degrees.

/// The 4-value message sent to the car's motion controller.
///
/// Write-only and fire-and-forget: no delivery confirmation is assumed
/// anywhere in the core.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCommand {
    /// First integer channel (reserved; ignored by the simulator)
    pub x: i32,
    /// Second integer channel (reserved; ignored by the simulator)
    pub y: i32,
    /// Forward speed
    pub u: f32,
    /// Relative steering angle in degrees
    pub v: f32,
}

impl ActuatorCommand {
    /// Create a command with explicit channel values
    pub const fn new(x: i32, y: i32, u: f32, v: f32) -> Self {
        Self { x, y, u, v }
    }

    /// Full stop: zero speed, zero angle
    pub const fn stop() -> Self {
        Self::new(0, 0, 0.0, 0.0)
    }

    /// Straight-line motion at the given speed
    pub const fn forward(speed: f32) -> Self {
        Self::new(0, 0, speed, 0.0)
    }

    /// A steering pulse: forward speed plus a relative angle
    pub const fn pulse(speed: f32, angle_deg: f32) -> Self {
        Self::new(0, 0, speed, angle_deg)
    }

    /// True if this command halts the car entirely
    pub fn is_stop(&self) -> bool {
        self.u == 0.0 && self.v == 0.0
    }
}
