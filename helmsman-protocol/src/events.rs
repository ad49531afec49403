//! Inbound events from the detectors, the remote operator, and the car.

use heapless::String;

/// Maximum length of a remote command string
pub const MAX_COMMAND_LEN: usize = 16;

/// One discrete input to the control loop.
///
/// Immutable and single-consumer: the controller polls at most one event
/// per tick, acts on it, and discards it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Raw command text from the remote operator (case-sensitive)
    Command(String<MAX_COMMAND_LEN>),
    /// Output of the path detector
    Path(PathReport),
    /// Output of the sign detector
    Sign(SignReport),
    /// Status message from the car's low-level controller
    Car(CarStatus),
}

impl Event {
    /// Build a command event from raw text.
    ///
    /// Returns `None` if the text exceeds [`MAX_COMMAND_LEN`]; a command
    /// that long cannot be one of the recognized words anyway.
    pub fn command(text: &str) -> Option<Self> {
        let mut s = String::new();
        s.push_str(text).ok()?;
        Some(Event::Command(s))
    }
}

/// Recognized remote commands.
///
/// The wire format is plain text; everything else the operator might
/// send is ignored by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteCommand {
    /// Operator signals readiness to depart
    Go,
    /// Drive an expanding spiral
    Spiral,
    /// Drive straight ahead for a fixed interval
    Forth,
    /// Drive a square and return to the starting corner
    Square,
    /// Halt immediately
    Stop,
}

impl RemoteCommand {
    /// Parse a command word. Exact, case-sensitive match; anything else
    /// is `None` and must be silently ignored by the caller.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "GO" => Some(RemoteCommand::Go),
            "SPIRAL" => Some(RemoteCommand::Spiral),
            "FORTH" => Some(RemoteCommand::Forth),
            "SQUARE" => Some(RemoteCommand::Square),
            "STOP" => Some(RemoteCommand::Stop),
            _ => None,
        }
    }

    /// The wire spelling of this command
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteCommand::Go => "GO",
            RemoteCommand::Spiral => "SPIRAL",
            RemoteCommand::Forth => "FORTH",
            RemoteCommand::Square => "SQUARE",
            RemoteCommand::Stop => "STOP",
        }
    }
}

/// Lane geometry reported by the path detector.
///
/// Delivered verbatim to the core; acting on it is the (out-of-scope)
/// path-following policy's job.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PathReport {
    /// Lateral offset of the lane center from the car axis, in meters
    /// (positive = lane is to the left)
    pub offset_m: f32,
    /// Curvature of the detected lane ahead, in 1/m
    pub curvature: f32,
}

/// Road sign classes the sign detector can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignKind {
    /// Stop sign
    Stop,
    /// Yield sign
    Yield,
    /// Speed limit sign with the posted limit
    SpeedLimit(u8),
}

/// A detected road sign.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignReport {
    /// Sign class
    pub kind: SignKind,
    /// Detector confidence in `[0, 1]`
    pub confidence: f32,
}

/// Status message from the arduino operating the car.
///
/// The field meanings mirror the actuator command channels: two integer
/// channels and two float channels, interpretation owned by the arduino
/// firmware.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarStatus {
    pub x: i32,
    pub y: i32,
    pub u: f32,
    pub v: f32,
}

impl CarStatus {
    /// Assemble a status from individually parsed fields.
    ///
    /// The transport delivers loosely structured key/value payloads; any
    /// missing field makes the whole status invalid. Returning `None`
    /// here keeps malformed payloads from crossing the tick boundary.
    pub fn from_fields(
        x: Option<i32>,
        y: Option<i32>,
        u: Option<f32>,
        v: Option<f32>,
    ) -> Option<Self> {
        Some(Self {
            x: x?,
            y: y?,
            u: u?,
            v: v?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_command_roundtrip() {
        let commands = [
            RemoteCommand::Go,
            RemoteCommand::Spiral,
            RemoteCommand::Forth,
            RemoteCommand::Square,
            RemoteCommand::Stop,
        ];

        for command in commands {
            let parsed = RemoteCommand::parse(command.as_str()).unwrap();
            assert_eq!(command, parsed);
        }
    }

    #[test]
    fn test_case_sensitive_parse() {
        assert_eq!(RemoteCommand::parse("go"), None);
        assert_eq!(RemoteCommand::parse("Stop"), None);
        assert_eq!(RemoteCommand::parse("SPIRAL "), None);
        assert_eq!(RemoteCommand::parse(""), None);
    }

    #[test]
    fn test_command_event_too_long() {
        assert!(Event::command("SPIRAL").is_some());
        assert!(Event::command("THIS-COMMAND-IS-FAR-TOO-LONG").is_none());
    }

    #[test]
    fn test_car_status_missing_field() {
        assert!(CarStatus::from_fields(Some(0), Some(0), None, Some(0.0)).is_none());

        let status = CarStatus::from_fields(Some(1), Some(2), Some(0.5), Some(1.0)).unwrap();
        assert_eq!(status.x, 1);
        assert_eq!(status.u, 0.5);
    }

    proptest! {
        /// Only the five exact command words parse; arbitrary other
        /// strings are rejected.
        #[test]
        fn prop_unknown_commands_rejected(text in "[A-Za-z ]{0,16}") {
            let known = ["GO", "SPIRAL", "FORTH", "SQUARE", "STOP"];
            let parsed = RemoteCommand::parse(&text);
            prop_assert_eq!(parsed.is_some(), known.contains(&text.as_str()));
        }
    }
}
