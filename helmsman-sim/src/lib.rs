//! Host-side simulator harness for the Helmsman decision core.
//!
//! Stands in for the external collaborators the core delegates to: a
//! scripted event source replaces the remote operator and the detector
//! transports, and a logging actuator link replaces the serial link to
//! the arduino. The harness drives `Controller::tick` at a fixed
//! cadence, which doubles as the settle pacing after steering pulses.

pub mod harness;
pub mod script;

pub use harness::{run_script, Harness, TracingCar};
pub use script::{parse_script, ScriptError, ScriptedSource};
