//! Mode state machine
//!
//! The coarse operating state of the car and the triggers that move it.
//! The machine is explicit, finite, and deterministic; exactly one mode
//! is active at a time and only the controller mutates it.

pub mod events;
pub mod machine;

pub use events::Trigger;
pub use machine::{MissionKind, Mode};
