//! Maneuvers
//!
//! A maneuver is a unit of vehicle motion expressible as a resumable
//! advance step. Three layers build on each other:
//!
//! - [`Primitive`]: an atomic actuator action (one steering pulse, or
//!   straight driving for a duration)
//! - [`Route`]: the shape of a composite maneuver, yielding its
//!   primitive sub-steps lazily by index
//! - [`Mission`]: a route in flight, holding exactly the state needed to
//!   resume between ticks (cursor plus the active sub-step)
//!
//! Nothing here blocks: every `advance` does at most one actuator send
//! and returns immediately with [`StepStatus`](crate::timer::StepStatus).

pub mod mission;
pub mod primitive;
pub mod route;

pub use mission::Mission;
pub use primitive::{GoForward, Primitive, Rotate};
pub use route::{Route, StepSpec, MAX_SCRIPT_STEPS, SPIRAL_STEPS, SQUARE_STEPS};
