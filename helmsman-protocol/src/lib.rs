//! Message types exchanged between the Helmsman decision core and its
//! external collaborators.
//!
//! Two directions of traffic exist:
//!
//! - **Inbound**: discrete [`Event`]s produced by the path detector, the
//!   sign detector, the remote operator, and the car's low-level
//!   controller. Events are polled once per control-loop tick and
//!   consumed exactly once.
//! - **Outbound**: [`ActuatorCommand`]s, the single 4-value message the
//!   car's motion controller understands. Fire-and-forget; the core
//!   never waits for an acknowledgement.
//!
//! All payloads are closed tagged unions with typed fields. Anything
//! loosely structured (remote command text, raw status field sets) is
//! validated here, at the boundary, so malformed input never reaches the
//! dispatch logic.

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod events;

pub use actuator::ActuatorCommand;
pub use events::{CarStatus, Event, PathReport, RemoteCommand, SignKind, SignReport, MAX_COMMAND_LEN};
