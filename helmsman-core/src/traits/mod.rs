//! Collaborator traits
//!
//! These traits define the seam between the decision core and the
//! outside world. The real system plugs in a network transport and the
//! arduino serial link; the simulator and the tests plug in scripted
//! sources and recording sinks.

use helmsman_protocol::{ActuatorCommand, Event};

/// Source of discrete input events.
///
/// `poll` must never block: it returns whatever event is ready right
/// now, or `None`. The controller consumes at most one event per tick.
pub trait EventSource {
    fn poll(&mut self) -> Option<Event>;
}

/// Fire-and-forget link to the car's motion controller.
///
/// `send` must not block and no delivery confirmation is expected; a
/// lost command is corrected by a later one.
pub trait CarLink {
    fn send(&mut self, command: ActuatorCommand);
}
