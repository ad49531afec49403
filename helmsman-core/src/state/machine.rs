//! Mode definition and transition logic

use super::events::Trigger;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kinds of composite maneuver the car can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissionKind {
    /// Four sides with a corner pulse after each
    Square,
    /// 7200 steering pulses with linearly growing angle
    Spiral,
    /// Straight ahead for a fixed interval
    Forth,
    /// An explicit scripted sequence
    Script,
}

/// Coarse operating state of the car controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Powered up, never driven; awaiting orders
    Idle,
    /// Explicitly halted, or a maneuver ran to completion
    Stopped,
    /// A mission of the given kind is in progress
    Moving(MissionKind),
}

impl Mode {
    /// True while a mission should be advanced on event-free ticks
    pub fn is_driving(&self) -> bool {
        matches!(self, Mode::Moving(_))
    }

    /// Process a trigger and return the next mode.
    ///
    /// This is the core transition logic. A new mission or a stop order
    /// wins from any mode; completion only matters while moving.
    pub fn transition(self, trigger: Trigger) -> Self {
        use Mode::*;
        use Trigger::*;

        match (self, trigger) {
            (_, MissionStarted(kind)) => Moving(kind),
            (_, StopOrdered) => Stopped,
            (Moving(_), MissionComplete) => Stopped,
            // Departure gating on GO is a declared stub; the mode holds
            (mode, Go) => mode,
            // Stray completion outside Moving changes nothing
            (mode, MissionComplete) => mode,
        }
    }
}
