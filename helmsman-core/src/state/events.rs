//! Triggers for mode transitions

use super::machine::MissionKind;

/// Internal occurrences that can move the mode.
///
/// Triggers come from two places only: remote command dispatch and the
/// driver reporting maneuver completion. Detector payloads never
/// transition the mode directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Operator signalled readiness to depart
    Go,
    /// A new mission was installed
    MissionStarted(MissionKind),
    /// Operator ordered an immediate halt
    StopOrdered,
    /// The active mission drove its last sub-step
    MissionComplete,
}
