//! Countdown timer primitive
//!
//! The core never reads a clock itself: the loop driver samples the
//! platform clock once per tick and passes the timestamp down. This
//! keeps every component deterministic and host-testable.

use core::ops::Add;
use core::time::Duration;

/// Millisecond-resolution monotonic timestamp.
///
/// Supplied by the caller on every tick; the core only ever compares and
/// adds to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    ms: u64,
}

impl Instant {
    /// Timestamp from milliseconds since an arbitrary epoch
    pub const fn from_millis(ms: u64) -> Self {
        Self { ms }
    }

    /// Milliseconds since the epoch
    pub const fn as_millis(self) -> u64 {
        self.ms
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant {
            ms: self.ms.saturating_add(rhs.as_millis() as u64),
        }
    }
}

/// Result of advancing a timer or a maneuver by one increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepStatus {
    /// More work remains; advance again on a later tick
    InProgress,
    /// Finished; advancing again is a no-op that stays `Done`
    Done,
}

impl StepStatus {
    /// True once the step has finished
    pub fn is_done(&self) -> bool {
        matches!(self, StepStatus::Done)
    }
}

/// A restartable countdown.
///
/// The duration is fixed at construction. [`Countdown::start`] records
/// the current time; [`Countdown::poll`] reports [`StepStatus::Done`]
/// once the duration has elapsed and keeps reporting it forever after.
/// Polling never rewinds the start instant. A zero duration is
/// immediately done; it is not an error.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    started: Option<Instant>,
    duration: Duration,
}

impl Countdown {
    /// Create a countdown that is not yet running
    pub const fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
        }
    }

    /// Begin (or restart) the countdown at `now`
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// True once `start` has been called
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// The configured duration
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Report whether the countdown has elapsed as of `now`.
    ///
    /// A countdown that was never started reports `InProgress`.
    pub fn poll(&self, now: Instant) -> StepStatus {
        match self.started {
            Some(started) if now < started + self.duration => StepStatus::InProgress,
            Some(_) => StepStatus::Done,
            None => StepStatus::InProgress,
        }
    }
}
