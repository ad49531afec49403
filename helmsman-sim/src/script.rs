//! Event scripts
//!
//! A script is a plain text file delivering events at chosen ticks:
//!
//! ```text
//! # tick  type  args
//! 0   CMD  SPIRAL
//! 50  CAR  0 0 0.5 0.0
//! 80  SIGN STOP 0.9
//! 120 PATH 0.15 0.02
//! 200 CMD  STOP
//! ```
//!
//! Malformed lines are logged and skipped; a broken script degrades,
//! it never aborts the run. That mirrors how the real transports are
//! treated: garbage in, log, carry on.

use std::collections::VecDeque;

use helmsman_core::traits::EventSource;
use helmsman_protocol::{CarStatus, Event, PathReport, SignKind, SignReport};

/// A script that failed to yield even one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No line parsed as an event
    Empty,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Empty => write!(f, "script contains no usable events"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Event source yielding scripted events at their scheduled tick.
///
/// `poll` consumes one poll-tick per call, matching the controller's
/// one-poll-per-tick discipline.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<(u64, Event)>,
    tick: u64,
}

impl ScriptedSource {
    /// Build from `(tick, event)` pairs; the pairs must be in tick order
    pub fn new(events: impl IntoIterator<Item = (u64, Event)>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            tick: 0,
        }
    }

    /// True once every scripted event has been delivered
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSource for ScriptedSource {
    fn poll(&mut self) -> Option<Event> {
        let due = matches!(self.queue.front(), Some((tick, _)) if *tick <= self.tick);
        self.tick += 1;
        if due {
            self.queue.pop_front().map(|(_, event)| event)
        } else {
            None
        }
    }
}

/// Parse a whole script, logging and skipping malformed lines.
pub fn parse_script(text: &str) -> Result<ScriptedSource, ScriptError> {
    let mut events = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some(entry) => events.push(entry),
            None => log::warn!("script line {}: skipping malformed entry {:?}", number + 1, line),
        }
    }

    if events.is_empty() {
        return Err(ScriptError::Empty);
    }
    events.sort_by_key(|(tick, _)| *tick);
    Ok(ScriptedSource::new(events))
}

/// Parse one `tick TYPE args...` line
fn parse_line(line: &str) -> Option<(u64, Event)> {
    let mut fields = line.split_whitespace();
    let tick: u64 = fields.next()?.parse().ok()?;
    let kind = fields.next()?;

    let event = match kind {
        "CMD" => Event::command(fields.next()?)?,
        "PATH" => Event::Path(PathReport {
            offset_m: fields.next()?.parse().ok()?,
            curvature: fields.next()?.parse().ok()?,
        }),
        "SIGN" => Event::Sign(SignReport {
            kind: parse_sign(fields.next()?)?,
            confidence: fields.next()?.parse().ok()?,
        }),
        "CAR" => {
            // Field-by-field: any missing or unparsable channel voids
            // the whole status
            let x = fields.next().and_then(|f| f.parse().ok());
            let y = fields.next().and_then(|f| f.parse().ok());
            let u = fields.next().and_then(|f| f.parse().ok());
            let v = fields.next().and_then(|f| f.parse().ok());
            Event::Car(CarStatus::from_fields(x, y, u, v)?)
        }
        _ => return None,
    };

    Some((tick, event))
}

fn parse_sign(text: &str) -> Option<SignKind> {
    match text {
        "STOP" => Some(SignKind::Stop),
        "YIELD" => Some(SignKind::Yield),
        limit => limit
            .strip_prefix("LIMIT")
            .and_then(|n| n.parse().ok())
            .map(SignKind::SpeedLimit),
    }
}
