//! Simulator entry point
//!
//! Reads an event script, then drives the decision core one tick at a
//! time, logging every actuator command the way the arduino link would
//! receive them.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use helmsman_core::config::Tuning;
use helmsman_core::controller::Controller;
use helmsman_sim::{parse_script, Harness};

#[derive(Debug, Parser)]
#[command(name = "helmsman-sim", about = "Replay an event script against the decision core")]
struct Args {
    /// Event script file (see the script module docs for the format)
    script: PathBuf,

    /// Milliseconds between ticks; 0 replays instantly.
    /// Defaults to the rotate settle delay from the tuning.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Abort the run after this many ticks
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
}

fn main() -> ExitCode {
    // fmt().init() also installs the tracing-log bridge, so the core's
    // `log` records land in the same output
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = Args::parse();
    let tuning = Tuning::default();
    let tick_interval = args
        .tick_ms
        .map(Duration::from_millis)
        .unwrap_or(tuning.rotate_settle);

    let text = match std::fs::read_to_string(&args.script) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("cannot read script {}: {}", args.script.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let events = match parse_script(&text) {
        Ok(events) => events,
        Err(err) => {
            tracing::error!("cannot use script {}: {}", args.script.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let mut harness = Harness::new(Controller::new(tuning), events, tick_interval);
    harness.run(args.max_ticks);
    ExitCode::SUCCESS
}
