//! Board-agnostic decision core for the Helmsman car controller
//!
//! This crate contains all control logic that does not depend on a
//! specific transport or vehicle:
//!
//! - Countdown timer primitive
//! - Maneuvers (primitive steps, composite routes, missions in flight)
//! - Driver that advances the active mission one increment per tick
//! - Mode state machine
//! - Top-level controller tying event dispatch to maneuver progress
//! - Tuning constants
//! - Collaborator traits (event source, actuator link)
//!
//! The whole crate is single-threaded and cooperative: the only entry
//! point is [`controller::Controller::tick`], invoked repeatedly by an
//! external loop. No call ever blocks or sleeps; everything a maneuver
//! needs to resume is plain data held between ticks.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod driver;
pub mod maneuver;
pub mod state;
pub mod timer;
pub mod traits;
