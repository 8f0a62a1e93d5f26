//! craftplan harness: problem loading, cap presets, reporting and the CLI.
//!
//! The harness does NOT search. It turns a JSON problem into validated
//! kernel values, hands them to `craftplan_search`, and renders what comes
//! back.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod caps;
pub mod cli;
pub mod error;
pub mod problem;
pub mod runner;
