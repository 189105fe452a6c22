//! # connectz
//!
//! A generalized Connect Four ("connect Z") engine: two players drop tokens
//! into a gravity-filled grid of any width and height, and the first to line
//! up the configured number of tokens wins.
//!
//! Wins are found incrementally. Every token links to at most one run per
//! axis, runs live in an arena addressed by id, and a drop that bridges two
//! runs merges them in place, so the board is never rescanned.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, tokens, runs, state machine
//! - [`input`] — Game file reader (header plus lazy move stream)
//! - [`runner`] — Plays a game file and maps the result to an output code
//! - [`output`] — Numeric result codes
//! - [`render`] — Plain-text board rendering
//! - [`sim`] — Random self-play and result tallies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod output;
pub mod render;
pub mod runner;
pub mod sim;

pub use output::Output;
pub use runner::{play_file, run_file, Report};
