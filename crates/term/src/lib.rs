//! Terminal scoreboard presentation.
//!
//! This module is pure string rendering (no I/O) so it can be
//! unit-tested; the binary decides where the output goes.
//!
//! Goals:
//! - Keep `core` free of any display concern
//! - Render the classic bowling symbols (`X`, `/`, `-`) per frame

pub mod scoreboard;

pub use cli_bowling_core as core;
pub use cli_bowling_types as types;

pub use scoreboard::{frame_cell, render_scoreboard};
