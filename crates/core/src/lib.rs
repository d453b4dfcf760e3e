//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains frame construction, validation, and scoring for
//! one game of ten-pin bowling. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: builders take an explicit RNG, so the same seed
//!   produces identical games
//! - **Testable**: every rule has a unit test below it
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`frame`]: the [`Frame`] and [`Game`] records with their invariants
//! - [`builder`]: random and supplied-sequence frame construction
//! - [`scoring`]: total-score computation with strike/spare lookahead
//! - [`parse`]: tokenizing a comma separated line of roll values
//! - [`error`]: the validation error taxonomy
//!
//! # Game Rules
//!
//! - Frames 1-9 hold one roll (a strike) or two rolls summing to at
//!   most 10.
//! - The final frame embeds its bonus rolls: three rolls after a strike
//!   or a spare, four after a gutter-then-strike pair.
//! - A strike scores 10 plus the next two rolls; a spare scores 10 plus
//!   the next roll. The final frame never looks ahead.
//!
//! # Example
//!
//! ```
//! use cli_bowling_core::game_from_rolls;
//!
//! // Twelve consecutive strikes: the perfect game.
//! let game = game_from_rolls(&[10; 12]).unwrap();
//! assert_eq!(game.score(), 300);
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod parse;
pub mod scoring;

pub use cli_bowling_types as types;

// Re-export commonly used items for convenience
pub use builder::{game_from_rolls, random_game};
pub use error::{BuildError, ParseError};
pub use frame::{Frame, Game};
pub use parse::parse_roll_line;
pub use scoring::score_game;
