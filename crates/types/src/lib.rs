//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Pins on a full rack.
pub const PIN_COUNT: u8 = 10;

/// Frames in one game.
pub const FRAME_COUNT: usize = 10;

/// 1-based index of the final frame.
pub const FINAL_FRAME: u8 = 10;

/// Highest total a game can reach (twelve consecutive strikes).
pub const MAX_GAME_SCORE: u32 = 300;

/// Pins knocked down by a single roll, always in `0..=10`.
pub type Pins = u8;

/// Structural classification of a completed frame.
///
/// Frames 1-9 take one of the first three shapes. The final frame adds
/// the bonus-roll shapes, since its bonus rolls are recorded inside the
/// frame itself. Every legal frame matches exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Single roll clearing the rack.
    Strike,
    /// Two rolls summing below 10.
    Open { first: Pins, second: Pins },
    /// Two rolls summing to exactly 10 (includes the gutter-then-strike pair).
    Spare { first: Pins, second: Pins },
    /// Final-frame strike plus its two bonus rolls.
    FinalStrike { bonus1: Pins, bonus2: Pins },
    /// Final-frame gutter ball followed by a strike, plus two bonus rolls.
    FinalGutterStrike { bonus1: Pins, bonus2: Pins },
    /// Final-frame spare plus its one bonus roll.
    FinalSpare {
        first: Pins,
        second: Pins,
        bonus: Pins,
    },
}
