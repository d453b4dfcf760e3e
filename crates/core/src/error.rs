//! Validation error taxonomy.
//!
//! Every error here is fatal to the run: the parser and the builder
//! return the first error they hit, and no partial game escapes. The
//! binary maps each one to a message and a non-zero exit.

use thiserror::Error;

/// Errors raised while tokenizing an input line of roll values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token did not parse as an integer.
    #[error("input must be a comma separated list of integers, got {token:?}")]
    InvalidToken { token: String },

    /// A parsed value was below zero.
    #[error("negative values are not accepted, only values between 0 and 10 (got {value})")]
    ValueTooSmall { value: i64 },

    /// A parsed value was above ten.
    #[error("values greater than 10 are not accepted, only values between 0 and 10 (got {value})")]
    ValueTooLarge { value: i64 },
}

/// Errors raised while partitioning a roll sequence into frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two rolls of one frame knocked down more than a full rack.
    #[error("sum of frame points {first} and {second} (rolls {first_pos} and {second_pos}) exceeds 10")]
    FrameSumExceeded {
        first: u8,
        second: u8,
        /// 0-based positions into the flat roll sequence.
        first_pos: usize,
        second_pos: usize,
    },

    /// Final-frame strike without its two trailing bonus rolls.
    #[error("input is missing bonus rolls: a strike in the final frame needs 2 more values")]
    MissingStrikeBonus,

    /// Final-frame spare without its one trailing bonus roll.
    #[error("input is missing a bonus roll: a spare in the final frame needs 1 more value")]
    MissingSpareBonus,

    /// The sequence ended before a frame could be completed.
    #[error("roll values ran out in frame {frame}")]
    OutOfRolls { frame: u8 },
}
