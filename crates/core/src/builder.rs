//! Frame construction.
//!
//! Two builders produce a complete [`Game`]: [`random_game`] draws
//! rolls from an RNG and cannot fail, while [`game_from_rolls`]
//! partitions a caller-supplied roll sequence and validates frame
//! structure as it goes. Both follow the same shape rules, so a game
//! flattened back to raw rolls rebuilds into the same frames.

use rand::Rng;

use crate::error::BuildError;
use crate::frame::{Frame, Game};
use crate::types::{Pins, FINAL_FRAME, PIN_COUNT};

/// Cursor over a supplied roll sequence.
///
/// Threads the read position explicitly instead of sharing a mutable
/// index across frame iterations; positions travel with the values so
/// validation errors can point at the offending rolls.
struct RollCursor<'a> {
    rolls: &'a [Pins],
    pos: usize,
}

impl<'a> RollCursor<'a> {
    fn new(rolls: &'a [Pins]) -> Self {
        Self { rolls, pos: 0 }
    }

    /// Take the next roll, returning its sequence position alongside it.
    fn take(&mut self) -> Option<(usize, Pins)> {
        let value = *self.rolls.get(self.pos)?;
        let pos = self.pos;
        self.pos += 1;
        Some((pos, value))
    }
}

/// Generate a complete game of random rolls.
///
/// Every draw is range-constrained up front (the second ball of a
/// frame only plays against the pins left standing), so this has no
/// error path.
pub fn random_game<R: Rng>(rng: &mut R) -> Game {
    let mut game = Game::new();
    for turn in 1..=FINAL_FRAME {
        let roll1 = rng.gen_range(0..=PIN_COUNT);
        let frame = if roll1 == PIN_COUNT {
            if turn < FINAL_FRAME {
                Frame::new(turn, &[roll1])
            } else {
                // Final frame: a strike earns two bonus rolls.
                let (bonus1, bonus2) = draw_strike_bonus(rng);
                Frame::new(turn, &[roll1, bonus1, bonus2])
            }
        } else {
            let roll2 = rng.gen_range(0..=PIN_COUNT - roll1);
            if turn < FINAL_FRAME {
                Frame::new(turn, &[roll1, roll2])
            } else if roll2 == PIN_COUNT {
                // Gutter ball then a strike: the rack was cleared, so
                // the final frame still earns two bonus rolls.
                let (bonus1, bonus2) = draw_strike_bonus(rng);
                Frame::new(turn, &[roll1, roll2, bonus1, bonus2])
            } else if roll1 + roll2 == PIN_COUNT {
                // Spare: one bonus roll on a fresh rack.
                let bonus = rng.gen_range(0..=PIN_COUNT);
                Frame::new(turn, &[roll1, roll2, bonus])
            } else {
                Frame::new(turn, &[roll1, roll2])
            }
        };
        game.push_frame(frame);
    }
    game
}

/// Draw the two bonus rolls that follow a final-frame strike.
///
/// The second draw is constrained by the pins the first one left
/// standing; only when the first bonus roll cleared the rack does the
/// second draw get a fresh `0..=10` range, because pins reset after a
/// strike but not otherwise.
fn draw_strike_bonus<R: Rng>(rng: &mut R) -> (Pins, Pins) {
    let bonus1 = rng.gen_range(0..=PIN_COUNT);
    let remaining = PIN_COUNT - bonus1;
    let bonus2 = if remaining == 0 {
        rng.gen_range(0..=PIN_COUNT)
    } else {
        rng.gen_range(0..=remaining)
    };
    (bonus1, bonus2)
}

/// Partition a flat roll sequence into the ten frames of a game.
///
/// Values must already be in `0..=10` (see [`crate::parse`]); this
/// validates frame structure: per-frame pin totals and the final
/// frame's bonus-roll requirements. Values left over once ten frames
/// are complete are ignored.
pub fn game_from_rolls(rolls: &[Pins]) -> Result<Game, BuildError> {
    let mut game = Game::new();
    let mut cursor = RollCursor::new(rolls);
    for turn in 1..=FINAL_FRAME {
        game.push_frame(build_frame(turn, &mut cursor)?);
    }
    Ok(game)
}

/// Consume one frame's worth of rolls from the cursor.
fn build_frame(turn: u8, cursor: &mut RollCursor<'_>) -> Result<Frame, BuildError> {
    let (pos1, roll1) = cursor
        .take()
        .ok_or(BuildError::OutOfRolls { frame: turn })?;

    if roll1 == PIN_COUNT {
        if turn < FINAL_FRAME {
            return Ok(Frame::new(turn, &[roll1]));
        }
        // Final-frame strike: exactly two bonus values must follow.
        let bonus1 = cursor.take().ok_or(BuildError::MissingStrikeBonus)?.1;
        let bonus2 = cursor.take().ok_or(BuildError::MissingStrikeBonus)?.1;
        return Ok(Frame::new(turn, &[roll1, bonus1, bonus2]));
    }

    let (pos2, roll2) = cursor
        .take()
        .ok_or(BuildError::OutOfRolls { frame: turn })?;
    if roll1 + roll2 > PIN_COUNT {
        return Err(BuildError::FrameSumExceeded {
            first: roll1,
            second: roll2,
            first_pos: pos1,
            second_pos: pos2,
        });
    }
    if roll1 + roll2 < PIN_COUNT || turn < FINAL_FRAME {
        // Open frame, or a frames-1..9 spare. No lookahead is recorded
        // here; the scorer reads the following frame instead.
        return Ok(Frame::new(turn, &[roll1, roll2]));
    }

    // The final frame closed out the rack, so its bonus rolls are part
    // of the frame itself.
    if roll2 == PIN_COUNT {
        // Gutter ball then a strike: two bonus values, as for a strike.
        let bonus1 = cursor.take().ok_or(BuildError::MissingStrikeBonus)?.1;
        let bonus2 = cursor.take().ok_or(BuildError::MissingStrikeBonus)?.1;
        Ok(Frame::new(turn, &[roll1, roll2, bonus1, bonus2]))
    } else {
        let bonus = cursor.take().ok_or(BuildError::MissingSpareBonus)?.1;
        Ok(Frame::new(turn, &[roll1, roll2, bonus]))
    }
}
