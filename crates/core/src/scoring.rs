//! Game scoring - one pass with bounded lookahead.
//!
//! Frames 1-9 that clear the rack borrow from the rolls that follow:
//! a strike adds the next two rolls, a spare the next one. When two
//! strikes land back to back the second borrowed roll lives one frame
//! further along. The final frame's bonus rolls are recorded inside the
//! frame itself, so it never looks ahead and nothing counts twice.

use crate::frame::Frame;
use crate::types::PIN_COUNT;

/// Compute the total score for a complete ten-frame game.
///
/// A frame counts as a strike for lookahead whenever any of its rolls
/// cleared the rack, so a gutter-then-strike pair earns the two-roll
/// bonus just like a first-ball strike.
///
/// The slice must hold the full game; frame construction guarantees
/// that the lookahead indices below always land on recorded rolls.
pub fn score_game(frames: &[Frame]) -> u32 {
    let last = frames.len().saturating_sub(1);
    let mut total = 0;
    for (idx, frame) in frames.iter().enumerate() {
        let mut frame_score = frame.pin_total();
        if frame_score == PIN_COUNT as u32 && idx != last {
            let next = frames[idx + 1].rolls();
            frame_score += next[0] as u32;
            if frame.has_strike() {
                frame_score += match next.get(1) {
                    Some(&second) => second as u32,
                    // The next frame was itself a strike; its second
                    // borrowed roll opens the frame after it.
                    None => frames[idx + 2].rolls()[0] as u32,
                };
            }
        }
        total += frame_score;
    }
    total
}
