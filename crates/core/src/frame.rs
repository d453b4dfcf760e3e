//! Frame and Game records.
//!
//! A [`Frame`] is created complete (index plus all of its rolls) and is
//! never mutated afterwards. A [`Game`] owns exactly ten frames once
//! built; both builders in [`crate::builder`] guarantee that before
//! handing one out. Uses a bounded `ArrayVec` for the per-frame roll
//! list, which is at most four entries long.

use arrayvec::ArrayVec;

use crate::types::{FrameKind, Pins, FINAL_FRAME, FRAME_COUNT, PIN_COUNT};

/// Upper bound on rolls recorded per frame (final frame: gutter ball,
/// strike, then two bonus rolls).
pub const MAX_ROLLS_PER_FRAME: usize = 4;

/// One of the ten turns in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    index: u8,
    rolls: ArrayVec<Pins, MAX_ROLLS_PER_FRAME>,
}

impl Frame {
    /// Build a completed frame from its recorded rolls.
    ///
    /// Callers (the builders) are responsible for the structural rules:
    /// 1-2 rolls for frames 1-9, 2-4 for the final frame, every value
    /// in `0..=10`.
    pub(crate) fn new(index: u8, rolls: &[Pins]) -> Self {
        debug_assert!((1..=FINAL_FRAME).contains(&index));
        debug_assert!(!rolls.is_empty() && rolls.len() <= MAX_ROLLS_PER_FRAME);
        debug_assert!(rolls.iter().all(|&p| p <= PIN_COUNT));
        Self {
            index,
            rolls: rolls.iter().copied().collect(),
        }
    }

    /// 1-based position of this frame (1..=10).
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Pins knocked down per roll, in play order.
    pub fn rolls(&self) -> &[Pins] {
        &self.rolls
    }

    /// Sum of all recorded rolls, bonus rolls included.
    pub fn pin_total(&self) -> u32 {
        self.rolls.iter().map(|&p| p as u32).sum()
    }

    /// Whether any roll in this frame cleared the full rack.
    ///
    /// Scoring treats a `[0, 10]` pair the same as a first-ball strike:
    /// both earn the two-roll lookahead bonus.
    pub fn has_strike(&self) -> bool {
        self.rolls.contains(&PIN_COUNT)
    }

    /// Classify the frame shape for exhaustive handling.
    pub fn kind(&self) -> FrameKind {
        match self.rolls.as_slice() {
            &[PIN_COUNT] => FrameKind::Strike,
            &[first, second] if first + second == PIN_COUNT => FrameKind::Spare { first, second },
            &[first, second] => FrameKind::Open { first, second },
            &[PIN_COUNT, bonus1, bonus2] => FrameKind::FinalStrike { bonus1, bonus2 },
            &[first, second, bonus] => FrameKind::FinalSpare {
                first,
                second,
                bonus,
            },
            &[_, _, bonus1, bonus2] => FrameKind::FinalGutterStrike { bonus1, bonus2 },
            _ => unreachable!("frames always hold 1..=4 rolls"),
        }
    }
}

/// A full ten-frame match. Owns its frames; append-only while building,
/// read-only once complete.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    frames: Vec<Frame>,
}

impl Game {
    pub(crate) fn new() -> Self {
        Self {
            frames: Vec::with_capacity(FRAME_COUNT),
        }
    }

    /// Append the next frame. Indices must arrive in play order.
    pub(crate) fn push_frame(&mut self, frame: Frame) {
        debug_assert!(self.frames.len() < FRAME_COUNT);
        debug_assert_eq!(frame.index() as usize, self.frames.len() + 1);
        self.frames.push(frame);
    }

    /// Completed frames, in play order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames recorded so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True once all ten frames are recorded.
    pub fn is_complete(&self) -> bool {
        self.frames.len() == FRAME_COUNT
    }

    /// Total game score. Both builders only return complete games, so
    /// the scoring precondition always holds here.
    pub fn score(&self) -> u32 {
        crate::scoring::score_game(&self.frames)
    }

    /// Flatten the frames back into the raw roll sequence they consumed.
    pub fn raw_rolls(&self) -> Vec<Pins> {
        self.frames
            .iter()
            .flat_map(|f| f.rolls().iter().copied())
            .collect()
    }
}
