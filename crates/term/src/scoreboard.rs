//! Scoreboard rendering: two rows of frame cells plus the total.
//!
//! Frame ids sit over the per-frame roll displays. Symbol rules:
//! a strike shows as `X`, a spare as `n, /`, a gutter ball in an open
//! frame as `-`, and the gutter-then-strike pair as `-, X`. Final-frame
//! cells append their bonus rolls as plain pin counts.

use std::fmt::Write as _;

use crate::core::{Frame, Game};
use crate::types::{FrameKind, Pins};

/// Render the display cell for one frame.
pub fn frame_cell(frame: &Frame) -> String {
    match frame.kind() {
        FrameKind::Strike => "X".to_string(),
        FrameKind::Spare { first: 0, .. } => "-, X".to_string(),
        FrameKind::Spare { first, .. } => format!("{first}, /"),
        FrameKind::Open { first, second } => {
            format!("{}, {}", pin_glyph(first), pin_glyph(second))
        }
        FrameKind::FinalStrike { bonus1, bonus2 } => format!("X, {bonus1}, {bonus2}"),
        FrameKind::FinalGutterStrike { bonus1, bonus2 } => {
            format!("-, X, {bonus1}, {bonus2}")
        }
        FrameKind::FinalSpare { first, bonus, .. } => format!("{first}, /, {bonus}"),
    }
}

/// Render the full scoreboard: the id row, the roll row, and the
/// trailing `Game score: N` line.
pub fn render_scoreboard(game: &Game, score: u32) -> String {
    let mut ids = String::new();
    let mut rolls = String::new();
    for frame in game.frames() {
        let id = format!("f{}", frame.index());
        let cell = frame_cell(frame);
        let width = id.len().max(cell.len());
        let _ = write!(ids, "| {id:^width$} ");
        let _ = write!(rolls, "| {cell:<width$} ");
    }
    ids.push('|');
    rolls.push('|');
    format!("{ids}\n{rolls}\nGame score: {score}")
}

fn pin_glyph(pins: Pins) -> String {
    if pins == 0 {
        "-".to_string()
    } else {
        pins.to_string()
    }
}
