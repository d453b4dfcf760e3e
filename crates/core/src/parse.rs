//! Tokenizing an input line of comma separated roll values.

use crate::error::ParseError;
use crate::types::{Pins, PIN_COUNT};

/// Parse one line of comma separated pin counts.
///
/// Tokens are trimmed before parsing, so `"5, 5, 3"` and `"5,5,3"` are
/// equivalent. The first offending token aborts the parse: non-integer
/// tokens, negative values, and values above 10 each get their own
/// error.
pub fn parse_roll_line(line: &str) -> Result<Vec<Pins>, ParseError> {
    let mut values = Vec::new();
    for token in line.trim().split(',') {
        let token = token.trim();
        let value: i64 = token.parse().map_err(|_| ParseError::InvalidToken {
            token: token.to_string(),
        })?;
        if value < 0 {
            return Err(ParseError::ValueTooSmall { value });
        }
        if value > PIN_COUNT as i64 {
            return Err(ParseError::ValueTooLarge { value });
        }
        values.push(value as Pins);
    }
    Ok(values)
}
