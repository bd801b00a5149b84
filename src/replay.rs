//! Recorded-game replay support
//!
//! Fixtures store one move per line as `x,y,moveNumber` with 1-indexed
//! coordinates, in play order; the expected winner travels alongside the
//! record (historically encoded in the fixture's file name) as 0 for an
//! undecided game, 1 for the first mover and 2 for the second. Lines that
//! do not look like move records (headers, trailers, blanks) are skipped,
//! matching the original fixture files.

use thiserror::Error;
use tracing::debug;

use crate::board::{Mark, Pos};
use crate::omok::{MoveError, Omok};

/// Replay failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("line {line}: recorded coordinates are 1-indexed, found 0")]
    ZeroCoordinate { line: usize },
    #[error("move {index} at ({row}, {col}) rejected: {source}")]
    IllegalMove {
        index: usize,
        row: usize,
        col: usize,
        source: MoveError,
    },
}

/// Parse recorded moves, applying the 1-indexed to 0-indexed adjustment.
///
/// A line is a move record when its first two comma-separated fields are
/// integers; everything else is skipped.
pub fn parse_moves(text: &str) -> Result<Vec<Pos>, ReplayError> {
    let mut moves = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let mut fields = line.trim().split(',').map(str::trim);
        let coords = match (fields.next(), fields.next()) {
            (Some(x), Some(y)) => x.parse::<usize>().ok().zip(y.parse::<usize>().ok()),
            _ => None,
        };
        let Some((x, y)) = coords else {
            continue;
        };
        if x == 0 || y == 0 {
            return Err(ReplayError::ZeroCoordinate { line: lineno + 1 });
        }
        moves.push(Pos::new(x - 1, y - 1));
    }
    Ok(moves)
}

/// Replay a recorded game from a fresh board.
///
/// Every recorded move must be accepted; the first rejection aborts the
/// replay with the move's index (1-based) and the rule it broke.
pub fn replay(moves: &[Pos]) -> Result<Omok, ReplayError> {
    let mut game = Omok::new();
    for (index, pos) in moves.iter().enumerate() {
        game.try_place(pos.row, pos.col)
            .map_err(|source| ReplayError::IllegalMove {
                index: index + 1,
                row: pos.row,
                col: pos.col,
                source,
            })?;
    }
    debug!(moves = moves.len(), winner = ?game.winner(), "replay complete");
    Ok(game)
}

/// Decode a fixture's expected-winner code.
pub fn expected_winner(code: u8) -> Option<Mark> {
    match code {
        1 => Some(Mark::Black),
        2 => Some(Mark::White),
        _ => None,
    }
}
