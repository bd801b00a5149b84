//! Board representation for m x n, k-in-a-row games

pub mod board;
pub mod grid;


// Re-exports
pub use board::Board;
pub use grid::Grid;

use serde::{Deserialize, Serialize};

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    Black,
    White,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Black => Mark::White,
            Mark::White => Mark::Black,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// Position on the board, 0-indexed, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta, or None when the result leaves `rows x cols`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, rows: usize, cols: usize) -> Option<Pos> {
        let r = self.row as i64 + dr as i64;
        let c = self.col as i64 + dc as i64;
        if r < 0 || c < 0 || r >= rows as i64 || c >= cols as i64 {
            None
        } else {
            Some(Pos::new(r as usize, c as usize))
        }
    }
}

/// The four scan directions through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up / down
    Vertical,
    /// Left / right
    Horizontal,
    /// "/" diagonal, bottom-left to top-right
    ForwardDiag,
    /// "\" diagonal, top-left to bottom-right
    BackDiag,
}

/// All directions, in the order `count_run` reports them
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Vertical,
    Direction::Horizontal,
    Direction::ForwardDiag,
    Direction::BackDiag,
];

impl Direction {
    /// Delta that pushes a run's left endpoint one cell outward.
    ///
    /// "Left" is the lower-coordinate end for vertical and horizontal runs
    /// and the slice-start end for diagonals (bottom-left for "/", top-left
    /// for "\").
    #[inline]
    pub fn left_delta(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (-1, 0),
            Direction::Horizontal => (0, -1),
            Direction::ForwardDiag => (1, -1),
            Direction::BackDiag => (-1, -1),
        }
    }

    /// Delta that pushes a run's right endpoint one cell outward.
    #[inline]
    pub fn right_delta(self) -> (i32, i32) {
        let (dr, dc) = self.left_delta();
        (-dr, -dc)
    }
}

/// A same-mark run through the last move, in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// Number of consecutive cells holding the mark
    pub len: usize,
    pub dir: Direction,
    /// Outermost cell reached extending leftward
    pub left: Pos,
    /// Outermost cell reached extending rightward
    pub right: Pos,
}
