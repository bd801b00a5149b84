//! Dual-grid board state with run counting

use std::fmt;

use super::grid::Grid;
use super::{Mark, Pos, RunSpan, ALL_DIRECTIONS};
use crate::rules::win::{check_win, WinMode};

/// Game board for an m x n, k-in-a-row game.
///
/// The same cells are held twice: a row-major grid and its transpose,
/// mirrored on every write so column slices are as cheap as row slices.
/// Deliberately not `Clone`; a game owns exactly one board and the
/// double-three analysis edits it in place under a restore guard.
///
/// Callers are responsible for choosing `k <= max(rows, cols)`; a larger
/// target simply makes the board unwinnable.
#[derive(Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_len: usize,
    /// Row-major cells
    cells: Grid,
    /// Column-major mirror of `cells`
    flipped: Grid,
    /// Most recent tracked placement; None before any move
    last_move: Option<Pos>,
}

impl Board {
    /// Create an empty `rows x cols` board that wins at a `win_len` run.
    ///
    /// Panics on a zero dimension.
    pub fn new(rows: usize, cols: usize, win_len: usize) -> Self {
        Self {
            rows,
            cols,
            win_len,
            cells: Grid::new(rows, cols),
            flipped: Grid::new(cols, rows),
            last_move: None,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn win_len(&self) -> usize {
        self.win_len
    }

    #[inline]
    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells.get(row, col)
    }

    #[inline]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col) == Mark::Empty
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Write `mark` into an empty cell.
    ///
    /// Returns false without mutating on an out-of-bounds target, an
    /// occupied target, or `Mark::Empty` (use [`Board::remove_at`] to clear
    /// a cell). Both grids are updated together. With `update_last` unset
    /// the placement is invisible to [`Board::count_run`], which is how the
    /// ruleset probes a candidate move without disturbing the real game.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark, update_last: bool) -> bool {
        if row >= self.rows || col >= self.cols || mark == Mark::Empty {
            return false;
        }
        if self.cells.get(row, col) != Mark::Empty {
            return false;
        }

        self.cells.set(row, col, mark);
        self.flipped.set(col, row, mark);
        if update_last {
            self.last_move = Some(Pos::new(row, col));
        }
        true
    }

    /// Clear one cell in both grids.
    ///
    /// Only meant to undo an untracked probe placement; out-of-bounds
    /// coordinates are ignored. The last-move coordinate is left alone.
    pub fn remove_at(&mut self, row: usize, col: usize) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        self.cells.set(row, col, Mark::Empty);
        self.flipped.set(col, row, Mark::Empty);
    }

    /// Empty every cell in both grids. The last-move coordinate is not
    /// reset; run counting treats a stale pointer into an empty cell as
    /// "no runs".
    pub fn clear(&mut self) {
        self.cells.fill_empty();
        self.flipped.fill_empty();
    }

    /// One full row, length `cols`
    #[inline]
    pub fn row_slice(&self, row: usize) -> &[Mark] {
        self.cells.row(row)
    }

    /// One full column, length `rows`, served from the transposed grid
    #[inline]
    pub fn col_slice(&self, col: usize) -> &[Mark] {
        self.flipped.row(col)
    }

    /// The "/" diagonal through (row, col), ordered bottom-left to
    /// top-right.
    ///
    /// `window == 0` yields the whole diagonal; `window == w` yields at
    /// most `2w + 1` cells centered on (row, col), fewer where the board
    /// edge cuts the walk short.
    pub fn forward_diag_slice(&self, row: usize, col: usize, window: usize) -> Vec<Mark> {
        if window > 0 {
            return self.windowed_diag(Pos::new(row, col), window, (1, -1));
        }

        // Full diagonal: back up to the bottom-left-most cell, then walk
        // up-right until the edge.
        let delta = (self.rows - 1 - row).min(col);
        let mut r = row + delta;
        let mut c = col - delta;
        let mut cells = Vec::new();
        loop {
            cells.push(self.cells.get(r, c));
            if r == 0 || c + 1 == self.cols {
                break;
            }
            r -= 1;
            c += 1;
        }
        cells
    }

    /// The "\" diagonal through (row, col), ordered top-left to
    /// bottom-right. Windowing as in [`Board::forward_diag_slice`].
    pub fn back_diag_slice(&self, row: usize, col: usize, window: usize) -> Vec<Mark> {
        if window > 0 {
            return self.windowed_diag(Pos::new(row, col), window, (-1, -1));
        }

        let delta = row.min(col);
        let mut r = row - delta;
        let mut c = col - delta;
        let mut cells = Vec::new();
        while r < self.rows && c < self.cols {
            cells.push(self.cells.get(r, c));
            r += 1;
            c += 1;
        }
        cells
    }

    /// Walk `window` steps toward the slice front, then toward the back,
    /// keeping whatever lies inside the board. `front` is the delta toward
    /// the front of the returned slice; the back delta is its negation.
    fn windowed_diag(&self, center: Pos, window: usize, front: (i32, i32)) -> Vec<Mark> {
        let mut cells = Vec::with_capacity(2 * window + 1);

        let mut cur = center;
        for _ in 0..window {
            match cur.offset(front.0, front.1, self.rows, self.cols) {
                Some(next) => {
                    cells.push(self.cells.get(next.row, next.col));
                    cur = next;
                }
                None => break,
            }
        }
        cells.reverse();
        cells.push(self.cells.get(center.row, center.col));

        cur = center;
        for _ in 0..window {
            match cur.offset(-front.0, -front.1, self.rows, self.cols) {
                Some(next) => {
                    cells.push(self.cells.get(next.row, next.col));
                    cur = next;
                }
                None => break,
            }
        }
        cells
    }

    /// Measure the runs through the last tracked move.
    ///
    /// Starts a length-1 run per direction at the last move and extends
    /// all left and right endpoints outward one cell per round, in
    /// lock-step, stopping each endpoint at the board edge or the first
    /// cell not holding the mover's mark. Rounds stop once nothing grew or
    /// every direction already reached the win target.
    ///
    /// Empty when no move has been tracked yet, or when the last-move cell
    /// no longer holds a mark.
    pub fn count_run(&self) -> Vec<RunSpan> {
        let Some(origin) = self.last_move else {
            return Vec::new();
        };
        let mark = self.cells.get(origin.row, origin.col);
        if mark == Mark::Empty {
            return Vec::new();
        }

        let mut spans: Vec<RunSpan> = ALL_DIRECTIONS
            .iter()
            .map(|&dir| RunSpan {
                len: 1,
                dir,
                left: origin,
                right: origin,
            })
            .collect();

        loop {
            let mut changed = false;
            for span in &mut spans {
                if self.try_extend(mark, &mut span.left, span.dir.left_delta()) {
                    span.len += 1;
                    changed = true;
                }
                if self.try_extend(mark, &mut span.right, span.dir.right_delta()) {
                    span.len += 1;
                    changed = true;
                }
            }

            let min_len = spans.iter().map(|s| s.len).min().unwrap_or(0);
            if !changed || min_len >= self.win_len {
                break;
            }
        }

        spans
    }

    /// Push one endpoint a single cell outward when the next cell holds
    /// the run's mark. True iff it moved.
    fn try_extend(&self, mark: Mark, endpoint: &mut Pos, delta: (i32, i32)) -> bool {
        match endpoint.offset(delta.0, delta.1, self.rows, self.cols) {
            Some(next) if self.cells.get(next.row, next.col) == mark => {
                *endpoint = next;
                true
            }
            _ => false,
        }
    }

    /// Base-game win test: some run through the last move is at least the
    /// win target long. Overlines count.
    pub fn has_win(&self) -> bool {
        check_win(self, WinMode::AtLeast)
    }
}

impl fmt::Display for Board {
    /// Bordered text rendering: space for empty, `●` for black, `○` for
    /// white.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = "-".repeat(2 * self.cols + 1);
        writeln!(f, "{}", line)?;
        for row in 0..self.rows {
            write!(f, "|")?;
            for col in 0..self.cols {
                let glyph = match self.cells.get(row, col) {
                    Mark::Empty => ' ',
                    Mark::Black => '●',
                    Mark::White => '○',
                };
                write!(f, "{}|", glyph)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
