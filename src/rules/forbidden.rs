//! Double-three forbidden-move detection
//!
//! A move is forbidden when it would create open threes in two or more
//! directions at once. The check places the candidate mark speculatively
//! (untracked, so the real game's last move is undisturbed), slides the
//! open-three templates over the four windows centered on the candidate,
//! and restores the cell before reporting.

use tracing::trace;

use super::patterns::{TemplateCache, TEMPLATE_LEN};
use crate::board::{Board, Mark, Pos};

/// Cells inspected on each side of the candidate in every direction
const WINDOW_REACH: usize = 4;

/// Sliding-window open-three test over one extracted line.
///
/// Trivially false for windows shorter than one template. Matching is
/// exact cell-by-cell equality against each instantiated template.
pub fn open_three_in_window(window: &[Mark], mark: Mark, templates: &TemplateCache) -> bool {
    let Some(shapes) = templates.for_mark(mark) else {
        return false;
    };
    if window.len() < TEMPLATE_LEN {
        return false;
    }

    window
        .windows(TEMPLATE_LEN)
        .any(|cells| shapes.iter().any(|shape| cells == &shape[..]))
}

/// Untracked placement that restores the cell on every exit path.
struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Probe<'a> {
    /// None when the candidate cell cannot take the mark.
    fn place(board: &'a mut Board, pos: Pos, mark: Mark) -> Option<Self> {
        if board.place(pos.row, pos.col, mark, false) {
            Some(Self { board, pos })
        } else {
            None
        }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.remove_at(self.pos.row, self.pos.col);
    }
}

/// Would placing `mark` at (row, col) create two or more open threes?
///
/// An unplaceable candidate (occupied or out of bounds) is never a double
/// three; the caller rejects it for its own reasons.
pub fn is_double_three(
    board: &mut Board,
    row: usize,
    col: usize,
    mark: Mark,
    templates: &TemplateCache,
) -> bool {
    let Some(probe) = Probe::place(board, Pos::new(row, col), mark) else {
        return false;
    };
    let board = probe.board();
    let (rows, cols) = board.dimensions();

    let mut hits = 0;
    if open_three_in_window(clip(board.row_slice(row), col, cols), mark, templates) {
        hits += 1;
    }
    if open_three_in_window(clip(board.col_slice(col), row, rows), mark, templates) {
        hits += 1;
    }
    if open_three_in_window(&board.forward_diag_slice(row, col, WINDOW_REACH), mark, templates) {
        hits += 1;
    }
    if open_three_in_window(&board.back_diag_slice(row, col, WINDOW_REACH), mark, templates) {
        hits += 1;
    }

    trace!(row, col, hits, "double-three probe");
    hits >= 2
}

/// Clip a full row or column to the cells within reach of `center`.
fn clip(line: &[Mark], center: usize, len: usize) -> &[Mark] {
    let lo = center.saturating_sub(WINDOW_REACH);
    let hi = (center + WINDOW_REACH + 1).min(len);
    &line[lo..hi]
}
