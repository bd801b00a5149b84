//! Win evaluation over counted runs
//!
//! The base board and the Omok ruleset share one evaluation routine and
//! differ only in how a run length satisfies the target: at-least for the
//! base game, exactly-equal for Omok, where overlines never win.

use crate::board::Board;

/// How a run length satisfies the win target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinMode {
    /// Runs of at least the target length win; overlines count
    AtLeast,
    /// Only runs of exactly the target length win
    Exact,
}

/// Check the runs through the last move against the board's win target.
pub fn check_win(board: &Board, mode: WinMode) -> bool {
    let target = board.win_len();
    board.count_run().iter().any(|span| match mode {
        WinMode::AtLeast => span.len >= target,
        WinMode::Exact => span.len == target,
    })
}
