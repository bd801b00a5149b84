//! Omok ruleset layered on the base board
//!
//! Omok fixes the board to 15x15 with a five-in-a-row target and adds two
//! rules on top of the base game:
//! 1. A move may not create two or more open threes at once
//! 2. Exactly five in a row wins; overlines do not
//!
//! The ruleset owns the board outright (composition, no dynamic dispatch)
//! and holds the per-mark open-three template cache for the lifetime of
//! the game.

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Mark};
use crate::rules::{check_win, is_double_three, TemplateCache, WinMode};

/// Board edge length
pub const BOARD_SIZE: usize = 15;
/// Winning run length
pub const WIN_LEN: usize = 5;

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinates are outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
    #[error("move would create a double three")]
    DoubleThree,
    #[error("game is already finished")]
    GameFinished,
}

/// Two-player Omok game.
///
/// Black moves first; the mover alternates after every accepted move until
/// a win freezes the game. Rejected moves never mutate the board or the
/// turn state.
#[derive(Debug)]
pub struct Omok {
    board: Board,
    mover: Mark,
    /// The opening move is exempt from the double-three rule
    first_move_done: bool,
    finished: bool,
    winner: Option<Mark>,
    templates: TemplateCache,
}

impl Omok {
    pub fn new() -> Self {
        Self {
            board: Board::new(BOARD_SIZE, BOARD_SIZE, WIN_LEN),
            mover: Mark::Black,
            first_move_done: false,
            finished: false,
            winner: None,
            templates: TemplateCache::new(),
        }
    }

    /// Attempt the mover's placement at (row, col).
    ///
    /// On success the board is committed, a winning move freezes the game,
    /// and otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// [`MoveError`] names the first rule the move broke; nothing was
    /// mutated.
    pub fn try_place(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameFinished);
        }
        let (rows, cols) = self.board.dimensions();
        if row >= rows || col >= cols {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty_at(row, col) {
            return Err(MoveError::Occupied);
        }

        // The opening move cannot form two threats at once, so it skips
        // the probe even on a seeded board.
        if self.first_move_done
            && is_double_three(&mut self.board, row, col, self.mover, &self.templates)
        {
            debug!(row, col, mover = ?self.mover, "move rejected as double three");
            return Err(MoveError::DoubleThree);
        }

        let placed = self.board.place(row, col, self.mover, true);
        debug_assert!(placed, "validated placement must succeed");
        self.first_move_done = true;

        if check_win(&self.board, WinMode::Exact) {
            debug!(row, col, winner = ?self.mover, "winning move");
            self.finished = true;
            self.winner = Some(self.mover);
        } else {
            self.mover = self.mover.opponent();
        }
        Ok(())
    }

    /// Boolean placement surface: true iff the move was committed.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        self.try_place(row, col).is_ok()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The winning mark; None while the game is undecided.
    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The mark placed by the next accepted move
    #[inline]
    pub fn mover(&self) -> Mark {
        self.mover
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for seeding positions and analysis harnesses.
    /// Bypasses turn bookkeeping entirely.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Return to the initial state: empty board, Black to move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.mover = Mark::Black;
        self.first_move_done = false;
        self.finished = false;
        self.winner = None;
    }
}

impl Default for Omok {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_moves_first_and_turns_alternate() {
        let mut game = Omok::new();
        assert_eq!(game.mover(), Mark::Black);
        assert!(game.attempt_move(7, 7));
        assert_eq!(game.mover(), Mark::White);
        assert!(game.attempt_move(7, 8));
        assert_eq!(game.mover(), Mark::Black);
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut game = Omok::new();
        assert!(game.attempt_move(7, 7));
        assert_eq!(game.try_place(7, 7), Err(MoveError::Occupied));
        assert_eq!(game.board().mark_at(7, 7), Mark::Black, "occupant unchanged");
        assert_eq!(game.mover(), Mark::White, "turn unchanged");
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Omok::new();
        assert_eq!(game.try_place(BOARD_SIZE, 0), Err(MoveError::OutOfBounds));
        assert_eq!(game.try_place(0, BOARD_SIZE), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_double_three_rejected_and_board_unchanged() {
        let mut game = Omok::new();
        // Black builds a row pair and a column pair around (7, 7); White
        // answers far away on row 0.
        for &(br, bc, wr, wc) in &[(7, 5, 0, 0), (7, 6, 0, 1), (8, 7, 0, 2), (9, 7, 0, 3)] {
            assert!(game.attempt_move(br, bc), "black setup move");
            assert!(game.attempt_move(wr, wc), "white setup move");
        }

        assert_eq!(game.try_place(7, 7), Err(MoveError::DoubleThree));
        assert!(game.board().is_empty_at(7, 7), "rejected move left no mark");
        assert_eq!(game.mover(), Mark::Black, "turn did not pass");

        // A quieter move is still available
        assert!(game.attempt_move(3, 3));
    }

    #[test]
    fn test_single_open_three_accepted() {
        let mut game = Omok::new();
        assert!(game.attempt_move(7, 5));
        assert!(game.attempt_move(0, 0));
        assert!(game.attempt_move(7, 6));
        assert!(game.attempt_move(0, 1));
        assert!(game.attempt_move(7, 7), "one open three is legal");
    }

    #[test]
    fn test_first_move_exempt_from_double_three() {
        let mut game = Omok::new();
        // Seed a position where (7, 7) would be a textbook double three.
        let board = game.board_mut();
        for &(row, col) in &[(7, 5), (7, 6), (8, 7), (9, 7)] {
            assert!(board.place(row, col, Mark::Black, false));
        }

        assert!(
            game.attempt_move(7, 7),
            "the opening move skips the double-three rule"
        );
    }

    #[test]
    fn test_exact_five_wins_and_freezes_game() {
        let mut game = Omok::new();
        for &(br, bc, wr, wc) in &[(7, 3, 0, 0), (7, 4, 0, 1), (7, 5, 0, 2), (7, 6, 0, 3)] {
            assert!(game.attempt_move(br, bc));
            assert!(game.attempt_move(wr, wc));
        }
        assert!(!game.is_finished());

        assert!(game.attempt_move(7, 7), "completing move is legal");
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Mark::Black));
        assert_eq!(game.mover(), Mark::Black, "winner keeps the mover slot");
        assert_eq!(game.try_place(10, 10), Err(MoveError::GameFinished));
    }

    #[test]
    fn test_diagonal_five_wins() {
        let mut game = Omok::new();
        // Black walks the main diagonal from the corner, White stacks a
        // capped column beside it
        for i in 0..4 {
            assert!(game.attempt_move(i, i));
            assert!(game.attempt_move(i, 5));
        }
        assert!(game.attempt_move(4, 4));

        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Mark::Black));
    }

    #[test]
    fn test_overline_is_not_a_win() {
        let mut game = Omok::new();
        // Black lays 3,4,5,6 and 8 on row 7, then bridges at 7 for a run
        // of six.
        let black = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 8)];
        let white = [(0, 0), (0, 1), (0, 2), (0, 3), (2, 0)];
        for (&(br, bc), &(wr, wc)) in black.iter().zip(white.iter()) {
            assert!(game.attempt_move(br, bc), "black setup move");
            assert!(game.attempt_move(wr, wc), "white setup move");
        }

        assert!(game.attempt_move(7, 7), "bridging move is legal");
        assert!(!game.is_finished(), "a run of six does not win");
        assert_eq!(game.winner(), None);
        assert!(
            game.board().has_win(),
            "the base at-least rule would have counted the overline"
        );
        assert_eq!(game.mover(), Mark::White, "play continues");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Omok::new();
        assert!(game.attempt_move(7, 7));
        assert!(game.attempt_move(8, 8));
        game.reset();

        assert_eq!(game.mover(), Mark::Black);
        assert_eq!(game.winner(), None);
        assert!(!game.is_finished());
        assert!(game.board().is_empty_at(7, 7));
        assert!(game.board().is_empty_at(8, 8));

        // The first-move exemption applies again after a reset
        let board = game.board_mut();
        for &(row, col) in &[(7, 5), (7, 6), (8, 7), (9, 7)] {
            assert!(board.place(row, col, Mark::Black, false));
        }
        assert!(game.attempt_move(7, 7));
    }
}
