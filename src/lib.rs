//! Omok rules engine over a generic m x n, k-in-a-row board
//!
//! Two layers, base first:
//! - [`board`]: dual-grid board state, slice extraction and incremental
//!   run counting from the last move
//! - [`rules`]: open-three templates, double-three detection and win
//!   evaluation
//! - [`omok`]: the Omok ruleset tying both together with turn bookkeeping
//! - [`replay`]: recorded-game parsing and replay for test harnesses
//!
//! The base board accepts any two-mark placement and counts a win as "at
//! least k in a row". Omok fixes a 15x15 board with k = 5 and layers on
//! the two variant rules: no move may create two open threes at once, and
//! only a run of exactly five wins (overlines do not).
//!
//! # Quick Start
//!
//! ```
//! use omok::{Mark, Omok};
//!
//! let mut game = Omok::new();
//! assert!(game.attempt_move(7, 7));
//! assert!(game.attempt_move(7, 8));
//! assert!(!game.attempt_move(7, 7)); // occupied
//! assert_eq!(game.winner(), None);
//! assert_eq!(game.mover(), Mark::Black);
//! ```

pub mod board;
pub mod omok;
pub mod replay;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Mark, Pos, RunSpan};
pub use omok::{MoveError, Omok, BOARD_SIZE, WIN_LEN};
pub use rules::{TemplateCache, WinMode};
