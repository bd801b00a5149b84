//! Game rules layered on the base board
//!
//! This module implements the Omok rule set:
//! - Open-three shape templates and their per-mark cache
//! - Double-three forbidden-move detection
//! - Win evaluation (at-least vs exact run length)

pub mod forbidden;
pub mod patterns;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{is_double_three, open_three_in_window};
pub use patterns::{TemplateCache, TEMPLATE_COUNT, TEMPLATE_LEN};
pub use win::{check_win, WinMode};
