//! Open-three shape templates
//!
//! A window contains an open three when some 6-cell stretch of it matches
//! one of four fixed shapes, where `X` is the acting mark and `_` empty:
//!
//! ```text
//! _ _ X X X _
//! _ X X X _ _
//! _ X _ X X _
//! _ X X _ X _
//! ```
//!
//! Each shape is a three that the mover could grow into an unstoppable
//! four. The shapes are instantiated per mark and cached; the mark domain
//! is two values, so the cache is a fixed eight-entry table that never
//! grows.

use crate::board::Mark;

/// Cells per template
pub const TEMPLATE_LEN: usize = 6;
/// Number of template shapes
pub const TEMPLATE_COUNT: usize = 4;

/// Shape masks: true marks the acting-mark cells
const SHAPES: [[bool; TEMPLATE_LEN]; TEMPLATE_COUNT] = [
    [false, false, true, true, true, false],
    [false, true, true, true, false, false],
    [false, true, false, true, true, false],
    [false, true, true, false, true, false],
];

/// Per-mark instantiations of the open-three templates, built once at
/// ruleset construction.
#[derive(Debug)]
pub struct TemplateCache {
    black: [[Mark; TEMPLATE_LEN]; TEMPLATE_COUNT],
    white: [[Mark; TEMPLATE_LEN]; TEMPLATE_COUNT],
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            black: instantiate(Mark::Black),
            white: instantiate(Mark::White),
        }
    }

    /// Templates for the acting mark; None for `Mark::Empty`, which never
    /// acts.
    #[inline]
    pub fn for_mark(&self, mark: Mark) -> Option<&[[Mark; TEMPLATE_LEN]; TEMPLATE_COUNT]> {
        match mark {
            Mark::Black => Some(&self.black),
            Mark::White => Some(&self.white),
            Mark::Empty => None,
        }
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

fn instantiate(mark: Mark) -> [[Mark; TEMPLATE_LEN]; TEMPLATE_COUNT] {
    let mut templates = [[Mark::Empty; TEMPLATE_LEN]; TEMPLATE_COUNT];
    for (template, shape) in templates.iter_mut().zip(SHAPES.iter()) {
        for (cell, &filled) in template.iter_mut().zip(shape.iter()) {
            if filled {
                *cell = mark;
            }
        }
    }
    templates
}
