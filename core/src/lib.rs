#![no_std]

extern crate alloc;

pub use board::*;
pub use category::*;
pub use clue::*;
pub use error::*;
pub use fetcher::*;
pub use selector::*;
pub use types::*;

mod board;
mod category;
mod clue;
mod error;
mod fetcher;
mod selector;
mod types;

/// Number of categories on a board, one per column.
pub const CATEGORY_COUNT: usize = 6;

/// Number of clues taken from each category, one per row.
pub const CLUES_PER_CATEGORY: usize = 5;

/// Exclusive upper bound of the identifiers the category API knows about.
pub const CATEGORY_ID_LIMIT: CategoryId = 27723;

/// Glyph shown on a cell before anything has been revealed.
pub const PLACEHOLDER: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}
