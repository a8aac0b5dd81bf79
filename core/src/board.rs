use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dense grid of clues for one game, addressed by `(column, row)`.
///
/// Built once from a fully fetched session list and dropped on restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    titles: Vec<String>,
    clues: Array2<Clue>,
}

impl Board {
    /// Takes ownership of the session list, keeping the first clues of each category.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.len() != CATEGORY_COUNT {
            log::warn!(
                "expected {} categories, got {}",
                CATEGORY_COUNT,
                categories.len()
            );
            return Err(GameError::InvalidBoardShape);
        }

        let mut titles = Vec::with_capacity(CATEGORY_COUNT);
        let mut clues = Vec::with_capacity(CATEGORY_COUNT * CLUES_PER_CATEGORY);
        for category in categories {
            if category.clues.len() < CLUES_PER_CATEGORY {
                log::warn!(
                    "category {:?} only has {} clues",
                    category.title,
                    category.clues.len()
                );
                return Err(GameError::InvalidBoardShape);
            }
            titles.push(category.title);
            clues.extend(
                category
                    .clues
                    .into_iter()
                    .take(CLUES_PER_CATEGORY)
                    .map(|clue| Clue {
                        reveal_state: RevealState::Hidden,
                        ..clue
                    }),
            );
        }

        let clues = Array2::from_shape_vec((CATEGORY_COUNT, CLUES_PER_CATEGORY), clues)
            .map_err(|_| GameError::InvalidBoardShape)?;

        Ok(Self { titles, clues })
    }

    /// `(columns, rows)`
    pub fn size(&self) -> Coord2 {
        let dim = self.clues.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, coords: Coord2) -> Result<&Clue> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.clues[coords.to_nd_index()])
    }

    pub fn state_at(&self, coords: Coord2) -> Result<RevealState> {
        Ok(self.clue_at(coords)?.reveal_state)
    }

    pub fn display_at(&self, coords: Coord2) -> Result<&str> {
        Ok(self.clue_at(coords)?.display())
    }

    /// Every address on the board, row by row as the cells are laid out.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (columns, rows) = self.size();
        (0..rows).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }

    pub fn revealed_count(&self) -> usize {
        self.clues
            .iter()
            .filter(|clue| !clue.reveal_state.is_hidden())
            .count()
    }

    /// Moves the clue at `coords` one step along hidden → question → answer.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;
        use RevealState::*;

        let coords = self.validate_coords(coords)?;
        let clue = &mut self.clues[coords.to_nd_index()];

        let outcome = match clue.reveal_state {
            Hidden => ShowedQuestion,
            ShowingQuestion => ShowedAnswer,
            ShowingAnswer => NoChange,
        };
        clue.reveal_state = clue.reveal_state.advance();

        log::trace!("reveal {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }
}
