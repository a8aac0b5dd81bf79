use crate::CategoryId;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure of one retrieval, which aborts the whole fetch sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch category {id} (#{position})")]
pub struct FetchError<E> {
    /// Index of the failing identifier in the requested sequence.
    pub position: usize,
    pub id: CategoryId,
    #[source]
    pub source: E,
}
