use crate::types::Year;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("anchor table needs at least two entries, got {count}")]
    TooFewAnchors { count: usize },

    #[error("anchor years must be strictly increasing: {prev} followed by {next}")]
    UnsortedAnchors { prev: Year, next: Year },
}

pub type SeriesResult<T> = Result<T, SeriesError>;
