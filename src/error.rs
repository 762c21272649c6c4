use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    StartOutsideGrid,
    GoalOutsideGrid,
    NoPath,
}

impl Error {
    /// True for errors caused by the arguments rather than the search.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::EmptyGrid | Error::StartOutsideGrid | Error::GoalOutsideGrid => true,
            Error::NoPath => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Error::StartOutsideGrid => write!(f, "start is outside the grid"),
            Error::GoalOutsideGrid => write!(f, "goal is outside the grid"),
            Error::NoPath => write!(f, "no path found"),
        }
    }
}

impl error::Error for Error {}
