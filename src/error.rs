use std::path::PathBuf;
use thiserror::Error;

use crate::knothash::KnotError;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    #[error("cannot parse line '{0}'")]
    InvalidLine(String),

    #[error("unexpected character '{0}' at offset {1}")]
    InvalidChar(char, usize),

    #[error("invalid dance move '{0}'")]
    InvalidMove(String),

    #[error("unknown hex direction '{0}'")]
    Direction(String),

    #[error("the path breaks off at row {0}, column {1}")]
    DeadEnd(usize, usize),

    #[error("puzzle input is empty")]
    EmptyInput,

    #[error("no answer: {0}")]
    NoSolution(&'static str),

    #[error("no solver for day {0}")]
    UnknownDay(u8),

    #[error(transparent)]
    Knot(#[from] KnotError),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
