use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostic::BitCriteria;

// Every way a puzzle can fail, from reading the file to solving it
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: '{value}' is not a valid number")]
    InvalidNumber {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: missing field")]
    MissingField { line: u64 },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: u64, command: String },

    #[error("line {line}: '{character}' is not a binary digit")]
    InvalidBit { line: u64, character: char },

    #[error("line {line}: reading is {width} bits wide, at most 64 are supported")]
    ReadingTooWide { line: u64, width: usize },

    #[error("{width} bits do not fit in a 64-bit reading")]
    TooManyBits { width: usize },

    #[error("diagnostic report is empty")]
    EmptyReport,

    #[error("reading {index} has {found} bits, expected {expected}")]
    RaggedReport {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{criteria:?} filter left {remaining} candidates instead of one")]
    NoUniqueRating {
        criteria: BitCriteria,
        remaining: usize,
    },

    #[error("sliding window must hold at least one reading")]
    InvalidWindow,

    #[error("submarine {quantity} overflowed")]
    CourseOverflow { quantity: &'static str },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
