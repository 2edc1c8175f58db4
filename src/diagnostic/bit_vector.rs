use std::fmt;

use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::{field, read_records};

// Widest reading whose value still fits in a u64
pub const MAX_WIDTH: usize = u64::BITS as usize;

// One diagnostic reading, most significant bit first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    // Parse a string of '0' and '1' characters
    pub fn parse(text: &str, line: u64) -> Result<Self> {
        let bits = text
            .chars()
            .map(|character| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                character => Err(PuzzleError::InvalidBit { line, character }),
            })
            .collect::<Result<Vec<bool>>>()?;
        BitVector::try_from(bits).map_err(|err| match err {
            PuzzleError::TooManyBits { width } => PuzzleError::ReadingTooWide { line, width },
            err => err,
        })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn bit(&self, position: usize) -> bool {
        self.bits[position]
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    // Interpret the bits as an unsigned integer
    pub fn value(&self) -> u64 {
        self.bits
            .iter()
            .fold(0, |value, &bit| (value << 1) | bit as u64)
    }
}

impl TryFrom<Vec<bool>> for BitVector {
    type Error = PuzzleError;

    fn try_from(bits: Vec<bool>) -> Result<Self> {
        if bits.len() > MAX_WIDTH {
            return Err(PuzzleError::TooManyBits { width: bits.len() });
        }
        Ok(BitVector { bits })
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// Load a diagnostic report, one reading per line.
// Lengths are not checked here, see `report_width`.
pub fn parse_report(text: &str) -> Result<Vec<BitVector>> {
    let readings = read_records(text, b',', 1)?
        .iter()
        .map(|(line, record)| BitVector::parse(field(record, 0, *line)?, *line))
        .collect::<Result<Vec<_>>>()?;
    debug!(readings = readings.len(), "parsed diagnostic report");
    Ok(readings)
}

// The common length of every reading in a non-empty report
pub fn report_width(readings: &[BitVector]) -> Result<usize> {
    let expected = readings.first().ok_or(PuzzleError::EmptyReport)?.len();
    match readings
        .iter()
        .enumerate()
        .find(|(_, reading)| reading.len() != expected)
    {
        Some((index, reading)) => Err(PuzzleError::RaggedReport {
            index,
            expected,
            found: reading.len(),
        }),
        None => Ok(expected),
    }
}
