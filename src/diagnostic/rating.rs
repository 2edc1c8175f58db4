use std::fmt;
use std::ops::ControlFlow;

use tracing::trace;

use super::{count_ones_at, report_width, BitVector};
use crate::error::{PuzzleError, Result};

// Which bit value survives each round of filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitCriteria {
    MostCommon,
    LeastCommon,
}

impl BitCriteria {
    // The bit value to keep given the counts at one position.
    // A tie keeps 1 for MostCommon and 0 for LeastCommon.
    #[inline]
    pub fn target(self, ones: usize, zeros: usize) -> bool {
        let most_common = ones >= zeros;
        match self {
            BitCriteria::MostCommon => most_common,
            BitCriteria::LeastCommon => !most_common,
        }
    }
}

impl From<bool> for BitCriteria {
    fn from(prefer_majority: bool) -> Self {
        if prefer_majority {
            BitCriteria::MostCommon
        } else {
            BitCriteria::LeastCommon
        }
    }
}

// Narrow the report down to a single reading, one bit position at a time,
// keeping only the readings that match `criteria` at that position.
//
// Stops as soon as one candidate is left. If every position has been used
// and several remain (or none do), there is no rating to report.
pub fn select(readings: &[BitVector], criteria: BitCriteria) -> Result<BitVector> {
    let width = report_width(readings)?;

    let survivors = (0..width).try_fold(
        readings.iter().collect::<Vec<_>>(),
        |candidates, position| {
            if candidates.len() <= 1 {
                ControlFlow::Break(candidates)
            } else {
                ControlFlow::Continue(filter_position(candidates, position, criteria))
            }
        },
    );
    let survivors = match survivors {
        ControlFlow::Break(survivors) | ControlFlow::Continue(survivors) => survivors,
    };

    match survivors.as_slice() {
        [rating] => Ok((*rating).clone()),
        _ => Err(PuzzleError::NoUniqueRating {
            criteria,
            remaining: survivors.len(),
        }),
    }
}

fn filter_position<'a>(
    candidates: Vec<&'a BitVector>,
    position: usize,
    criteria: BitCriteria,
) -> Vec<&'a BitVector> {
    let ones = count_ones_at(candidates.iter().copied(), position);
    let target = criteria.target(ones, candidates.len() - ones);
    let survivors: Vec<_> = candidates
        .into_iter()
        .filter(|candidate| candidate.bit(position) == target)
        .collect();
    trace!(position, target, remaining = survivors.len(), "filtered candidates");
    survivors
}

pub fn oxygen_generator_rating(readings: &[BitVector]) -> Result<u64> {
    select(readings, BitCriteria::MostCommon).map(|rating| rating.value())
}

pub fn co2_scrubber_rating(readings: &[BitVector]) -> Result<u64> {
    select(readings, BitCriteria::LeastCommon).map(|rating| rating.value())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeSupport {
    pub oxygen_generator: u64,
    pub co2_scrubber: u64,
}

impl LifeSupport {
    // Two 64-bit ratings always fit in a u128
    pub fn product(&self) -> u128 {
        self.oxygen_generator as u128 * self.co2_scrubber as u128
    }
}

pub fn life_support(readings: &[BitVector]) -> Result<LifeSupport> {
    Ok(LifeSupport {
        oxygen_generator: oxygen_generator_rating(readings)?,
        co2_scrubber: co2_scrubber_rating(readings)?,
    })
}

impl fmt::Display for LifeSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Oxygen generator rating: {}", self.oxygen_generator)?;
        writeln!(f, "CO2 Scrubber Rating: {}", self.co2_scrubber)?;
        write!(f, "Multiplied: {}", self.product())
    }
}
