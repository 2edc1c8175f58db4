// Day 1: counting how often the sea floor gets deeper

use std::fmt;

use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::{field, parse_number, read_records};

pub type Depth = u64;

pub fn parse_depths(text: &str) -> Result<Vec<Depth>> {
    let depths = read_records(text, b',', 1)?
        .iter()
        .map(|(line, record)| parse_number(field(record, 0, *line)?, *line))
        .collect::<Result<Vec<Depth>>>()?;
    debug!(readings = depths.len(), "parsed sonar sweep");
    Ok(depths)
}

// Count the windows whose sum is larger than the window one reading earlier.
// Two neighbouring windows share all but their outermost readings, so only
// those need comparing.
pub fn count_increases(depths: &[Depth], window: usize) -> Result<usize> {
    if window == 0 {
        return Err(PuzzleError::InvalidWindow);
    }
    Ok(depths
        .windows(window + 1)
        .filter(|span| span[window] > span[0])
        .count())
}

pub struct Increases {
    pub count: usize,
    pub window: usize,
}

impl Increases {
    pub fn measure(depths: &[Depth], window: usize) -> Result<Self> {
        Ok(Increases {
            count: count_increases(depths, window)?,
            window,
        })
    }
}

impl fmt::Display for Increases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are {} level increases with sliding window {}",
            self.count, self.window
        )
    }
}
