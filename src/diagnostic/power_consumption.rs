use std::fmt;

use super::{count_ones, report_width, BitVector};
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerConsumption {
    pub gamma: u64,
    pub epsilon: u64,
}

impl PowerConsumption {
    pub fn product(&self) -> u128 {
        self.gamma as u128 * self.epsilon as u128
    }
}

// Gamma takes the most common bit of every position, epsilon the rest.
// A tied position goes to epsilon.
pub fn power_consumption(readings: &[BitVector]) -> Result<PowerConsumption> {
    let width = report_width(readings)?;
    let total = readings.len();
    let (gamma, epsilon) = count_ones(readings, width).into_iter().fold(
        (0_u64, 0_u64),
        |(gamma, epsilon), ones| {
            if ones > total - ones {
                ((gamma << 1) | 1, epsilon << 1)
            } else {
                (gamma << 1, (epsilon << 1) | 1)
            }
        },
    );
    Ok(PowerConsumption { gamma, epsilon })
}

impl fmt::Display for PowerConsumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gamma: {}", self.gamma)?;
        writeln!(f, "Epsilon: {}", self.epsilon)?;
        write!(f, "Multiplied: {}", self.product())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::parse_report;
    use crate::error::PuzzleError;

    const EXAMPLE: &str =
        "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

    #[test]
    fn test_example() {
        let power = power_consumption(&parse_report(EXAMPLE).unwrap()).unwrap();
        assert_eq!(
            power,
            PowerConsumption {
                gamma: 22,
                epsilon: 9
            }
        );
        assert_eq!(power.product(), 198);
    }

    #[test]
    fn test_full_width_report() {
        let high = "10".repeat(32);
        let low = "01".repeat(32);
        let text = format!("{high}\n{high}\n{low}\n");
        let power = power_consumption(&parse_report(&text).unwrap()).unwrap();
        assert_eq!(power.gamma, 0xAAAA_AAAA_AAAA_AAAA);
        assert_eq!(power.epsilon, 0x5555_5555_5555_5555);
        assert_eq!(
            power.product(),
            0xAAAA_AAAA_AAAA_AAAA_u128 * 0x5555_5555_5555_5555_u128
        );
    }

    #[test]
    fn test_tie_goes_to_epsilon() {
        let power = power_consumption(&parse_report("10\n01\n").unwrap()).unwrap();
        assert_eq!(power.gamma, 0);
        assert_eq!(power.epsilon, 3);
    }

    #[test]
    fn test_empty_report() {
        assert!(matches!(
            power_consumption(&[]),
            Err(PuzzleError::EmptyReport)
        ));
    }

    #[test]
    fn test_display() {
        let power = PowerConsumption {
            gamma: 22,
            epsilon: 9,
        };
        assert_eq!(power.to_string(), "Gamma: 22\nEpsilon: 9\nMultiplied: 198");
    }
}
