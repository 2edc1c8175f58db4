use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::diagnostic::{life_support, parse_report, power_consumption};
use crate::dive::{parse_commands, pilot, pilot_with_aim, Course};
use crate::error::Result;
use crate::sonar::{parse_depths, Increases};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Day {
    #[value(name = "1", alias = "sonar-sweep")]
    One,
    #[value(name = "2", alias = "dive")]
    Two,
    #[value(name = "3", alias = "binary-diagnostic")]
    Three,
}

impl Day {
    pub fn title(self) -> &'static str {
        match self {
            Day::One => "Sonar Sweep",
            Day::Two => "Dive!",
            Day::Three => "Binary Diagnostic",
        }
    }

    fn number(self) -> u8 {
        match self {
            Day::One => 1,
            Day::Two => 2,
            Day::Three => 3,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.number(), self.title())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "Part 1"),
            Part::Two => write!(f, "Part 2"),
        }
    }
}

// Parse the puzzle text for `day` and render the answer to `part`
pub fn solve(day: Day, part: Part, text: &str) -> Result<String> {
    let answer = match (day, part) {
        (Day::One, part) => {
            let depths = parse_depths(text)?;
            let window = match part {
                Part::One => 1,
                Part::Two => 3,
            };
            Increases::measure(&depths, window)?.to_string()
        }
        (Day::Two, part) => {
            let commands = parse_commands(text)?;
            let position = match part {
                Part::One => pilot(&commands)?,
                Part::Two => pilot_with_aim(&commands)?,
            };
            Course {
                position,
                with_aim: part == Part::Two,
            }
            .to_string()
        }
        (Day::Three, Part::One) => power_consumption(&parse_report(text)?)?.to_string(),
        (Day::Three, Part::Two) => life_support(&parse_report(text)?)?.to_string(),
    };
    debug!(?day, ?part, "solved");
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;

    #[test]
    fn test_day_one() {
        let text = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";
        assert_eq!(
            solve(Day::One, Part::Two, text).unwrap(),
            "There are 5 level increases with sliding window 3"
        );
    }

    #[test]
    fn test_day_two() {
        let text = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";
        assert_eq!(
            solve(Day::Two, Part::One, text).unwrap(),
            "x: 15 y: 10 - Multiplied: 150"
        );
    }

    #[test]
    fn test_day_three() {
        let text =
            "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";
        assert_eq!(
            solve(Day::Three, Part::Two, text).unwrap(),
            "Oxygen generator rating: 23\nCO2 Scrubber Rating: 10\nMultiplied: 230"
        );
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            solve(Day::Three, Part::Two, "101\n101\n"),
            Err(PuzzleError::NoUniqueRating { .. })
        ));
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::Three.to_string(), "Day 3: Binary Diagnostic");
    }
}
