// Day 2: steering the submarine

use std::fmt;

use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::input::{field, parse_number, read_records};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Up(i64),
    Down(i64),
}

// One command per line, e.g. "forward 5"
pub fn parse_commands(text: &str) -> Result<Vec<Command>> {
    let commands = read_records(text, b' ', 2)?
        .iter()
        .map(|(line, record)| {
            let line = *line;
            let direction = field(record, 0, line)?;
            let amount = parse_number(field(record, 1, line)?, line)?;
            match direction {
                "forward" => Ok(Command::Forward(amount)),
                "up" => Ok(Command::Up(amount)),
                "down" => Ok(Command::Down(amount)),
                other => Err(PuzzleError::UnknownCommand {
                    line,
                    command: other.to_owned(),
                }),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(commands = commands.len(), "parsed course");
    Ok(commands)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
}

impl Position {
    // Two i64 coordinates always fit in an i128
    pub fn product(&self) -> i128 {
        self.horizontal as i128 * self.depth as i128
    }
}

fn overflowed(quantity: &'static str) -> PuzzleError {
    PuzzleError::CourseOverflow { quantity }
}

// Up and down move the submarine directly
pub fn pilot(commands: &[Command]) -> Result<Position> {
    commands
        .iter()
        .try_fold(Position::default(), |mut position, command| {
            match *command {
                Command::Forward(n) => {
                    position.horizontal = position
                        .horizontal
                        .checked_add(n)
                        .ok_or_else(|| overflowed("horizontal position"))?;
                }
                Command::Up(n) => {
                    position.depth = position
                        .depth
                        .checked_sub(n)
                        .ok_or_else(|| overflowed("depth"))?;
                }
                Command::Down(n) => {
                    position.depth = position
                        .depth
                        .checked_add(n)
                        .ok_or_else(|| overflowed("depth"))?;
                }
            }
            Ok::<_, PuzzleError>(position)
        })
}

// Up and down only turn the submarine, forward moves along the current aim
pub fn pilot_with_aim(commands: &[Command]) -> Result<Position> {
    let (position, _aim) = commands.iter().try_fold(
        (Position::default(), 0_i64),
        |(mut position, mut aim), command| {
            match *command {
                Command::Forward(n) => {
                    position.horizontal = position
                        .horizontal
                        .checked_add(n)
                        .ok_or_else(|| overflowed("horizontal position"))?;
                    position.depth = aim
                        .checked_mul(n)
                        .and_then(|dive| position.depth.checked_add(dive))
                        .ok_or_else(|| overflowed("depth"))?;
                }
                Command::Up(n) => {
                    aim = aim.checked_sub(n).ok_or_else(|| overflowed("aim"))?;
                }
                Command::Down(n) => {
                    aim = aim.checked_add(n).ok_or_else(|| overflowed("aim"))?;
                }
            }
            Ok::<_, PuzzleError>((position, aim))
        },
    )?;
    Ok(position)
}

pub struct Course {
    pub position: Position,
    pub with_aim: bool,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.with_aim {
            write!(f, "With aim: ")?;
        }
        write!(
            f,
            "x: {} y: {} - Multiplied: {}",
            self.position.horizontal,
            self.position.depth,
            self.position.product()
        )
    }
}
