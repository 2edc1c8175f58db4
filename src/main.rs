// Needed to write partial lines to the console
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use aoc_2021::input::{load_input, DEFAULT_INPUT};
use aoc_2021::{logging, solve, Day, Part};

#[derive(Parser)]
#[command(name = "aoc_2021", version, about = "Solvers for the first days of Advent of Code 2021")]
struct Cli {
    /// Which day's puzzle to solve.
    #[arg(short, long)]
    day: Day,

    /// Solve only this part. Both parts are solved when omitted.
    #[arg(short, long)]
    part: Option<Part>,

    /// Puzzle input, one reading or command per line.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

// Blank lines are skipped by every parser, so they are not counted either
fn count_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.is_empty()).count()
}

fn run(cli: Cli) -> Result<()> {
    // Load the puzzle input once, both parts share it
    print!("Loading input... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let text = load_input(&cli.input)?;
    println!(
        "Read {} non-blank lines from {} [{}ms]",
        count_lines(&text),
        cli.input.display(),
        now.elapsed().as_millis()
    );

    println!("=== {} ===", cli.day);
    let parts = match cli.part {
        Some(part) => vec![part],
        None => Part::ALL.to_vec(),
    };
    for part in parts {
        let now = Instant::now();
        let answer = solve(cli.day, part, &text)
            .with_context(|| format!("{} {} failed", cli.day, part))?;
        println!("--- {} ---", part);
        println!("{}", answer);
        println!("Done [{}ms]", now.elapsed().as_millis());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines_skips_blank_lines() {
        assert_eq!(count_lines("1\n\n2\r\n\r\n3\n"), 3);
        assert_eq!(count_lines(""), 0);
    }
}
