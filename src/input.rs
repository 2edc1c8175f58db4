use std::fs;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use crate::error::{PuzzleError, Result};

pub const DEFAULT_INPUT: &str = "input.txt";

// Read a whole puzzle input into memory
pub fn load_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// Split puzzle text into records, one per line, paired with the line number.
// The expected format is:
// - No headers
// - Blank lines are skipped
// - Fields are separated by `delimiter`, surrounding whitespace is trimmed
// - Every record has exactly `fields` fields
pub fn read_records(
    text: &str,
    delimiter: u8,
    fields: usize,
) -> Result<Vec<(u64, StringRecord)>> {
    // Use the CSV crate
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|result| {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());
            if record.len() != fields {
                return Err(PuzzleError::FieldCount {
                    line,
                    expected: fields,
                    found: record.len(),
                });
            }
            Ok((line, record))
        })
        .collect()
}

pub fn field(record: &StringRecord, index: usize, line: u64) -> Result<&str> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or(PuzzleError::MissingField { line })
}

pub fn parse_number<T>(value: &str, line: u64) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| PuzzleError::InvalidNumber {
        line,
        value: value.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records_skips_blank_lines() {
        let records = read_records("1\n\n2\n", b',', 1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 1);
        assert_eq!(&records[1].1[0], "2");
    }

    #[test]
    fn test_read_records_splits_on_delimiter() {
        let records = read_records("forward 5\r\nup 3", b' ', 2).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0].1[0], "forward");
        assert_eq!(&records[0].1[1], "5");
        assert_eq!(&records[1].1[1], "3");
    }

    #[test]
    fn test_field_reports_missing_value() {
        let records = read_records("5,", b',', 2).unwrap();
        let (line, record) = &records[0];
        assert!(matches!(
            field(record, 1, *line),
            Err(PuzzleError::MissingField { line: 1 })
        ));
    }

    #[test]
    fn test_read_records_rejects_extra_fields() {
        assert!(matches!(
            read_records("1\n2,999\n", b',', 1),
            Err(PuzzleError::FieldCount {
                line: 2,
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_records_rejects_missing_fields() {
        assert!(matches!(
            read_records("forward 5\ndown\n", b' ', 2),
            Err(PuzzleError::FieldCount {
                line: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u64>("42", 1).unwrap(), 42);
        assert!(matches!(
            parse_number::<u64>("4x", 7),
            Err(PuzzleError::InvalidNumber { line: 7, .. })
        ));
    }

    #[test]
    fn test_load_input_missing_file() {
        let err = load_input("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
    }
}
