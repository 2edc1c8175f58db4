use rayon::prelude::*;

use super::BitVector;

// Number of readings with a 1 at `position`
#[inline]
pub fn count_ones_at<'a>(readings: impl IntoIterator<Item = &'a BitVector>, position: usize) -> usize {
    readings
        .into_iter()
        .filter(|reading| reading.bit(position))
        .count()
}

// Number of readings with a 1 at every position, counted in parallel.
// All readings must be `width` bits wide.
pub fn count_ones(readings: &[BitVector], width: usize) -> Vec<usize> {
    readings
        .par_iter()
        // Each rayon job keeps its own tally...
        .fold(
            || vec![0_usize; width],
            |mut counts, reading| {
                for (count, &bit) in counts.iter_mut().zip(reading.bits()) {
                    *count += bit as usize;
                }
                counts
            },
        )
        // ...and the tallies are summed position by position
        .reduce(
            || vec![0_usize; width],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::parse_report;

    #[test]
    fn test_count_ones() {
        let readings = parse_report("110\n100\n111\n000\n").unwrap();
        assert_eq!(count_ones(&readings, 3), vec![3, 2, 1]);
    }

    #[test]
    fn test_count_ones_at_subset() {
        let readings = parse_report("110\n100\n111\n000\n").unwrap();
        assert_eq!(count_ones_at(&readings, 1), 2);
        assert_eq!(count_ones_at(readings.iter().skip(2), 1), 1);
    }

    #[test]
    fn test_count_ones_empty_report() {
        assert_eq!(count_ones(&[], 4), vec![0; 4]);
    }
}
