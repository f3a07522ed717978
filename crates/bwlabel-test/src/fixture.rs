//! Grid fixtures for tests

use crate::error::{TestError, TestResult};
use bwlabel_core::BinaryGrid;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Parse a grid drawn as text
///
/// Each non-blank line is one row. `#`, `1` and `x` are foreground, `.`
/// and `0` are background; spaces inside a line are ignored.
///
/// ```
/// let grid = bwlabel_test::parse_grid(
///     "
///     .#.
///     x#x
///     .#.
///     ",
/// )
/// .unwrap();
/// assert_eq!(grid.foreground_count(), 5);
/// ```
pub fn parse_grid(text: &str) -> TestResult<BinaryGrid> {
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '#' | '1' | 'x' | 'X' => Ok(true),
                '.' | '0' => Ok(false),
                other => Err(TestError::InvalidFixture {
                    line: i + 1,
                    message: format!("unexpected character {:?}", other),
                }),
            })
            .collect::<TestResult<Vec<bool>>>()?;
        rows.push(row);
    }

    Ok(BinaryGrid::from_rows(&rows)?)
}

/// Generate a reproducible random grid
///
/// Each cell is foreground with probability `density`.
pub fn random_grid(rows: u32, cols: u32, density: f64, seed: u64) -> TestResult<BinaryGrid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(TestError::InvalidDensity(density));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let cells = (0..rows as usize * cols as usize)
        .map(|_| rng.random::<f64>() < density)
        .collect();
    Ok(BinaryGrid::from_vec(rows, cols, cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid("#.\n.1\n").unwrap();
        assert_eq!(grid.as_slice(), &[true, false, false, true]);
    }

    #[test]
    fn test_parse_grid_mixed_glyphs() {
        let grid = parse_grid(
            "
            .#.
            x#x
            .1.
            ",
        )
        .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.foreground_count(), 5);
        assert!(grid.is_foreground(1, 0));
    }

    #[test]
    fn test_parse_grid_rejects_unknown_characters() {
        assert!(matches!(
            parse_grid("#.\n#?"),
            Err(TestError::InvalidFixture { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_grid_rejects_ragged_rows() {
        assert!(matches!(parse_grid("##\n#"), Err(TestError::Grid(_))));
    }

    #[test]
    fn test_random_grid_is_reproducible() {
        let a = random_grid(16, 16, 0.5, 7).unwrap();
        let b = random_grid(16, 16, 0.5, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(random_grid(4, 4, 0.0, 1).unwrap().foreground_count(), 0);
        assert_eq!(random_grid(4, 4, 1.0, 1).unwrap().foreground_count(), 16);
        assert!(random_grid(4, 4, 1.5, 1).is_err());
    }
}
