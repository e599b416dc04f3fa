use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Summary of the values in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    /// Cells equal to `max`. With an iteration cap these are the points that never converged.
    pub saturated: usize,
    pub cells: usize,
}

impl GridStats {
    /// Returns `None` for an empty grid.
    pub fn from_grid(grid: &Array2<i32>) -> Option<Self> {
        let mut iter = grid.iter().copied();
        let first = iter.next()?;
        let (mut min, mut max, mut sum) = (first, first, first as i64);
        for v in iter {
            min = min.min(v);
            max = max.max(v);
            sum += v as i64;
        }
        let cells = grid.len();
        let saturated = grid.iter().filter(|&&v| v == max).count();

        Some(Self {
            min,
            max,
            mean: sum as f64 / cells as f64,
            saturated,
            cells,
        })
    }

    pub fn range(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    pub fn saturated_fraction(&self) -> f64 {
        if self.cells == 0 {
            0.0
        } else {
            self.saturated as f64 / self.cells as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_stats_of_small_grid() {
        let stats = GridStats::from_grid(&array![[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(stats.min, 1);
        assert_eq!(stats.max, 6);
        assert!((stats.mean - 3.5).abs() < 1e-12);
        assert_eq!(stats.saturated, 1);
        assert_eq!(stats.cells, 6);
        assert_eq!(stats.range(), 5);
    }

    #[test]
    fn test_saturated_cells_counted() {
        let stats = GridStats::from_grid(&array![[1000, 3], [1000, 1000]]).unwrap();
        assert_eq!(stats.saturated, 3);
        assert!((stats.saturated_fraction() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_empty_grid_has_no_stats() {
        let empty: Array2<i32> = Array2::zeros((0, 0));
        assert!(GridStats::from_grid(&empty).is_none());
    }
}
