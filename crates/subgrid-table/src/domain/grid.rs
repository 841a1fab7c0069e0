//! Source sequence and submatrix filter
//!
//! This module owns the flattened 4x4 source sequence and implements the
//! submatrix operation: scan the sequence in index order and keep every
//! element lying outside the requested row band and column class.

use crate::constants::{FLAT_LEN, GRID_DIM, SUBMATRIX_LEN};
use crate::domain::mask;
use thiserror::Error;

/// Errors for submatrix extraction over the index grid
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row index outside `0..GRID_DIM`
    #[error("row index {row} out of range (must be 0-3)")]
    RowOutOfRange { row: usize },
    /// Column index outside `0..GRID_DIM`
    #[error("column index {col} out of range (must be 0-3)")]
    ColumnOutOfRange { col: usize },
}

/// The flattened 4x4 source sequence
///
/// Holds `values[i] = i` for the 16 flat indices, row-major: flat index `i`
/// has row `i / 4` and column `i % 4`. Created once, never mutated; submatrix
/// extraction copies the retained elements into a fresh vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexGrid {
    values: [u32; FLAT_LEN],
}

impl IndexGrid {
    /// Create the source sequence 0..16 in flat order
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|i| i as u32),
        }
    }

    /// Read-only view of the source sequence
    pub fn values(&self) -> &[u32; FLAT_LEN] {
        &self.values
    }

    /// Extract the submatrix entry for `(row, col)`
    ///
    /// Scans flat indices 0..16 in order and keeps each element whose index
    /// lies outside row band `row` and outside column class `col`. Elements
    /// are appended in ascending index order, so the result is always
    /// `SUBMATRIX_LEN` values and strictly increasing for this source
    /// sequence. Pure and deterministic; the filter never inspects element
    /// values, only positions.
    ///
    /// Indices outside `0..4` are rejected, row checked before column.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Vec<u32>, GridError> {
        if row >= GRID_DIM {
            return Err(GridError::RowOutOfRange { row });
        }
        if col >= GRID_DIM {
            return Err(GridError::ColumnOutOfRange { col });
        }

        let mut result = Vec::with_capacity(SUBMATRIX_LEN);
        for (i, &value) in self.values.iter().enumerate() {
            if mask::retained(i, row, col, GRID_DIM) {
                result.push(value);
            }
        }

        Ok(result)
    }
}

impl Default for IndexGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_sequence_is_identity() {
        let grid = IndexGrid::new();
        for (i, &value) in grid.values().iter().enumerate() {
            assert_eq!(value, i as u32);
        }
    }

    #[test]
    fn test_submatrix_first_pair() {
        // (0, 0) removes row band {0,1,2,3} and column class {0,4,8,12};
        // index 0 is in both, so 7 unique indices are dropped.
        let grid = IndexGrid::new();
        let entry = grid.submatrix(0, 0).unwrap();
        assert_eq!(entry, vec![5, 6, 7, 9, 10, 11, 13, 14, 15]);
    }

    #[test]
    fn test_submatrix_last_pair() {
        let grid = IndexGrid::new();
        let entry = grid.submatrix(3, 3).unwrap();
        assert_eq!(entry, vec![0, 1, 2, 4, 5, 6, 8, 9, 10]);
    }

    #[test]
    fn test_submatrix_interior_pairs() {
        let grid = IndexGrid::new();
        assert_eq!(
            grid.submatrix(1, 2).unwrap(),
            vec![0, 1, 3, 8, 9, 11, 12, 13, 15]
        );
        assert_eq!(
            grid.submatrix(2, 0).unwrap(),
            vec![1, 2, 3, 5, 6, 7, 13, 14, 15]
        );
    }

    #[test]
    fn test_submatrix_length_for_all_pairs() {
        let grid = IndexGrid::new();
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                let entry = grid.submatrix(row, col).unwrap();
                assert_eq!(entry.len(), SUBMATRIX_LEN, "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_submatrix_strictly_increasing() {
        let grid = IndexGrid::new();
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                let entry = grid.submatrix(row, col).unwrap();
                assert!(
                    entry.windows(2).all(|w| w[0] < w[1]),
                    "({}, {}) not ascending: {:?}",
                    row,
                    col,
                    entry
                );
            }
        }
    }

    #[test]
    fn test_submatrix_deterministic() {
        let grid = IndexGrid::new();
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                assert_eq!(grid.submatrix(row, col), grid.submatrix(row, col));
            }
        }
    }

    #[test]
    fn test_submatrix_row_out_of_range() {
        let grid = IndexGrid::new();
        assert_eq!(
            grid.submatrix(4, 0),
            Err(GridError::RowOutOfRange { row: 4 })
        );
    }

    #[test]
    fn test_submatrix_column_out_of_range() {
        let grid = IndexGrid::new();
        assert_eq!(
            grid.submatrix(0, 4),
            Err(GridError::ColumnOutOfRange { col: 4 })
        );
    }

    #[test]
    fn test_submatrix_row_checked_before_column() {
        let grid = IndexGrid::new();
        assert_eq!(
            grid.submatrix(9, 9),
            Err(GridError::RowOutOfRange { row: 9 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GridError::RowOutOfRange { row: 5 }.to_string(),
            "row index 5 out of range (must be 0-3)"
        );
        assert_eq!(
            GridError::ColumnOutOfRange { col: 7 }.to_string(),
            "column index 7 out of range (must be 0-3)"
        );
    }
}
