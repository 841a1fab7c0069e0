//! Full-table enumeration
//!
//! This module implements the driving loop: visit every (row, col) pair of
//! the 4x4 index space in row-outer, col-inner order and collect one
//! submatrix entry per pair.

use crate::constants::{GRID_DIM, TABLE_LEN};
use crate::domain::grid::{GridError, IndexGrid};
use std::fmt;

/// The ordered collection of all 16 submatrix entries
///
/// Entry order matches the enumeration order: entry `row * 4 + col` holds
/// the submatrix for `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmatrixTable {
    entries: Vec<Vec<u32>>,
}

impl SubmatrixTable {
    /// Enumerate every (row, col) pair over the given source grid
    pub fn enumerate(grid: &IndexGrid) -> Result<Self, GridError> {
        let mut entries = Vec::with_capacity(TABLE_LEN);
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                entries.push(grid.submatrix(row, col)?);
            }
        }

        Ok(Self { entries })
    }

    /// All entries in enumeration order
    pub fn entries(&self) -> &[Vec<u32>] {
        &self.entries
    }

    /// The entry for one (row, col) pair, or None when out of range
    pub fn entry(&self, row: usize, col: usize) -> Option<&[u32]> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return None;
        }
        self.entries.get(row * GRID_DIM + col).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Nested-sequence literal: entries comma-space separated inside one outer
/// bracket pair, e.g. `[[5, 6, 7, ...], ..., [0, 1, 2, ...]]`.
impl fmt::Display for SubmatrixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (n, entry) in self.entries.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (m, value) in entry.iter().enumerate() {
                if m > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
