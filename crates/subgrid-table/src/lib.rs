//! subgrid-table - Submatrix table enumeration over a flattened 4x4 index grid
//!
//! This crate provides functionality to:
//! - Filter the flattened source sequence by excluding one row band and one column class
//! - Enumerate the full 16-entry submatrix table in (row, col) order
//! - Render the table as a nested-sequence literal

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::table::SubmatrixTable;
pub use domain::grid::{GridError, IndexGrid};
pub use domain::matrix::{Matrix2, Matrix3, Matrix4, MatrixError};
