//! Grid geometry constants
//!
//! Note: the float comparison tolerance for numeric matrices is defined in
//! domain/matrix.rs due to its independence.

// =============================================================================
// Grid geometry
// =============================================================================

/// Side length of the logical grid
pub const GRID_DIM: usize = 4;

/// Number of elements in the flattened source sequence
pub const FLAT_LEN: usize = GRID_DIM * GRID_DIM; // 16

/// Side length of a submatrix (one row band and one column class removed)
pub const SUBMATRIX_DIM: usize = GRID_DIM - 1;

/// Number of elements retained by a single submatrix extraction
///
/// The removed row band and column class (4 indices each) share exactly one
/// index, so 16 - 4 - 4 + 1 = 9 elements remain.
pub const SUBMATRIX_LEN: usize = SUBMATRIX_DIM * SUBMATRIX_DIM; // 9

// =============================================================================
// Table enumeration
// =============================================================================

/// Number of entries in the full table, one per (row, col) pair
pub const TABLE_LEN: usize = GRID_DIM * GRID_DIM; // 16
