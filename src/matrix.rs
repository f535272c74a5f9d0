//! # Block Matrix
//!
//! The boolean grid describing which blocks of an identicon are painted with
//! the foreground color. Grids are mirrored about the center column, so only
//! the left half (center column included) is driven by digest bits.
//!
//! ## Bit Addressing
//!
//! Bits are read big-endian, most significant bit first:
//!
//! ```text
//! bytes:  [1 0 0 1 0 0 0 1] [1 0 0 0 1 0 0 0] ...
//! bit n:   0 1 2 3 4 5 6 7   8 9 ...
//! ```
//!
//! ## Cell Placement
//!
//! Bit `n` lands in `row = n % rows`, `column = n / columns`. The column
//! divisor is the full column count, not the half width. Existing identicons
//! depend on this mapping, so it must not be "corrected".

use log::debug;

/// Grid of `rows × columns` blocks, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl BlockMatrix {
    /// Create an empty (all background) matrix.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Build a matrix from explicit rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let columns = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::new(rows.len(), columns);
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().take(columns).enumerate() {
                matrix.set(r, c, cell);
            }
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the block at (`row`, `column`) is foreground. Out of range is `false`.
    pub fn get(&self, row: usize, column: usize) -> bool {
        if row >= self.rows || column >= self.columns {
            return false;
        }
        self.cells[row * self.columns + column]
    }

    fn set(&mut self, row: usize, column: usize, value: bool) {
        self.cells[row * self.columns + column] = value;
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on zero
        self.cells.chunks(self.columns.max(1)).take(self.rows)
    }

    /// Iterate over foreground blocks as `(row, column)`.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.columns).map(move |c| (r, c)))
            .filter(|&(r, c)| self.get(r, c))
    }

    /// Check mirror symmetry about the center column.
    pub fn is_symmetric(&self) -> bool {
        (0..self.rows).all(|r| (0..self.columns).all(|c| self.get(r, c) == self.get(r, self.columns - 1 - c)))
    }
}

/// Whether bit `n` of `bytes` is set (MSB-first). Bits past the end read as 0.
pub fn get_bit(n: usize, bytes: &[u8]) -> bool {
    match bytes.get(n / 8) {
        Some(byte) => (byte >> (7 - (n % 8))) & 1 == 1,
        None => false,
    }
}

/// Build the symmetric block matrix for `bytes` (digest bytes after the color byte).
pub fn build(bytes: &[u8], rows: usize, columns: usize) -> BlockMatrix {
    let mut matrix = BlockMatrix::new(rows, columns);
    if rows == 0 || columns == 0 {
        return matrix;
    }

    let half_columns = columns.div_ceil(2);
    let cells = rows * half_columns;

    for cell in 0..cells {
        if !get_bit(cell, bytes) {
            continue;
        }

        let column = cell / columns;
        let row = cell % rows;

        // Only reachable when rows exceed columns enough to run past the grid.
        if column >= columns {
            debug!("bit {} maps outside a {}x{} grid, skipped", cell, rows, columns);
            continue;
        }

        // Center column may be written twice.
        matrix.set(row, column, true);
        matrix.set(row, columns - 1 - column, true);
    }

    matrix
}
