//! Snapshot of the whole matrix, one [`Row`] bitmask per row

use crate::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixState<const ROWS: usize> {
    rows: [Row; ROWS],
}

impl<const ROWS: usize> MatrixState<ROWS> {
    /// No keys pressed
    pub const fn new() -> Self {
        MatrixState { rows: [0; ROWS] }
    }

    pub const fn from_rows(rows: [Row; ROWS]) -> Self {
        MatrixState { rows }
    }

    /// Bitmask of closed switches in `row`.
    ///
    /// `row` must be below `ROWS`.
    pub fn get_row(&self, row: usize) -> Row {
        debug_assert!(row < ROWS, "row {} out of range", row);
        self.rows[row]
    }

    pub(crate) fn set_row(&mut self, row: usize, value: Row) {
        self.rows[row] = value;
    }

    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        debug_assert!(col < Row::BITS as usize, "column {} out of range", col);
        self.get_row(row) & (1 << col) != 0
    }

    /// Number of closed switches
    pub fn key_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// `(row, col)` of every closed switch, row-major
    pub fn pressed(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, &bits)| {
            (0..Row::BITS as usize)
                .filter(move |&c| bits & (1 << c) != 0)
                .map(move |c| (r, c))
        })
    }

    pub fn clear(&mut self) {
        self.rows = [0; ROWS];
    }
}

impl<const ROWS: usize> Default for MatrixState<ROWS> {
    fn default() -> Self {
        Self::new()
    }
}
