//! Row and column lines of a keyboard matrix

use embedded_hal::digital::v2::{InputPin, OutputPin};
use heapless::Vec;

use crate::Row;

/// What the scanner needs from the hardware.
///
/// Rows are driven one at a time and the columns sampled while a row is active.
pub trait MatrixPins {
    type Error;

    /// Time for the column lines to settle after a row is selected
    const SETTLE_US: u32 = 1;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Make `row` the only active row
    fn select_row(&mut self, row: usize) -> Result<(), Self::Error>;

    /// Stop driving every row
    fn unselect_rows(&mut self) -> Result<(), Self::Error>;

    /// Closed switches on the active row, bit `i` for column `i`
    fn read_cols(&mut self) -> Result<Row, Self::Error>;
}

/// Electrical convention of the matrix, which depends on the diode direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Rows selected by pulling low, columns pulled up and read low when closed
    #[default]
    ActiveLow,
    /// Rows selected by driving high, columns pulled down and read high when closed
    ActiveHigh,
}

impl Polarity {
    /// Line level, `true` being high, of a selected row and of a closed switch's column
    fn active(self) -> bool {
        match self {
            Polarity::ActiveLow => false,
            Polarity::ActiveHigh => true,
        }
    }
}

/// [`MatrixPins`] over `embedded-hal` GPIOs.
///
/// Position in `rows` is the row index, position in `cols` the column bit. Use
/// open-drain outputs for the rows to leave unselected rows floating, push-pull
/// outputs hold them at the idle level instead.
pub struct GpioPins<R, C, const ROWS: usize, const COLS: usize> {
    rows: Vec<R, ROWS>,
    cols: Vec<C, COLS>,
    polarity: Polarity,
}

impl<R, C, const ROWS: usize, const COLS: usize> GpioPins<R, C, ROWS, COLS> {
    const COLS_FIT: () = assert!(
        COLS <= Row::BITS as usize,
        "more columns than bits in a Row"
    );

    pub fn new(rows: Vec<R, ROWS>, cols: Vec<C, COLS>, polarity: Polarity) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::COLS_FIT;
        GpioPins {
            rows,
            cols,
            polarity,
        }
    }
}

impl<R, C, const ROWS: usize, const COLS: usize> MatrixPins for GpioPins<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin<Error = R::Error>,
{
    type Error = R::Error;

    fn rows(&self) -> usize {
        self.rows.len()
    }

    fn cols(&self) -> usize {
        self.cols.len()
    }

    fn select_row(&mut self, row: usize) -> Result<(), Self::Error> {
        debug_assert!(row < self.rows.len(), "row {} out of range", row);
        self.unselect_rows()?;
        self.rows[row].set_state(self.polarity.active().into())
    }

    fn unselect_rows(&mut self) -> Result<(), Self::Error> {
        let idle = !self.polarity.active();
        for row in self.rows.iter_mut() {
            row.set_state(idle.into())?;
        }
        Ok(())
    }

    fn read_cols(&mut self) -> Result<Row, Self::Error> {
        let closed = self.polarity.active();
        let mut bits = 0;
        for (i, col) in self.cols.iter().enumerate() {
            if col.is_high()? == closed {
                bits |= 1 << i;
            }
        }
        Ok(bits)
    }
}
