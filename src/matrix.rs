//! Scans a keyboard matrix and keeps its debounced state

use embedded_hal::blocking::delay::DelayUs;

use crate::debounce::{Debouncer, DEBOUNCE};
use crate::logging::debug;
use crate::pins::MatrixPins;
use crate::state::MatrixState;
use crate::{Duration, Instant, Row};

/// Outcome of one [`Matrix::scan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanStatus {
    /// The debounced state is as it was before the scan
    Unchanged,
    /// A new debounced state was committed
    Changed,
}

pub struct Matrix<P, D, const ROWS: usize, const WINDOW: Duration = DEBOUNCE> {
    pins: P,
    delay: D,
    raw: MatrixState<ROWS>,
    debouncer: Debouncer<ROWS, WINDOW>,
}

impl<P, D, const ROWS: usize, const WINDOW: Duration> Matrix<P, D, ROWS, WINDOW>
where
    P: MatrixPins,
    D: DelayUs<u32>,
{
    /// Takes the pins and initialises the matrix with no keys pressed
    pub fn new(pins: P, delay: D) -> Result<Self, P::Error> {
        debug_assert_eq!(pins.rows(), ROWS, "row pins do not match ROWS");
        let mut matrix = Matrix {
            pins,
            delay,
            raw: MatrixState::new(),
            debouncer: Debouncer::new(),
        };
        matrix.init()?;
        Ok(matrix)
    }

    /// Releases every row and forgets all key state
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.pins.unselect_rows()?;
        self.raw.clear();
        self.debouncer.reset();
        debug!(
            "matrix: {} rows, {} cols, debounce {}",
            ROWS,
            self.pins.cols(),
            WINDOW
        );
        Ok(())
    }

    /// Reads every row once and feeds the reading to the debouncer.
    ///
    /// `now` is the caller's clock, in the same ticks as `WINDOW`. Call this
    /// often compared to `WINDOW`, as state can only change during a scan.
    pub fn scan(&mut self, now: Instant) -> Result<ScanStatus, P::Error> {
        for row in 0..ROWS {
            self.pins.select_row(row)?;
            self.delay.delay_us(P::SETTLE_US);
            let cols = self.pins.read_cols()?;
            self.raw.set_row(row, cols);
            self.pins.unselect_rows()?;
        }

        Ok(if self.debouncer.debounce(&self.raw, now) {
            ScanStatus::Changed
        } else {
            ScanStatus::Unchanged
        })
    }

    /// Debounced bitmask of `row`
    pub fn get_row(&self, row: usize) -> Row {
        self.debouncer.state().get_row(row)
    }

    /// Debounced state of the whole matrix
    pub fn state(&self) -> &MatrixState<ROWS> {
        self.debouncer.state()
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.state().is_on(row, col)
    }

    pub fn key_count(&self) -> u32 {
        self.state().key_count()
    }

    /// Reading of the last scan, before debouncing
    pub fn raw(&self) -> &MatrixState<ROWS> {
        &self.raw
    }

    /// No change seen within the last `WINDOW` ticks
    pub fn is_settled(&self) -> bool {
        self.debouncer.is_settled()
    }

    pub fn release(self) -> (P, D) {
        (self.pins, self.delay)
    }
}
