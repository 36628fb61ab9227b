//! Simulated matrix wiring for tests

extern crate std;

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::pins::{GpioPins, Polarity};
use crate::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    RowLow(usize),
    RowHigh(usize),
    Delay(u32),
    ColRead(usize),
}

struct Board {
    polarity: Polarity,
    /// `true` is high
    row_levels: Vec<bool>,
    switches: Vec<Row>,
    events: Vec<Event>,
}

/// A switch matrix shared between the fake pins and the test
#[derive(Clone)]
pub struct Wiring(Rc<RefCell<Board>>);

impl Wiring {
    pub fn new(rows: usize, cols: usize, polarity: Polarity) -> Self {
        assert!(cols <= Row::BITS as usize);
        let idle = polarity == Polarity::ActiveLow;
        Wiring(Rc::new(RefCell::new(Board {
            polarity,
            row_levels: vec![idle; rows],
            switches: vec![0; rows],
            events: Vec::new(),
        })))
    }

    pub fn gpio<const ROWS: usize, const COLS: usize>(
        &self,
    ) -> GpioPins<MockRow, MockCol, ROWS, COLS> {
        let rows = (0..ROWS)
            .map(|index| MockRow {
                board: self.clone(),
                index,
            })
            .collect();
        let cols = (0..COLS)
            .map(|index| MockCol {
                board: self.clone(),
                index,
            })
            .collect();
        GpioPins::new(rows, cols, self.0.borrow().polarity)
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            board: self.clone(),
        }
    }

    pub fn press(&self, row: usize, col: usize) {
        self.0.borrow_mut().switches[row] |= 1 << col;
    }

    pub fn release(&self, row: usize, col: usize) {
        self.0.borrow_mut().switches[row] &= !(1 << col);
    }

    /// Close exactly the switches set in `bits` on `row`
    pub fn set_row(&self, row: usize, bits: Row) {
        self.0.borrow_mut().switches[row] = bits;
    }

    pub fn row_levels(&self) -> Vec<bool> {
        self.0.borrow().row_levels.clone()
    }

    pub fn take_events(&self) -> Vec<Event> {
        core::mem::take(&mut self.0.borrow_mut().events)
    }
}

pub struct MockRow {
    board: Wiring,
    index: usize,
}

impl OutputPin for MockRow {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut board = self.board.0.borrow_mut();
        board.row_levels[self.index] = false;
        board.events.push(Event::RowLow(self.index));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut board = self.board.0.borrow_mut();
        board.row_levels[self.index] = true;
        board.events.push(Event::RowHigh(self.index));
        Ok(())
    }
}

pub struct MockCol {
    board: Wiring,
    index: usize,
}

impl InputPin for MockCol {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let mut board = self.board.0.borrow_mut();
        board.events.push(Event::ColRead(self.index));
        let active = board.polarity == Polarity::ActiveHigh;
        let closed = board
            .row_levels
            .iter()
            .zip(&board.switches)
            .any(|(&level, &switches)| level == active && switches & (1 << self.index) != 0);
        Ok(if closed { active } else { !active })
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub struct MockDelay {
    board: Wiring,
}

impl DelayUs<u32> for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.board.0.borrow_mut().events.push(Event::Delay(us));
    }
}
