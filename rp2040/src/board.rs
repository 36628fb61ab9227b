use rp_pico as bsp;

use bsp::hal::gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullNone, PullUp};
use bsp::Pins;
use heapless::Vec;

use mekk_matrix::{GpioPins, Polarity};

pub const ROWS: usize = 6;
pub const COLS: usize = 18;

pub type RowPin = Pin<DynPinId, FunctionSioOutput, PullNone>;
pub type ColPin = Pin<DynPinId, FunctionSioInput, PullUp>;

pub type BoardPins = GpioPins<RowPin, ColPin, ROWS, COLS>;

/// Rows on GPIO 0-5, columns on GPIO 6-22 and 26
pub fn matrix_pins(pins: Pins) -> BoardPins {
    let mut rows = Vec::<RowPin, ROWS>::new();
    rows.extend([
        pins.gpio0.reconfigure().into_dyn_pin(),
        pins.gpio1.reconfigure().into_dyn_pin(),
        pins.gpio2.reconfigure().into_dyn_pin(),
        pins.gpio3.reconfigure().into_dyn_pin(),
        pins.gpio4.reconfigure().into_dyn_pin(),
        pins.gpio5.reconfigure().into_dyn_pin(),
    ]);

    let mut cols = Vec::<ColPin, COLS>::new();
    cols.extend([
        pins.gpio6.reconfigure().into_dyn_pin(),
        pins.gpio7.reconfigure().into_dyn_pin(),
        pins.gpio8.reconfigure().into_dyn_pin(),
        pins.gpio9.reconfigure().into_dyn_pin(),
        pins.gpio10.reconfigure().into_dyn_pin(),
        pins.gpio11.reconfigure().into_dyn_pin(),
        pins.gpio12.reconfigure().into_dyn_pin(),
        pins.gpio13.reconfigure().into_dyn_pin(),
        pins.gpio14.reconfigure().into_dyn_pin(),
        pins.gpio15.reconfigure().into_dyn_pin(),
        pins.gpio16.reconfigure().into_dyn_pin(),
        pins.gpio17.reconfigure().into_dyn_pin(),
        pins.gpio18.reconfigure().into_dyn_pin(),
        pins.gpio19.reconfigure().into_dyn_pin(),
        pins.gpio20.reconfigure().into_dyn_pin(),
        pins.gpio21.reconfigure().into_dyn_pin(),
        pins.gpio22.reconfigure().into_dyn_pin(),
        pins.gpio26.reconfigure().into_dyn_pin(),
    ]);

    GpioPins::new(rows, cols, Polarity::ActiveLow)
}
