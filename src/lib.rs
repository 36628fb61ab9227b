//! Keyboard matrix scanning and debouncing
//!
//! [`Matrix`] drives a row/column switch grid through a [`MatrixPins`] backend,
//! filters contact bounce with a [`Debouncer`] and keeps the last stable reading
//! in a [`MatrixState`] for the rest of the firmware to read.

#![no_std]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Only one of the features \"defmt\" or \"log\" may be enabled");

mod logging;

pub mod debounce;
pub mod keymap;
pub mod matrix;
pub mod pins;
pub mod state;

#[cfg(test)]
mod mock;

pub use debounce::Debouncer;
pub use keymap::{Key, Keymap};
pub use matrix::{Matrix, ScanStatus};
pub use pins::{GpioPins, MatrixPins, Polarity};
pub use state::MatrixState;

/// One bit per column, bit `i` set when the switch in column `i` is closed
pub type Row = u32;

/// A tick of the caller's clock
pub type Instant = u32;
/// Number of ticks between two [`Instant`]s
pub type Duration = u32;
