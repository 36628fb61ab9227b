#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

mod board;
mod time;

use rp_pico as bsp;

use bsp::entry;
use bsp::{hal, hal::pac};
use hal::sio::Sio;

use embedded_hal::blocking::delay::DelayMs;

use mekk_matrix::keymap::POKER;
use mekk_matrix::{Matrix, ScanStatus};

defmt::timestamp!("{=u64:us}", time::now().ticks());

/// Milliseconds between scans
const SCAN_PERIOD: u32 = 1;

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let sio = Sio::new(pac.SIO);

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = hal::watchdog::Watchdog::new(pac.WATCHDOG);
    // Configure the clocks
    let clocks = hal::clocks::init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut gate = timer;

    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut matrix: Matrix<_, _, { board::ROWS }> =
        Matrix::new(board::matrix_pins(pins), timer).unwrap();
    defmt::info!("Scanning {}x{} matrix", board::ROWS, board::COLS);

    loop {
        if matrix.scan(time::millis()).unwrap() == ScanStatus::Changed {
            for (row, col) in matrix.state().pressed() {
                defmt::info!("({}, {}) {}", row, col, POKER.key(0, row, col));
            }
            defmt::info!("{} keys down", matrix.key_count());
        }

        gate.delay_ms(SCAN_PERIOD);
    }
}
