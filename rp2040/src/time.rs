//! Free-running RP2040 timer, read without owning the peripheral

use rp2040_hal::pac;

pub type Instant = fugit::Instant<u64, 1, 1_000_000>;

/// The timer must have been taken out of reset, e.g. by `hal::Timer::new`
pub fn now() -> Instant {
    let timer = unsafe { &*pac::TIMER::ptr() };
    Instant::from_ticks(loop {
        let e = timer.timerawh.read().bits();
        let t = timer.timerawl.read().bits();
        let e2 = timer.timerawh.read().bits();
        if e == e2 {
            break ((e as u64) << 32) | (t as u64);
        }
    })
}

/// Milliseconds since boot, wrapping, as the matrix debouncer counts them
pub fn millis() -> mekk_matrix::Instant {
    now().duration_since_epoch().to_millis() as mekk_matrix::Instant
}
