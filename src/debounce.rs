//! Matrix-wide debouncing
//!
//! Any change in the raw matrix restarts a single timer; the raw matrix is only
//! accepted once nothing has changed for `WINDOW` ticks. A bouncing contact
//! therefore delays the whole matrix rather than leaking a flicker through.

use crate::logging::{debug, trace};
use crate::state::MatrixState;
use crate::{Duration, Instant};

/// Default stabilisation window, in ticks
pub const DEBOUNCE: Duration = 5;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<const ROWS: usize, const WINDOW: Duration = DEBOUNCE> {
    /// Most recent raw reading
    raw: MatrixState<ROWS>,
    /// Last reading that stayed unchanged for `WINDOW`
    debounced: MatrixState<ROWS>,
    /// Set while unsettled, to the time of the last observed change
    unsettled_since: Option<Instant>,
}

impl<const ROWS: usize, const WINDOW: Duration> Debouncer<ROWS, WINDOW> {
    pub const fn new() -> Self {
        Debouncer {
            raw: MatrixState::new(),
            debounced: MatrixState::new(),
            unsettled_since: None,
        }
    }

    /// Forget everything seen so far, as if no key was ever pressed
    pub fn reset(&mut self) {
        self.raw.clear();
        self.debounced.clear();
        self.unsettled_since = None;
    }

    /// Feeds one raw scan taken at `now`. Returns if the debounced state changed
    pub fn debounce(&mut self, raw: &MatrixState<ROWS>, now: Instant) -> bool {
        let mut bounced = false;
        for (row, (&new, old)) in raw.rows().iter().zip(self.raw.rows()).enumerate() {
            if new != *old {
                if let Some(since) = self.unsettled_since {
                    debug!(
                        "bounce: {} {}@{:#x}",
                        now.wrapping_sub(since),
                        row,
                        new ^ *old
                    );
                }
                bounced = true;
            }
        }
        self.raw = *raw;
        if bounced {
            self.unsettled_since = Some(now);
        }

        match self.unsettled_since {
            Some(since) if now.wrapping_sub(since) >= WINDOW => {
                let changed = self.debounced != self.raw;
                self.debounced = self.raw;
                self.unsettled_since = None;
                if changed {
                    trace!("debounced: {} keys down", self.debounced.key_count());
                }
                changed
            }
            _ => false,
        }
    }

    /// The last stable reading
    pub fn state(&self) -> &MatrixState<ROWS> {
        &self.debounced
    }

    pub fn is_settled(&self) -> bool {
        self.unsettled_since.is_none()
    }
}

impl<const ROWS: usize, const WINDOW: Duration> Default for Debouncer<ROWS, WINDOW> {
    fn default() -> Self {
        Self::new()
    }
}
