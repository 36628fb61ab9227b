//! Picks the logging backend: `defmt` on target, `log` on the host

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, trace};

#[cfg(feature = "log")]
pub(crate) use log::{debug, trace};

#[cfg(not(any(feature = "defmt", feature = "log")))]
mod silent {
    macro_rules! debug {
        ($($arg:tt)*) => {{
            let _ = core::format_args!($($arg)*);
        }};
    }
    macro_rules! trace {
        ($($arg:tt)*) => {{
            let _ = core::format_args!($($arg)*);
        }};
    }
    pub(crate) use debug;
    pub(crate) use trace;
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
pub(crate) use silent::{debug, trace};
