//! Logging shims
//!
//! Forward to `defmt` when the `embedded` feature is on, otherwise expand to
//! nothing.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "embedded")]
        ::defmt::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "embedded")]
        ::defmt::debug!($($arg)*);
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "embedded")]
        ::defmt::warn!($($arg)*);
    };
}
