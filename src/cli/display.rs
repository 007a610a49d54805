//! Global notification level for the CLI.
//!
//! Modelled as a crate-level atomic so every module can gate its stderr
//! notices without threading a verbosity value through call chains.
//!
//! 0 = silent; 1 = errors only; 2 = normal; 3 = verbose.

use std::sync::atomic::{AtomicU32, Ordering};

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current notification level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the notification level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Prints to stderr when the current notification level is at least `$level`.
#[macro_export]
macro_rules! notice {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::display::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
