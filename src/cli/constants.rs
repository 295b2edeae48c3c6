//! Constants, globals, and level-gated stderr diagnostics.
//!
//! `DISPLAY_LEVEL` is a crate-level atomic; the `display*!` macros check it,
//! so diagnostics never need a logging framework.
//!
//! 0 = no output; 1 = errors only; 2 = normal (default); 3 = verbose;
//! 4 = very verbose.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROG_NAME: &str = crate::config::PROG_NAME;
pub const VERSION_STRING: &str = crate::config::VERSION_STRING;

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output — active only in debug builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}

/// Print a diagnostic at level 1 then terminate the process with `$error`.
///
/// Usage: `end_process!(exit_code, "message {}", arg)`
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        eprint!("Error in {}, line {} : \n", file!(), line!());
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error {} : ", $error);
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}
