//! Compile-time configuration constants: defaults for every CLI-tunable
//! value plus the built-in word-length distribution table.

/// Version string printed by `-V`/`--version`.
pub const VERSION_STRING: &str = "0.17";

/// Program name used in usage/error output.
pub const PROG_NAME: &str = "prince";

/// Longest word length a bucket can hold, and the largest single chain part.
pub const MAX_WORD_LEN: usize = 16;

/// Default minimum candidate length (`--pw-min`).
pub const PW_MIN_DEFAULT: u8 = 1;
/// Default maximum candidate length (`--pw-max`).
pub const PW_MAX_DEFAULT: u8 = 16;
/// Default minimum chain length (`--elem-cnt-min`).
pub const ELEM_CNT_MIN_DEFAULT: usize = 1;
/// Default maximum chain length (`--elem-cnt-max`).
pub const ELEM_CNT_MAX_DEFAULT: usize = 8;

/// Built-in word-length distribution, indices 0..24. Indices >= 25 default to 1.
/// Derived from a reference wordlist corpus; used for batch sizing unless
/// `--wl-dist-len` selects the observed bucket sizes instead.
pub const WORDLEN_DIST_DEFAULT: [u64; 25] = [
    0, 15, 56, 350, 3315, 43721, 276252, 201748, 226412, 119885, 75075, 26323, 13373, 6353, 3540,
    1877, 972, 311, 151, 81, 66, 21, 16, 13, 13,
];
