//! Command-line interface: argument parsing, usage/version text, and the
//! level-gated diagnostic macros.

pub mod arg_utils;
pub mod args;
pub mod constants;
pub mod help;
