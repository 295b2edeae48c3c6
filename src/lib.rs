//! PRINCE (Probability Infinite Chained Elements) password-candidate generator.
//!
//! This crate root re-exports every module so the CLI layer, benchmarks, and
//! integration tests can reach the generator's internals.

pub mod bigint;
pub mod buckets;
pub mod chain;
pub mod cli;
pub mod config;
pub mod emit;
pub mod loader;
pub mod materialize;
pub mod schedule;
pub mod sink;
pub mod wordlen_dist;

pub use config::{PROG_NAME, VERSION_STRING};
