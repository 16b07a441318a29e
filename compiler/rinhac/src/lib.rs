//! Rinha runner library.
//!
//! Command implementations behind the `rinha` binary, exposed so tests and
//! embedders can drive them without spawning a process.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
