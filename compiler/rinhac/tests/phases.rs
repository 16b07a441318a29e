// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based runner tests.
//!
//! # Organization
//!
//! - `load/` - JSON loading and the `check` summary (`rinha_ir`)
//! - `eval/` - Evaluating fixtures through the `run` command (`rinha_eval`)
//! - `cli/` - The `rinha` binary: arguments, exit codes, stdout/stderr
//! - `common/` - Shared fixture helpers
//!
//! # Running Phase Tests
//!
//! ```bash
//! cargo test -p rinhac --test phases
//! cargo test -p rinhac --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/load/mod.rs"]
mod load;

#[path = "phases/eval/mod.rs"]
mod eval;

#[path = "phases/cli/mod.rs"]
mod cli;
