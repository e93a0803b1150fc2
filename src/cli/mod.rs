//! Command Line Interface (CLI) layer for sarstack-io.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the dispatch logic (`runner`) that maps each subcommand onto the
//! library API in `sarstack_io`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
