//! CLI implementation modules.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{run_ask, run_repl};
