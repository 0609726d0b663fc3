//! Command-line front end for the calculator
//!
//! Provides the single-shot runner used when an expression is passed as an
//! argument, and the interactive loop used otherwise. All arithmetic is done
//! by `calc-eval`.

pub mod error;
pub mod format;
pub mod logging;
pub mod repl;
pub mod runner;
pub mod signal;

pub use error::{CliError, Result};
pub use format::format_value;
pub use repl::{Repl, ReplExit, ReplOptions};
pub use runner::run_once;
