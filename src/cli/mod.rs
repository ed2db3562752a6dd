//! CLI library modules for the cluster-eval binary.
//!
//! Argument parsing, output helpers, and the evaluate command live here so
//! they can be tested without spawning the binary.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use output::*;
pub use parser::*;
pub use utils::*;
