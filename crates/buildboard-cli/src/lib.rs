// Rust guideline compliant 2026-10-18

//! Buildboard CLI library.
//!
//! Exposes the command implementations and output formatting so they can be
//! driven from tests.

pub mod commands;
pub mod logging;
pub mod output;
pub mod output_mode;
pub mod session;

pub use output::{create_formatter, JsonFormatter, OutputFormatter, TableFormatter};
pub use session::Session;
