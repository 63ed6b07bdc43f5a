//! CLI command handlers.

pub mod change;
