//! CLI subcommand implementations.

pub mod refresh;
pub mod status;
pub mod times;
