//! Prayer time tracker CLI library.
//!
//! This crate provides the CLI interface for the prayer time tracker.

pub mod cache;
mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
