//! Command-line interface for paramchain.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, GetArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
