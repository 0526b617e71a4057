//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which loads the configuration once and
//! hands each command the data sources it needs.

pub mod check;
pub mod dispatcher;
pub mod display;
pub mod get;
pub mod schemes;
pub mod sources;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
