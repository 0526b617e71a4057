//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// paramchain - Resolve template parameters across ordered data sources.
#[derive(Debug, Parser)]
#[command(name = "paramchain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .paramchain.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data source as <scheme>:<location>; repeat for more, earlier wins
    #[arg(
        short = 'd',
        long = "data-source",
        global = true,
        env = "PARAMCHAIN_DATA_SOURCES",
        value_delimiter = ','
    )]
    pub data_sources: Vec<String>,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved value of a parameter
    Get(GetArgs),

    /// Check that parameters resolve
    Check(CheckArgs),

    /// List registered data source schemes
    Schemes,

    /// List data sources in lookup order
    Sources,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GetArgs {
    /// Parameter name
    pub name: String,

    /// Print the stored value without following pointers
    #[arg(long)]
    pub raw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Parameter names
    #[arg(required = true)]
    pub names: Vec<String>,
}
