//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ParamConfig};
use crate::error::Result;
use crate::registry;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// `schemes` never reads the config file.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Get(args) => {
                let config = self.project_config(cli)?;
                let data_sources = config.data_sources_with(&cli.data_sources);
                let cmd = super::get::GetCommand::new(data_sources, config.output, args.clone());
                cmd.execute(ui)
            }
            Commands::Check(args) => {
                let config = self.project_config(cli)?;
                let data_sources = config.data_sources_with(&cli.data_sources);
                let cmd = super::check::CheckCommand::new(data_sources, args.clone());
                cmd.execute(ui)
            }
            Commands::Schemes => {
                let cmd = super::schemes::SchemesCommand::new(registry::global());
                cmd.execute(ui)
            }
            Commands::Sources => {
                let config = self.project_config(cli)?;
                let data_sources = config.data_sources_with(&cli.data_sources);
                let cmd = super::sources::SourcesCommand::new(data_sources);
                cmd.execute(ui)
            }
        }
    }

    /// Load the config for this project.
    ///
    /// Data sources given on the command line are placed ahead of those in
    /// the config file by [`ParamConfig::data_sources_with`].
    fn project_config(&self, cli: &Cli) -> Result<ParamConfig> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        tracing::debug!("Configured data sources: {:?}", config.data_sources);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::error::ParamError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_stores_project_root() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/tmp/project"));
        assert_eq!(dispatcher.project_root(), Path::new("/tmp/project"));
    }

    #[test]
    fn cli_sources_take_precedence_over_config() {
        let temp = TempDir::new().unwrap();
        let defaults = temp.path().join("defaults.yml");
        let overrides = temp.path().join("overrides.yml");
        fs::write(&defaults, "Stage: dev\n").unwrap();
        fs::write(&overrides, "Stage: prod\n").unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            format!("data_sources:\n  - yaml:{}\n", defaults.display()),
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "paramchain".to_string(),
            "-d".to_string(),
            format!("yaml:{}", overrides.display()),
            "get".to_string(),
            "Stage".to_string(),
        ])
        .unwrap();

        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), &["prod".to_string()]);
    }

    #[test]
    fn explicit_missing_config_fails() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["paramchain", "--config", "/no/such.yml", "sources"]).unwrap();
        let mut ui = MockUI::new();

        let err = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap_err();
        assert!(matches!(err, ParamError::ConfigNotFound { .. }));
    }

    #[test]
    fn schemes_ignores_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "data_sources: [unclosed\n").unwrap();
        let cli = Cli::try_parse_from(["paramchain", "schemes"]).unwrap();
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.messages().contains(&"yaml".to_string()));
    }

    #[test]
    fn sources_reports_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "data_sources: [unclosed\n").unwrap();
        let cli = Cli::try_parse_from(["paramchain", "sources"]).unwrap();
        let mut ui = MockUI::new();

        let err = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap_err();
        assert!(matches!(err, ParamError::ConfigParseError { .. }));
    }
}
