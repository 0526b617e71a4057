//! Get command implementation.
//!
//! The `paramchain get` command prints a parameter's resolved value.

use crate::cli::args::GetArgs;
use crate::collection::DataSourceCollection;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render_value;

/// The get command implementation.
pub struct GetCommand {
    data_sources: Vec<String>,
    format: OutputFormat,
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command. `format` is the configured default output.
    pub fn new(data_sources: Vec<String>, format: OutputFormat, args: GetArgs) -> Self {
        Self {
            data_sources,
            format,
            args,
        }
    }
}

impl Command for GetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.data_sources.is_empty() {
            ui.warning("No data sources configured; use --data-source or .paramchain.yml");
        }

        let collection = DataSourceCollection::new(&self.data_sources)?;
        let value = if self.args.raw {
            collection.get_parameter(&self.args.name)?.clone()
        } else {
            collection.get_parameter_recursive(&self.args.name)?
        };

        let format = if self.args.json {
            OutputFormat::Json
        } else {
            self.format
        };
        ui.message(&render_value(&value, format)?);

        Ok(CommandResult::success())
    }
}
