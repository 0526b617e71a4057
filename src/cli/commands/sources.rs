//! Sources command implementation.
//!
//! The `paramchain sources` command loads every data source and lists them
//! in lookup order.

use crate::collection::DataSourceCollection;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sources command implementation.
pub struct SourcesCommand {
    data_sources: Vec<String>,
}

impl SourcesCommand {
    /// Create a new sources command.
    pub fn new(data_sources: Vec<String>) -> Self {
        Self { data_sources }
    }
}

impl Command for SourcesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let collection = DataSourceCollection::new(&self.data_sources)?;
        if collection.is_empty() {
            ui.warning("No data sources configured");
        }

        for (i, source) in collection.iter().enumerate() {
            ui.message(&format!("{}. {}", i + 1, source.describe()));
        }
        Ok(CommandResult::success())
    }
}
