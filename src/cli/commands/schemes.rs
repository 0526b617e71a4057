//! Schemes command implementation.
//!
//! The `paramchain schemes` command lists registered backend schemes.

use crate::error::Result;
use crate::registry::BackendRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schemes command implementation.
pub struct SchemesCommand {
    registry: BackendRegistry,
}

impl SchemesCommand {
    /// Create a new schemes command listing `registry`.
    pub fn new(registry: BackendRegistry) -> Self {
        Self { registry }
    }
}

impl Command for SchemesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for scheme in self.registry.schemes() {
            ui.message(&scheme);
        }
        Ok(CommandResult::success())
    }
}
