//! Check command implementation.
//!
//! The `paramchain check` command verifies that parameters resolve,
//! pointers included, and exits non-zero if any do not.

use crate::cli::args::CheckArgs;
use crate::collection::DataSourceCollection;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    data_sources: Vec<String>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(data_sources: Vec<String>, args: CheckArgs) -> Self {
        Self { data_sources, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let collection = DataSourceCollection::new(&self.data_sources)?;

        let mut missing = 0;
        for name in &self.args.names {
            if let Err(e) = collection.get_parameter_recursive(name) {
                ui.error(&format!("{}: {}", name, e));
                missing += 1;
            }
        }

        if missing > 0 {
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!(
            "{} parameter(s) resolved",
            self.args.names.len()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Vec<String>) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("params.yml");
        fs::write(&path, "A: !Ref B\nB: 1\nLoop: !Ref Loop\nDangling: !Ref Gone\n").unwrap();
        let sources = vec![format!("yaml:{}", path.display())];
        (temp, sources)
    }

    fn check(sources: Vec<String>, names: &[&str]) -> (CommandResult, MockUI) {
        let args = CheckArgs {
            names: names.iter().map(|n| n.to_string()).collect(),
        };
        let mut ui = MockUI::new();
        let result = CheckCommand::new(sources, args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn all_resolving_names_succeed() {
        let (_temp, sources) = setup();
        let (result, ui) = check(sources, &["A", "B"]);

        assert!(result.success);
        assert!(ui.has_success("2 parameter(s) resolved"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn reports_each_failing_name() {
        let (_temp, sources) = setup();
        let (result, ui) = check(sources, &["A", "Loop", "Dangling", "Nope"]);

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 3);
        assert!(ui.has_error("Loop: Circular reference detected: Loop → Loop"));
        assert!(ui.has_error("Dangling: Unable to find parameter Gone"));
        assert!(ui.has_error("Nope: Unable to find parameter Nope"));
    }
}
