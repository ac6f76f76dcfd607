//! The `commands` command: lists every registered command.

use std::io::{self, Write};

use crate::commands::handler::{CommandHandler, CommandResult, HandlerType};
use crate::commands::registry::{enumerate_commands, CommandMap};
use crate::commands::HANDLER_TYPES;
use crate::events::TracingEventLog;

pub static LIST: HandlerType = HandlerType::new("ListCommands", ListCommands::create)
    .command("commands")
    .component_named("commandList");

/// Prints each command name and the handler identifier it resolves to.
#[derive(Debug, Default)]
pub struct ListCommands {
    lines: Vec<String>,
}

impl ListCommands {
    fn create() -> Box<dyn CommandHandler> {
        Box::new(Self::default())
    }

    /// Format `commands` as aligned `name  identifier` lines, sorted by name.
    pub fn render(commands: &CommandMap) -> Vec<String> {
        let width = commands.keys().map(String::len).max().unwrap_or(0);
        let mut entries: Vec<_> = commands.iter().collect();
        entries.sort();

        entries
            .into_iter()
            .map(|(name, identifier)| format!("{:width$}  {}", name, identifier, width = width))
            .collect()
    }
}

impl CommandHandler for ListCommands {
    fn init(&mut self) -> CommandResult {
        self.lines = Self::render(&enumerate_commands(HANDLER_TYPES, &TracingEventLog));
        Ok(())
    }

    fn execute(&mut self) -> CommandResult {
        let mut out = io::stdout().lock();
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn clean_up(&mut self) -> CommandResult {
        self.lines.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sorted_and_aligned() {
        let mut commands = CommandMap::new();
        commands.insert("status".to_string(), "statusCommand".to_string());
        commands.insert("about".to_string(), "aboutCommand".to_string());

        let lines = ListCommands::render(&commands);
        assert_eq!(lines, vec!["about   aboutCommand", "status  statusCommand"]);
    }

    #[test]
    fn test_render_empty() {
        assert!(ListCommands::render(&CommandMap::new()).is_empty());
    }

    #[test]
    fn test_init_lists_builtin_commands() {
        let mut handler = ListCommands::default();
        handler.init().unwrap();

        assert!(handler.lines.iter().any(|l| l.starts_with("about ")));
        assert!(handler.lines.iter().any(|l| l.contains("commandList")));

        handler.execute().unwrap();
        handler.clean_up().unwrap();
        assert!(handler.lines.is_empty());
    }
}
