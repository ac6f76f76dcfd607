//! The `about` command, also run when no command is given.

use std::io::{self, Write};

use crate::commands::handler::{CommandHandler, CommandResult, HandlerType};

pub static ABOUT: HandlerType = HandlerType::new("AboutCommand", AboutCommand::create)
    .command("about")
    .component();

/// Prints the program name, version and description.
#[derive(Debug, Default)]
pub struct AboutCommand {
    banner: Option<String>,
}

impl AboutCommand {
    fn create() -> Box<dyn CommandHandler> {
        Box::new(Self::default())
    }

    /// The text printed by `execute`.
    pub fn render() -> String {
        format!(
            "{} {}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION")
        )
    }
}

impl CommandHandler for AboutCommand {
    fn init(&mut self) -> CommandResult {
        self.banner = Some(Self::render());
        Ok(())
    }

    fn execute(&mut self) -> CommandResult {
        let banner = self.banner.get_or_insert_with(Self::render);
        let mut out = io::stdout().lock();
        writeln!(out, "{}", banner)?;
        Ok(())
    }

    fn clean_up(&mut self) -> CommandResult {
        self.banner = None;
        io::stdout().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::enumerate_commands;
    use crate::events::MemoryEventLog;

    #[test]
    fn test_render_contains_name_and_version() {
        let text = AboutCommand::render();
        assert!(text.starts_with("senex "));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_lifecycle() {
        let mut handler = AboutCommand::default();
        handler.init().unwrap();
        assert!(handler.banner.is_some());
        handler.execute().unwrap();
        handler.clean_up().unwrap();
        assert!(handler.banner.is_none());
    }

    #[test]
    fn test_registered_as_about() {
        let commands = enumerate_commands(&[&ABOUT], &MemoryEventLog::new());
        assert_eq!(commands.get("about").map(String::as_str), Some("aboutCommand"));
    }
}
