//! Handler lifecycle and the static markers attached to handler types.

use std::fmt;

use thiserror::Error;

/// Errors a handler can raise from one of its lifecycle calls.
#[derive(Debug, Error)]
pub enum CommandError {
    /// IO errors (writing output, reading files, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The handler failed with a message.
    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    /// Create a generic handler failure.
    pub fn failed(msg: impl Into<String>) -> Self {
        CommandError::Failed(msg.into())
    }
}

/// Result type for handler lifecycle calls.
pub type CommandResult = std::result::Result<(), CommandError>;

/// A unit of command logic.
///
/// The dispatcher calls `init`, `execute` and `clean_up` exactly once each,
/// in that order, and drops the handler afterwards. An error from any call
/// stops the sequence.
pub trait CommandHandler {
    /// Prepare the handler before execution.
    fn init(&mut self) -> CommandResult {
        Ok(())
    }

    /// Run the command.
    fn execute(&mut self) -> CommandResult;

    /// Release whatever `init` or `execute` acquired.
    fn clean_up(&mut self) -> CommandResult {
        Ok(())
    }
}

/// The three lifecycle calls, in the order they are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Init,
    Execute,
    CleanUp,
}

impl LifecyclePhase {
    /// Get the display name for this phase.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Execute => "execute",
            Self::CleanUp => "clean_up",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Builds a fresh handler instance.
pub type HandlerFactory = fn() -> Box<dyn CommandHandler>;

/// Declares a handler type as a command invocable by `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDeclaration {
    /// Invocation keyword, matched case-insensitively.
    pub name: &'static str,
}

/// Marks a handler type as constructible by the container.
///
/// A blank `value` means the identifier is derived from the type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Component {
    pub value: &'static str,
}

/// Static description of a handler type and the markers it carries.
///
/// Each handler module exports one of these and lists it in
/// [`crate::commands::HANDLER_TYPES`]:
///
/// ```
/// use senex::commands::{CommandHandler, CommandResult, HandlerType};
///
/// struct DeployCommand;
///
/// impl CommandHandler for DeployCommand {
///     fn execute(&mut self) -> CommandResult {
///         Ok(())
///     }
/// }
///
/// fn create() -> Box<dyn CommandHandler> {
///     Box::new(DeployCommand)
/// }
///
/// pub static DEPLOY: HandlerType = HandlerType::new("DeployCommand", create)
///     .command("deploy")
///     .component();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandlerType {
    /// Type name, optionally module-qualified (`a::b::DeployCommand`).
    pub type_name: &'static str,
    /// Command declaration marker, if present.
    pub command: Option<CommandDeclaration>,
    /// Registrable-component marker, if present.
    pub component: Option<Component>,
    /// Constructor used by the container.
    pub factory: HandlerFactory,
}

impl HandlerType {
    /// Describe a handler type that carries no markers yet.
    pub const fn new(type_name: &'static str, factory: HandlerFactory) -> Self {
        Self {
            type_name,
            command: None,
            component: None,
            factory,
        }
    }

    /// Attach a command declaration with the given invocation name.
    pub const fn command(self, name: &'static str) -> Self {
        Self {
            command: Some(CommandDeclaration { name }),
            ..self
        }
    }

    /// Attach a component marker whose identifier is derived from the type name.
    pub const fn component(self) -> Self {
        self.component_named("")
    }

    /// Attach a component marker with an explicit identifier.
    pub const fn component_named(self, value: &'static str) -> Self {
        Self {
            component: Some(Component { value }),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl CommandHandler for Noop {
        fn execute(&mut self) -> CommandResult {
            Ok(())
        }
    }

    fn noop() -> Box<dyn CommandHandler> {
        Box::new(Noop)
    }

    #[test]
    fn test_new_carries_no_markers() {
        let handler_type = HandlerType::new("Noop", noop);
        assert!(handler_type.command.is_none());
        assert!(handler_type.component.is_none());
    }

    #[test]
    fn test_builder_attaches_markers() {
        let handler_type = HandlerType::new("Noop", noop)
            .command("noop")
            .component_named("noopBean");

        assert_eq!(handler_type.command, Some(CommandDeclaration { name: "noop" }));
        assert_eq!(handler_type.component, Some(Component { value: "noopBean" }));
    }

    #[test]
    fn test_component_without_value() {
        let handler_type = HandlerType::new("Noop", noop).component();
        assert_eq!(handler_type.component, Some(Component { value: "" }));
    }

    #[test]
    fn test_default_lifecycle_hooks_succeed() {
        let mut handler = (HandlerType::new("Noop", noop).factory)();
        assert!(handler.init().is_ok());
        assert!(handler.execute().is_ok());
        assert!(handler.clean_up().is_ok());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(LifecyclePhase::Init.to_string(), "init");
        assert_eq!(LifecyclePhase::Execute.to_string(), "execute");
        assert_eq!(LifecyclePhase::CleanUp.to_string(), "clean_up");
    }

    #[test]
    fn test_command_error_messages() {
        assert_eq!(CommandError::failed("boom").to_string(), "boom");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CommandError = io.into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
