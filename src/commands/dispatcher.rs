//! Command dispatcher.
//!
//! Turns raw process arguments into executed handler lifecycles:
//!
//! 1. Flag tokens (`--...`) are dropped; the rest are candidate command names.
//! 2. With no candidates, a failure event is logged and the default command runs.
//! 3. Each candidate known to the registry is instantiated and run through
//!    `init`, `execute` and `clean_up`, in argument order.
//!
//! Unknown names are skipped. The first lifecycle failure aborts the batch.

use thiserror::Error;
use tracing::debug;

use super::container::ConstructionService;
use super::handler::{CommandError, CommandHandler, HandlerType, LifecyclePhase};
use super::registry::enumerate_commands;
use crate::events::EventLog;

/// Prefix marking a token as a flag rather than a command name.
pub const FLAG_PREFIX: &str = "--";

/// Command run when no candidate was given.
pub const DEFAULT_COMMAND: &str = "about";

/// Errors that abort a dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler lifecycle call failed.
    #[error("command '{command}' failed during {phase}: {source}")]
    Lifecycle {
        command: String,
        phase: LifecyclePhase,
        #[source]
        source: CommandError,
    },
}

/// Extract candidate command names from raw arguments.
///
/// Keeps every token whose trimmed form does not start with `--`, in order.
/// Surviving tokens are returned untouched.
pub fn parse_candidates<S: AsRef<str>>(raw_args: &[S]) -> Vec<String> {
    raw_args
        .iter()
        .map(AsRef::as_ref)
        .filter(|arg| !arg.trim().starts_with(FLAG_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Dispatches candidate commands to their handlers.
pub struct Dispatcher<'a> {
    handler_types: &'a [&'a HandlerType],
    container: &'a dyn ConstructionService,
    log: &'a dyn EventLog,
    default_command: String,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over `handler_types`, constructing handlers
    /// through `container` and reporting to `log`.
    pub fn new(
        handler_types: &'a [&'a HandlerType],
        container: &'a dyn ConstructionService,
        log: &'a dyn EventLog,
    ) -> Self {
        Self {
            handler_types,
            container,
            log,
            default_command: DEFAULT_COMMAND.to_string(),
        }
    }

    /// Replace the command run when no candidate was given.
    pub fn with_default_command(mut self, name: impl Into<String>) -> Self {
        self.default_command = name.into();
        self
    }

    /// Run every command named in `raw_args`.
    ///
    /// The registry is rebuilt on each call. Returns the first lifecycle
    /// failure; candidates after the failing one are not dispatched.
    pub fn dispatch<S: AsRef<str>>(&self, raw_args: &[S]) -> Result<(), DispatchError> {
        let mut candidates = parse_candidates(raw_args);

        if candidates.is_empty() {
            let provided = raw_args
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            self.log.error(
                "CommandDispatchFailed",
                &[
                    ("providedArgs", provided.as_str()),
                    ("reason", "At least one command needs to be specified."),
                ],
            );
            candidates.push(self.default_command.clone());
        }

        let commands = enumerate_commands(self.handler_types, self.log);

        for name in &candidates {
            let Some(identifier) = commands.get(&name.to_lowercase()) else {
                continue;
            };

            self.log.info(
                "ResolvingCommandHandler",
                &[("command", name.as_str()), ("identifier", identifier.as_str())],
            );

            let Some(mut handler) = self.container.instantiate(identifier) else {
                debug!(identifier = %identifier, "Container returned no handler");
                continue;
            };

            run_lifecycle(name, handler.as_mut())?;
        }

        Ok(())
    }
}

/// Call `init`, `execute` and `clean_up` in order, stopping at the first error.
fn run_lifecycle(command: &str, handler: &mut dyn CommandHandler) -> Result<(), DispatchError> {
    let failed = |phase: LifecyclePhase, source: CommandError| DispatchError::Lifecycle {
        command: command.to_string(),
        phase,
        source,
    };

    debug!(command, "Running command");
    handler
        .init()
        .map_err(|e| failed(LifecyclePhase::Init, e))?;
    handler
        .execute()
        .map_err(|e| failed(LifecyclePhase::Execute, e))?;
    handler
        .clean_up()
        .map_err(|e| failed(LifecyclePhase::CleanUp, e))?;
    debug!(command, "Command finished");

    Ok(())
}
