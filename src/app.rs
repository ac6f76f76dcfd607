//! Process-level wiring.
//!
//! Builds the container and dispatcher for one invocation and runs the
//! commands named in the raw arguments.

use tracing::debug;

use crate::commands::{Container, Dispatcher, HandlerType, HANDLER_TYPES};
use crate::config::Settings;
use crate::error::Result;
use crate::events::{EventLog, TracingEventLog};

/// One dispatcher invocation.
pub struct App<'a> {
    settings: Settings,
    handler_types: &'a [&'a HandlerType],
    log: &'a dyn EventLog,
}

impl App<'static> {
    /// Create an application over the built-in handler table, logging
    /// events through `tracing`.
    pub fn new(settings: Settings) -> Self {
        Self::with_handlers(settings, HANDLER_TYPES, &TracingEventLog)
    }
}

impl<'a> App<'a> {
    /// Create an application over a custom handler table and event log.
    pub fn with_handlers(
        settings: Settings,
        handler_types: &'a [&'a HandlerType],
        log: &'a dyn EventLog,
    ) -> Self {
        Self {
            settings,
            handler_types,
            log,
        }
    }

    /// Dispatch every command named in `raw_args`.
    pub fn run<S: AsRef<str>>(&self, raw_args: &[S]) -> Result<()> {
        let container = Container::from_handler_types(self.handler_types);
        debug!(components = ?container.identifiers(), "Container ready");

        Dispatcher::new(self.handler_types, &container, self.log)
            .with_default_command(self.settings.default_command.clone())
            .dispatch(raw_args)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::cli::dispatch_args;
    use crate::commands::{CommandError, CommandHandler, CommandResult};
    use crate::error::AppError;
    use crate::events::{MemoryEventLog, Severity};

    static PINGS: AtomicUsize = AtomicUsize::new(0);

    struct PingCommand;

    impl CommandHandler for PingCommand {
        fn execute(&mut self) -> CommandResult {
            PINGS.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct BrokenCommand;

    impl CommandHandler for BrokenCommand {
        fn execute(&mut self) -> CommandResult {
            Err(CommandError::failed("broken on purpose"))
        }
    }

    fn ping() -> Box<dyn CommandHandler> {
        Box::new(PingCommand)
    }

    fn broken() -> Box<dyn CommandHandler> {
        Box::new(BrokenCommand)
    }

    static PING: HandlerType = HandlerType::new("PingCommand", ping).command("ping").component();
    static BROKEN: HandlerType = HandlerType::new("BrokenCommand", broken)
        .command("broken")
        .component();
    static TEST_HANDLERS: &[&HandlerType] = &[&PING, &BROKEN];

    #[test]
    fn test_run_with_builtin_handlers() {
        let app = App::new(Settings::default());
        assert!(app.run(&["about", "--verbose", "bogus"]).is_ok());
    }

    #[test]
    fn test_run_uses_configured_default_command() {
        let log = MemoryEventLog::new();
        let settings = Settings {
            default_command: "ping".to_string(),
            ..Settings::default()
        };
        let app = App::with_handlers(settings, TEST_HANDLERS, &log);

        let before = PINGS.load(Ordering::SeqCst);
        app.run(&["--flag"]).unwrap();

        assert!(PINGS.load(Ordering::SeqCst) > before);
        assert_eq!(log.with_severity(Severity::Error).len(), 1);
    }

    #[test]
    fn test_separate_flag_value_still_runs_default_command() {
        let log = MemoryEventLog::new();
        let settings = Settings {
            default_command: "ping".to_string(),
            ..Settings::default()
        };
        let app = App::with_handlers(settings, TEST_HANDLERS, &log);
        let raw = vec!["--log-filter".to_string(), "debug".to_string()];

        let before = PINGS.load(Ordering::SeqCst);
        app.run(&dispatch_args(&raw)).unwrap();

        assert!(PINGS.load(Ordering::SeqCst) > before);
        let failures = log.with_severity(Severity::Error);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].value("providedArgs"), Some("--log-filter"));
    }

    #[test]
    fn test_run_surfaces_handler_failure() {
        let log = MemoryEventLog::new();
        let app = App::with_handlers(Settings::default(), TEST_HANDLERS, &log);

        let err = app.run(&["broken", "ping"]).unwrap_err();
        assert!(matches!(err, AppError::Dispatch(_)));
        assert_eq!(err.user_message(), "Command 'broken' failed: broken on purpose");
    }
}
