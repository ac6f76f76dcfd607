//! senex - runs the commands named on the command line.

use std::process::ExitCode;

use senex::app::App;
use senex::cli::{dispatch_args, raw_args, Cli};
use senex::config::Settings;
use senex::error::AppError;
use senex::logging;

fn main() -> ExitCode {
    let args = raw_args(std::env::args_os());
    let cli = Cli::parse_lenient(std::env::args_os());

    let (settings, config_error) = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(AppError::from(e))),
    };
    let settings = settings.with_log_filter(cli.log_filter);

    let _guard = match logging::init(&settings) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("senex: logging disabled: {:#}", e);
            None
        }
    };

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to load config, using default");
        eprintln!("senex: {}", e.user_message());
    }

    let code = match App::new(settings).run(&dispatch_args(&args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Dispatch aborted");
            eprintln!("senex: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            ExitCode::FAILURE
        }
    };

    logging::shutdown();
    code
}
