//! Command-line surface.
//!
//! Flags are parsed here; command names are left to the dispatcher, which
//! receives the raw argument list minus the values of our own flags.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Flags that take a value, possibly as the following token.
const VALUE_FLAGS: &[&str] = &["--config", "--log-filter"];

/// Collect the process arguments after the program name.
///
/// Arguments that are not valid UTF-8 are converted lossily.
pub fn raw_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Drop the values given to our own flags as separate tokens.
///
/// `--log-filter debug` would otherwise hand `debug` to the dispatcher as a
/// command name. The `--flag=value` form is a single token and is kept.
pub fn dispatch_args(raw: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(raw.len());
    let mut tokens = raw.iter();

    while let Some(token) = tokens.next() {
        args.push(token.clone());
        if VALUE_FLAGS.contains(&token.as_str()) {
            tokens.next();
        }
    }

    args
}

/// Run one or more registered commands, in order.
#[derive(Debug, Default, Parser)]
#[command(name = "senex", version, about, ignore_errors = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tracing filter directive, e.g. `senex=debug`.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Commands to run. Defaults to `about` when none is given.
    #[arg(value_name = "COMMANDS")]
    pub commands: Vec<String>,
}

impl Cli {
    /// Parse flags from `args` (including the program name).
    ///
    /// Unknown flags never abort the process; on a parse failure the flags
    /// fall back to their defaults. `--help` and `--version` print and exit.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_and_commands() {
        let cli = Cli::parse_lenient(["senex", "--config=/etc/senex.toml", "about", "commands"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/senex.toml")));
        assert_eq!(cli.commands, vec!["about", "commands"]);
        assert!(cli.log_filter.is_none());
    }

    #[test]
    fn test_parse_log_filter() {
        let cli = Cli::parse_lenient(["senex", "--log-filter", "senex=trace"]);
        assert_eq!(cli.log_filter.as_deref(), Some("senex=trace"));
        assert!(cli.commands.is_empty());
    }

    #[test]
    fn test_dispatch_args_drops_flag_values() {
        let raw: Vec<String> = ["--log-filter", "debug", "about", "--config", "/tmp/x.toml"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dispatch_args(&raw), vec!["--log-filter", "about", "--config"]);
    }

    #[test]
    fn test_dispatch_args_keeps_inline_values() {
        let raw = vec!["--log-filter=debug".to_string(), "commands".to_string()];
        assert_eq!(dispatch_args(&raw), raw);
    }

    #[test]
    fn test_raw_args_skips_program_name() {
        let args = raw_args(["senex", "about"].map(OsString::from));
        assert_eq!(args, vec!["about"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_raw_args_tolerates_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = raw_args(vec![
            OsString::from("senex"),
            OsString::from_vec(vec![b'a', 0xff]),
            OsString::from("about"),
        ]);
        assert_eq!(args.len(), 2);
        assert!(args[0].contains('\u{FFFD}'));
        assert_eq!(args[1], "about");
    }

    #[test]
    fn test_parse_nothing() {
        let cli = Cli::parse_lenient(["senex"]);
        assert!(cli.config.is_none());
        assert!(cli.commands.is_empty());
    }
}
