//! Command-line interface for jink.
//!
//! Flag parsing plus the two informational flags (`--version`,
//! `--list-themes`) that exit before any session starts.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
EXAMPLES:
    jink ssh user@router          Interactive SSH with highlighting
    cat config.conf | jink        Highlight a config file
    jink -t monokai ssh router    Use a different theme";

/// jink - ink your Junos config
#[derive(Parser, Debug)]
#[command(name = "jink")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Color theme (see --list-themes)
    #[arg(short, long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Always highlight piped input (skip auto-detection)
    #[arg(short, long)]
    pub force: bool,

    /// Disable highlighting (pass-through mode)
    #[arg(short = 'n', long)]
    pub no_highlight: bool,

    /// Enable debug logging and byte-level stream tracing
    #[arg(short, long)]
    pub debug: bool,

    /// Set debug log level (overrides --debug, JINK_LOG and config)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Print the available theme names and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Configuration file (default: ~/.config/jink/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Command to run under a pseudo-terminal, e.g. `ssh user@router`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Theme name override
    pub theme: Option<String>,
    /// Skip detection in one-shot mode
    pub force: bool,
    /// Pass-through mode
    pub no_highlight: bool,
    /// Debug logging and stream tracing
    pub debug: bool,
    /// Log level override from CLI
    pub log_level: Option<log::LevelFilter>,
    /// Config file override
    pub config: Option<PathBuf>,
    /// Program and arguments to wrap; empty for one-shot mode
    pub command: Vec<String>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            theme: cli.theme,
            force: cli.force,
            no_highlight: cli.no_highlight,
            debug: cli.debug,
            log_level: cli.log_level.map(LogLevelArg::to_level_filter),
            config: cli.config,
            command: cli.command,
        }
    }
}

/// Result of CLI processing
#[derive(Debug, PartialEq, Eq)]
pub enum CliResult {
    /// Continue with normal startup
    Continue(RuntimeOptions),
    /// Exit with the given code (informational flag handled)
    Exit(i32),
}

/// Handle informational flags; everything else becomes [`RuntimeOptions`].
pub fn evaluate(cli: Cli) -> CliResult {
    if cli.version {
        println!("jink version {}", crate::VERSION);
        return CliResult::Exit(0);
    }
    if cli.list_themes {
        for name in jink_config::available_themes() {
            println!("{name}");
        }
        return CliResult::Exit(0);
    }
    CliResult::Continue(cli.into())
}

/// Process CLI arguments
pub fn process_cli() -> CliResult {
    evaluate(Cli::parse())
}

/// Print the full help text to stdout.
pub fn print_help() {
    let _ = Cli::command().print_help();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let CliResult::Continue(options) = evaluate(parse(&["jink"])) else {
            panic!("expected Continue");
        };
        assert_eq!(options, RuntimeOptions::default());
    }

    #[test]
    fn test_short_flags() {
        let options = RuntimeOptions::from(parse(&["jink", "-t", "nord", "-f", "-n", "-d"]));
        assert_eq!(options.theme.as_deref(), Some("nord"));
        assert!(options.force);
        assert!(options.no_highlight);
        assert!(options.debug);
    }

    #[test]
    fn test_command_keeps_its_own_flags() {
        let options = RuntimeOptions::from(parse(&[
            "jink", "--theme", "dracula", "ssh", "-p", "2222", "admin@r1",
        ]));
        assert_eq!(options.theme.as_deref(), Some("dracula"));
        assert_eq!(options.command, vec!["ssh", "-p", "2222", "admin@r1"]);
    }

    #[test]
    fn test_log_level() {
        let options = RuntimeOptions::from(parse(&["jink", "--log-level", "trace"]));
        assert_eq!(options.log_level, Some(log::LevelFilter::Trace));
        assert!(Cli::try_parse_from(["jink", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_config_path() {
        let options = RuntimeOptions::from(parse(&["jink", "--config", "/tmp/j.yaml"]));
        assert_eq!(options.config, Some(PathBuf::from("/tmp/j.yaml")));
    }

    #[test]
    fn test_informational_flags_exit() {
        assert_eq!(evaluate(parse(&["jink", "-v"])), CliResult::Exit(0));
        assert_eq!(evaluate(parse(&["jink", "--list-themes"])), CliResult::Exit(0));
    }
}
