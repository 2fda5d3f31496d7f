use anyhow::{Context, Result};
use jink::cli::{self, RuntimeOptions};
use jink::config::Config;
use jink::highlight::{Highlighter, Theme};
use jink::terminal::StreamProcessor;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    match run(options) {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("jink: error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Run the selected mode and return the process exit code.
fn run(options: RuntimeOptions) -> Result<i32> {
    let config_path = options.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    // Routes all log::info!() etc. to /tmp/jink_debug.log
    let level = jink::debug::resolve_level(
        options.log_level,
        options.debug,
        jink::debug::level_from_env(),
        config.log_level.as_deref(),
    );
    jink::debug::init_log_bridge(level);
    log::info!("Starting jink {}", jink::VERSION);

    let theme_name = options.theme.as_deref().unwrap_or(&config.theme);
    let highlighter = Highlighter::with_theme(Theme::by_name(&theme_name.to_lowercase()));
    if options.no_highlight || !config.highlight {
        highlighter.disable();
    }
    let force = options.force || config.force;

    let Some((program, args)) = options.command.split_first() else {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            cli::print_help();
            return Ok(0);
        }
        jink::pipe::highlight_stream(&highlighter, stdin.lock(), io::stdout().lock(), force)
            .context("failed to highlight standard input")?;
        return Ok(0);
    };

    let processor = StreamProcessor::new(highlighter).with_debug(options.debug);
    let runtime = Runtime::new().context("failed to start async runtime")?;
    let result = runtime.block_on(processor.run(program, args));

    log::info!("Session ended, shutting down runtime");
    runtime.shutdown_timeout(Duration::from_secs(2));

    match result {
        Ok(()) => Ok(0),
        Err(e) => match e.exit_code() {
            Some(code) => {
                log::info!("{} exited with status {}", program, code);
                Ok(code)
            }
            None => Err(e).with_context(|| format!("failed to run {program}")),
        },
    }
}
