//! Debug log file for jink.
//!
//! Installs a `log::Log` implementation (the log bridge) that routes every
//! `log::info!()`, `log::debug!()` etc. from jink and its crates to
//! `/tmp/jink_debug.log` on Unix/macOS, or `%TEMP%\jink_debug.log` on
//! Windows. Nothing is written to stdout or stderr: while a wrapped session
//! is running the terminal is in raw mode and any stray output would corrupt
//! the relayed screen.
//!
//! Level precedence: `--log-level` > `--debug` > `JINK_LOG` > config file
//! `log_level` > off.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable consulted when no level is given on the command line.
pub const LOG_ENV_VAR: &str = "JINK_LOG";

/// Location of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/jink_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("jink_debug.log");
    path
}

struct LogBridge {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &get_timestamp(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let mut file = self.file.lock();
        let _ = file.write_all(line.as_bytes());
        let _ = file.flush();
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_line(timestamp: &str, level: log::Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:<5}] [{}] {}\n", timestamp, level, target, msg)
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`),
/// ignoring case and surrounding whitespace.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Level from [`LOG_ENV_VAR`], if set and valid.
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
}

/// Resolve the effective level from every source, highest precedence first.
pub fn resolve_level(
    cli: Option<LevelFilter>,
    debug: bool,
    env: Option<LevelFilter>,
    config: Option<&str>,
) -> LevelFilter {
    cli.or(debug.then_some(LevelFilter::Debug))
        .or(env)
        .or_else(|| config.and_then(parse_level))
        .unwrap_or(LevelFilter::Off)
}

/// Install the log bridge. Does nothing for [`LevelFilter::Off`], if the log
/// file cannot be opened, or if a logger is already installed.
pub fn init_log_bridge(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    let path = log_path();
    let Ok(mut file) = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&path)
    else {
        // No fallback: stderr belongs to the relayed session
        return;
    };

    let _ = file.write_all(
        format!(
            "\n{}\njink debug session started at {} (level={})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            level,
            "=".repeat(80)
        )
        .as_bytes(),
    );

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        file: Mutex::new(file),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level);
    }
}
