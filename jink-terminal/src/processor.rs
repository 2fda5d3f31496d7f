//! The stream processor.
//!
//! Runs a child program under a pseudo-terminal and relays its output
//! through the [`Highlighter`] while the user's keystrokes and terminal
//! resizes flow the other way.

use crate::buffer::{OutputBuffer, READ_BUFFER_SIZE};
use crate::error::TerminalError;
use crate::pty::{self, RawModeGuard, ResizeWatcher};
use jink_highlight::{Highlighter, Theme};
use parking_lot::Mutex;
use portable_pty::{CommandBuilder, NativePtySystem, PtySystem};
use std::io::{self, ErrorKind, Read, Write};
use std::sync::Arc;

/// Relays a child program's output through the highlighter.
///
/// Cloning is cheap and clones share the highlighter, so theme and enabled
/// changes made through one handle are seen by a running relay.
#[derive(Debug, Clone)]
pub struct StreamProcessor {
    highlighter: Arc<Highlighter>,
    /// Log every read and every highlight call
    debug: bool,
}

impl StreamProcessor {
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            highlighter: Arc::new(highlighter),
            debug: false,
        }
    }

    /// Enable byte-level tracing of the output relay.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// When disabled, output is relayed byte for byte.
    pub fn set_enabled(&self, enabled: bool) {
        if enabled {
            self.highlighter.enable();
        } else {
            self.highlighter.disable();
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.highlighter.set_theme(theme);
    }

    /// Copy `reader` to `writer` through the highlighter until end of stream
    /// or a read error.
    ///
    /// Write errors are logged and otherwise ignored.
    pub fn relay_output<R: Read, W: Write>(&self, mut reader: R, mut writer: W) {
        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        let mut line = OutputBuffer::new();

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    // EIO is how a pty master reports that the child has exited
                    log::debug!("Output relay read ended: {}", e);
                    break;
                }
            };

            let data = &buf[..n];
            if self.debug {
                log::debug!("Read {} bytes: {:?}", n, String::from_utf8_lossy(data));
            }
            line.push(data, |chunk| self.write_output(&mut writer, chunk));
        }

        line.finish(|chunk| self.write_output(&mut writer, chunk));
    }

    fn write_output<W: Write>(&self, writer: &mut W, data: &[u8]) {
        let output = self.highlighter.highlight_bytes_forced(data);
        if self.debug {
            log::debug!(
                "Highlight: {:?} -> {:?}",
                String::from_utf8_lossy(data),
                String::from_utf8_lossy(&output)
            );
        }
        if let Err(e) = writer.write_all(&output).and_then(|()| writer.flush()) {
            log::debug!("Write error: {}", e);
        }
    }

    /// Run `program` with `args` under a pseudo-terminal until it exits.
    ///
    /// The controlling terminal is in raw mode for the duration and is
    /// restored on every return path. A non-zero exit of the child is
    /// reported as [`TerminalError::ExitStatus`].
    pub async fn run(&self, program: &str, args: &[String]) -> Result<(), TerminalError> {
        let pty_system = NativePtySystem::default();
        let pair = pty_system
            .openpty(pty::terminal_size())
            .map_err(|e| TerminalError::Pty(e.to_string()))?;

        let reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| TerminalError::Pty(e.to_string()))?;
        let writer = pair
            .master
            .take_writer()
            .map_err(|e| TerminalError::Pty(e.to_string()))?;

        // Nothing is spawned until the terminal is in raw mode
        let raw_mode = RawModeGuard::enable()?;

        let mut cmd = CommandBuilder::new(program);
        cmd.args(args);
        if let Ok(cwd) = std::env::current_dir() {
            cmd.cwd(cwd);
        }

        let mut child = pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| TerminalError::Spawn {
                program: program.to_string(),
                message: e.to_string(),
            })?;
        // The reader only sees end of stream once no slave handle is open here
        drop(pair.slave);
        log::info!("Started {} {:?} under pty", program, args);

        let master: pty::SharedMaster = Arc::new(Mutex::new(pair.master));
        let resize = ResizeWatcher::spawn(Arc::clone(&master));
        pty::apply_terminal_size(&master);

        pty::spawn_input_relay(writer);

        let relay = self.clone();
        let output =
            tokio::task::spawn_blocking(move || relay.relay_output(reader, io::stdout().lock()));
        if let Err(e) = output.await {
            log::error!("Output relay task panicked: {}", e);
        }

        resize.shutdown().await;
        let status = tokio::task::spawn_blocking(move || child.wait()).await?;
        drop(raw_mode);
        drop(master);

        let status = status.map_err(TerminalError::Wait)?;
        log::info!("{} exited with {:?}", program, status);
        if status.success() {
            Ok(())
        } else {
            Err(TerminalError::ExitStatus(status.exit_code()))
        }
    }
}

#[cfg(test)]
mod tests;
