//! Pseudo-terminal plumbing: raw mode, resize propagation and the input relay.

use crate::error::TerminalError;
use parking_lot::Mutex;
use portable_pty::{MasterPty, PtySize};
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Shared handle to the master side, used for resizing.
pub type SharedMaster = Arc<Mutex<Box<dyn MasterPty + Send>>>;

/// Size of the controlling terminal, or 80x24 if it cannot be queried.
pub fn terminal_size() -> PtySize {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    PtySize {
        rows,
        cols,
        pixel_width: 0,
        pixel_height: 0,
    }
}

/// Copy the controlling terminal's size onto the pseudo-terminal.
pub fn apply_terminal_size(master: &SharedMaster) {
    let size = terminal_size();
    let (cols, rows) = (size.cols, size.rows);
    if let Err(e) = master.lock().resize(size) {
        log::debug!("Error resizing pty to {}x{}: {}", cols, rows, e);
    }
}

/// Keeps the controlling terminal in raw mode until dropped.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> Result<Self, TerminalError> {
        crossterm::terminal::enable_raw_mode().map_err(TerminalError::RawMode)?;
        log::debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match crossterm::terminal::disable_raw_mode() {
            Ok(()) => log::debug!("Raw mode disabled"),
            Err(e) => log::debug!("Error restoring terminal: {}", e),
        }
    }
}

/// Background task that resizes the pseudo-terminal on `SIGWINCH`.
#[derive(Debug)]
pub struct ResizeWatcher {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ResizeWatcher {
    /// Start watching. Must be called from within a tokio runtime.
    pub fn spawn(master: SharedMaster) -> Self {
        let (shutdown, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(watch_resize(master, shutdown_rx));
        Self { shutdown, task }
    }

    /// Unsubscribe from resize signals and wait for the task to exit.
    pub async fn shutdown(self) {
        // The task may already have exited if the signal could not be registered
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            log::debug!("Resize watcher ended abnormally: {}", e);
        }
    }
}

#[cfg(unix)]
async fn watch_resize(master: SharedMaster, mut shutdown: oneshot::Receiver<()>) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut winch = match signal(SignalKind::window_change()) {
        Ok(stream) => stream,
        Err(e) => {
            log::debug!("Resize notifications unavailable: {}", e);
            return;
        }
    };

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            received = winch.recv() => {
                if received.is_none() {
                    break;
                }
                apply_terminal_size(&master);
            }
        }
    }

    drop(winch);
    log::debug!("Resize watcher stopped");
}

#[cfg(not(unix))]
async fn watch_resize(_master: SharedMaster, shutdown: oneshot::Receiver<()>) {
    let _ = shutdown.await;
}

/// Copy stdin to the child on a detached thread.
///
/// A blocking terminal read cannot be interrupted, so the thread is never
/// joined; it ends when the process exits or the pty write fails.
pub fn spawn_input_relay(mut writer: Box<dyn Write + Send>) {
    let spawned = thread::Builder::new()
        .name("jink-input".to_string())
        .spawn(move || {
            let mut stdin = io::stdin().lock();
            if let Err(e) = io::copy(&mut stdin, &mut writer) {
                log::debug!("Input relay ended: {}", e);
            }
        });
    if let Err(e) = spawned {
        log::error!("Failed to start input relay thread: {}", e);
    }
}
