//! PTY stream processor for jink.
//!
//! Wraps an interactive program (typically `ssh` to a Junos device) in a
//! pseudo-terminal and colorizes its output on the way to the real
//! terminal. Three activities run concurrently for the lifetime of the
//! child:
//!
//! - the input relay (stdin to the child) on a detached thread
//! - the output relay (child to stdout, through the highlighter) on a
//!   blocking tokio task
//! - the resize watcher, forwarding `SIGWINCH` to the pseudo-terminal
//!
//! They share only the highlighter's theme and enabled flag.

pub mod buffer;
pub mod error;
pub mod processor;
pub mod pty;

// Re-export main types for convenience
pub use buffer::OutputBuffer;
pub use error::TerminalError;
pub use processor::StreamProcessor;
pub use pty::{RawModeGuard, ResizeWatcher};
