// Library exports for the jink binaries and their tests
//
// # Concurrency
//
// The only shared mutable state is the highlighter's theme and enabled flag
// (`parking_lot::RwLock` inside `jink_highlight::Highlighter`). The lock is
// held only to copy that state out, never across I/O or rendering. The log
// bridge file sits behind its own `parking_lot::Mutex`.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod pipe;

// Re-export the workspace crates so the binaries need one import path
pub use jink_config as config;
pub use jink_highlight as highlight;
pub use jink_lexer as lexer;
pub use jink_terminal as terminal;
