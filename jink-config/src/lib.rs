//! Configuration for jink.
//!
//! This crate provides:
//!
//! - Named color palettes ([`Palette`]) and the ANSI escape helpers they use
//! - The optional YAML configuration file ([`Config`])

pub mod config;
pub mod error;
pub mod themes;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use themes::{Color, Palette, RESET, Style, available_themes, color256, rgb};
