//! Escape-aware rendering pipeline for jink.
//!
//! This crate provides:
//!
//! - Escape-sequence segmentation and stripping ([`ansi`])
//! - The content sniffer that gates the non-forced path
//! - [`Theme`]: token kind to escape-sequence mapping
//! - [`Highlighter`]: the thread-safe rendering pipeline

pub mod ansi;
pub mod highlighter;
pub mod sniffer;
pub mod theme;

// Re-export main types for convenience
pub use ansi::Segment;
pub use highlighter::{Highlighter, highlight};
pub use sniffer::looks_like_device_text;
pub use theme::Theme;

// Crates the pipeline is built from, for callers that need their types
pub use jink_config;
pub use jink_lexer;
