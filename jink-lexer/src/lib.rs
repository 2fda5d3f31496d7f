//! Tokenizer for Junos configuration, command output and CLI prompts.
//!
//! This crate provides the classification half of jink:
//!
//! - Token kinds and the borrowed [`Token`] type
//! - Vocabulary tables (commands, sections, protocols, states, headers)
//! - The ordered structural pattern cascade
//! - CLI prompt recognition and decomposition
//! - Parse-mode detection (configuration vs. command output)
//! - The [`Lexer`] itself

pub mod keywords;
pub mod lexer;
pub mod mode;
pub mod patterns;
pub mod prompt;
pub mod token;

// Re-export main types for convenience
pub use lexer::{Lexer, tokenize};
pub use mode::{ParseMode, detect_parse_mode};
pub use prompt::{is_prompt, looks_like_prompt, tokenize_prompt};
pub use token::{Token, TokenKind};
