//! Error types for walletledger-parser

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Syntax error at {location}: {message}")]
    SyntaxError {
        location: String,
        message: String,
    },

    #[error("Unsupported directive at {location}: {directive_type}")]
    UnsupportedDirective {
        location: String,
        directive_type: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl ParseError {
    /// Build a syntax error pointing at a 1-indexed line of an optional source file
    pub fn syntax(source: Option<&str>, line: usize, message: impl Into<String>) -> Self {
        ParseError::SyntaxError {
            location: location(source, line),
            message: message.into(),
        }
    }
}

/// Render `file:line`, or `line N` when there is no file
pub fn location(source: Option<&str>, line: usize) -> String {
    match source {
        Some(path) => format!("{}:{}", path, line),
        None => format!("line {}", line),
    }
}
