//! Compile error types
//!
//! This module defines [`CompileError`], which represents every way a
//! compilation can fail. All errors are fatal: the first one stops the
//! compilation and nothing is emitted.
//!
//! Errors fall into three broad [`ErrorKind`]s:
//! - **Lexical**: a malformed token (bad number, illegal string character,
//!   unknown character)
//! - **Syntax**: the token stream does not fit the grammar
//! - **Semantic**: the program is well formed but uses an undeclared variable,
//!   declares a label twice, or jumps to a label that never appears

use super::lexer::{SourceLocation, TokenKind};
use std::fmt;

/// The three broad categories of compile errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "Lexical error"),
            ErrorKind::Syntax => write!(f, "Syntax error"),
            ErrorKind::Semantic => write!(f, "Semantic error"),
        }
    }
}

/// Errors that can occur while compiling a program
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Malformed token
    Lexical {
        message: String,
        location: SourceLocation,
    },

    /// The current token is not the kind the grammar requires here
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        text: String,
        location: SourceLocation,
    },

    /// A required grammar element is missing (no statement, no comparison operator, ...)
    Syntax {
        message: String,
        location: SourceLocation,
    },

    /// Variable referenced before any LET or INPUT introduced it
    UndeclaredVariable {
        name: String,
        location: SourceLocation,
    },

    /// The same label declared twice
    DuplicateLabel {
        name: String,
        location: SourceLocation,
    },

    /// GOTO to a label that is never declared; location is the first GOTO
    UndeclaredLabel {
        name: String,
        location: SourceLocation,
    },
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lexical { .. } => ErrorKind::Lexical,
            CompileError::UnexpectedToken { .. } | CompileError::Syntax { .. } => {
                ErrorKind::Syntax
            }
            CompileError::UndeclaredVariable { .. }
            | CompileError::DuplicateLabel { .. }
            | CompileError::UndeclaredLabel { .. } => ErrorKind::Semantic,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            CompileError::Lexical { location, .. }
            | CompileError::UnexpectedToken { location, .. }
            | CompileError::Syntax { location, .. }
            | CompileError::UndeclaredVariable { location, .. }
            | CompileError::DuplicateLabel { location, .. }
            | CompileError::UndeclaredLabel { location, .. } => *location,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            CompileError::Lexical { message, location } => {
                write!(
                    f,
                    "{} at line {}, column {}: {}",
                    kind, location.line, location.column, message
                )
            }
            CompileError::UnexpectedToken {
                expected,
                found,
                text,
                location,
            } => {
                let shown = if *found == TokenKind::Newline || *found == TokenKind::Eof {
                    String::new()
                } else {
                    format!(" '{}'", text)
                };
                write!(
                    f,
                    "{} at line {}: expected {}, found {}{}",
                    kind, location.line, expected, found, shown
                )
            }
            CompileError::Syntax { message, location } => {
                write!(f, "{} at line {}: {}", kind, location.line, message)
            }
            CompileError::UndeclaredVariable { name, location } => {
                write!(
                    f,
                    "{} at line {}: variable '{}' referenced before assignment",
                    kind, location.line, name
                )
            }
            CompileError::DuplicateLabel { name, location } => {
                write!(
                    f,
                    "{} at line {}: label '{}' already exists",
                    kind, location.line, name
                )
            }
            CompileError::UndeclaredLabel { name, location } => {
                write!(
                    f,
                    "{} at line {}: GOTO to undeclared label '{}'",
                    kind, location.line, name
                )
            }
        }
    }
}

impl std::error::Error for CompileError {}
