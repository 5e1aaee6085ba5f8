//! # Introduction
//!
//! tinybasc translates a small structured BASIC into a single C source file
//! in one pass.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser (+ checks) → Emitter → C text
//! ```
//!
//! 1. [`compiler`] — lexer, fused parser/code generator and output buffers.
//! 2. [`ui`] — ratatui viewer showing source and generated C side by side;
//!    not part of the stable library API.
//!
//! ```
//! let c = tinybasc::compile("LET x = 5\nPRINT x\n").unwrap();
//! assert!(c.starts_with("#include <stdio.h>\n"));
//! ```

pub mod compiler;
pub mod ui;

pub use compiler::errors::{CompileError, ErrorKind};

use compiler::emitter::Emitter;
use compiler::lexer::Lexer;
use compiler::parser::Parser;

/// Compile a whole program and return the C translation unit.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let mut parser = Parser::new(Lexer::new(source), Emitter::new())?;
    parser.program()?;
    Ok(parser.into_emitter().finalize())
}
