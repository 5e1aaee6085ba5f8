//! BASIC to C compiler core
//!
//! The pipeline is a single pass with no syntax tree:
//! - [`lexer`]: source text → tokens, pulled one at a time
//! - [`parser`]: recursive descent over the tokens; each rule writes its C
//!   translation as soon as it matches (`statements` and `expressions` hold
//!   the rules themselves)
//! - [`emitter`]: header and body text buffers joined at the end
//! - [`errors`]: the single [`errors::CompileError`] type shared by all stages
//!
//! # Supported language
//!
//! Statements: `PRINT`, `IF ... THEN ... ENDIF`, `WHILE ... REPEAT ... ENDWHILE`,
//! `LABEL`, `GOTO`, `LET`, `INPUT`. Every value is a float. Expressions use
//! `+ - * /` with unary sign; conditions use `== != < <= > >=`.

pub mod emitter;
pub mod errors;
pub mod lexer;
pub mod parser;

mod expressions;
mod statements;
