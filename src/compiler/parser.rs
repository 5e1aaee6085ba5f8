//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its lookahead helpers and the
//! top-level `program` rule.
//!
//! # Parser Architecture
//!
//! Parsing and code generation are fused: every grammar rule writes its C
//! translation into the [`Emitter`] as soon as it has matched, so there is no
//! syntax tree. The rules are split across files using `impl Parser` blocks:
//! - This module: Parser state, token helpers, `program` and the final label check
//! - `statements`: PRINT, IF, WHILE, LABEL, GOTO, LET, INPUT
//! - `expressions`: comparison, expression, term, unary, primary
//!
//! The parser owns the symbol table and both label sets for the lifetime of
//! one compilation.

use super::emitter::Emitter;
use super::errors::CompileError;
use super::lexer::{Lexer, SourceLocation, Token, TokenKind};
use rustc_hash::{FxHashMap, FxHashSet};

/// Lines written to the header before any declaration
pub const PREAMBLE: [&str; 2] = ["#include <stdio.h>", "int main(void){"];

/// Lines closing the body
pub const EPILOGUE: [&str; 2] = ["return 0;", "}"];

/// Recursive descent parser and code generator
pub struct Parser {
    lexer: Lexer,
    pub(crate) emitter: Emitter,

    /// Variables introduced by LET or INPUT so far
    pub(crate) symbols: FxHashSet<String>,
    pub(crate) labels_declared: FxHashSet<String>,
    /// Every GOTO target, with the location of its first GOTO
    pub(crate) labels_gotoed: FxHashMap<String, SourceLocation>,

    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
}

impl Parser {
    /// Create a parser, priming the current and peek tokens.
    pub fn new(mut lexer: Lexer, emitter: Emitter) -> Result<Self, CompileError> {
        let cur_token = lexer.next_token()?;
        let peek_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            emitter,
            symbols: FxHashSet::default(),
            labels_declared: FxHashSet::default(),
            labels_gotoed: FxHashMap::default(),
            cur_token,
            peek_token,
        })
    }

    /// program ::= { newline } { statement } EOF
    pub fn program(&mut self) -> Result<(), CompileError> {
        for line in PREAMBLE {
            self.emitter.header_line(line);
        }

        while self.check(TokenKind::Newline) {
            self.next_token()?;
        }

        while !self.check(TokenKind::Eof) {
            self.statement()?;
        }

        for line in EPILOGUE {
            self.emitter.emit_line(line);
        }

        self.check_gotos()
    }

    /// Hand back the emitter once `program` has succeeded.
    pub fn into_emitter(self) -> Emitter {
        self.emitter
    }

    /// Every GOTO target must have been declared somewhere in the program.
    fn check_gotos(&self) -> Result<(), CompileError> {
        let missing = self
            .labels_gotoed
            .iter()
            .filter(|(name, _)| !self.labels_declared.contains(name.as_str()))
            .min_by_key(|(_, location)| **location);

        match missing {
            Some((name, location)) => Err(CompileError::UndeclaredLabel {
                name: name.clone(),
                location: *location,
            }),
            None => Ok(()),
        }
    }

    /// nl ::= NEWLINE { NEWLINE }
    pub(crate) fn nl(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Newline)?;
        while self.check(TokenKind::Newline) {
            self.next_token()?;
        }
        Ok(())
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub(crate) fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Require the current token to be `kind` and advance past it.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if !self.check(kind) {
            return Err(self.unexpected(kind));
        }
        self.next_token()
    }

    /// Require an identifier and return its name.
    pub(crate) fn expect_ident(&mut self) -> Result<String, CompileError> {
        if !self.check(TokenKind::Ident) {
            return Err(self.unexpected(TokenKind::Ident));
        }
        let name = self.cur_token.text.clone();
        self.next_token()?;
        Ok(name)
    }

    pub(crate) fn unexpected(&self, expected: TokenKind) -> CompileError {
        CompileError::UnexpectedToken {
            expected,
            found: self.cur_token.kind,
            text: self.cur_token.text.clone(),
            location: self.cur_token.location,
        }
    }

    /// Shift the lookahead window by one token.
    pub(crate) fn next_token(&mut self) -> Result<(), CompileError> {
        let next = self.lexer.next_token()?;
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::errors::ErrorKind;

    fn compile(source: &str) -> Result<String, CompileError> {
        let mut parser = Parser::new(Lexer::new(source), Emitter::new())?;
        parser.program()?;
        Ok(parser.into_emitter().finalize())
    }

    #[test]
    fn test_empty_program() {
        let output = compile("").unwrap();
        assert_eq!(
            output,
            "#include <stdio.h>\nint main(void){\nreturn 0;\n}\n"
        );
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let output = compile("\n\n\nPRINT \"x\"\n\n\n").unwrap();
        assert!(output.contains("printf(\"x\\n\");"));
    }

    #[test]
    fn test_let_then_print() {
        let output = compile("LET x = 5\nPRINT x\n").unwrap();
        assert_eq!(
            output,
            "#include <stdio.h>\n\
             int main(void){\n\
             float x;\n\
             x = 5;\n\
             printf(\"%.2f\\n\", (float)(x));\n\
             return 0;\n\
             }\n"
        );
    }

    #[test]
    fn test_forward_goto_is_allowed() {
        let output = compile("GOTO done\nPRINT \"skipped\"\nLABEL done\n").unwrap();
        assert!(output.contains("goto done;\n"));
        assert!(output.contains("done:\n"));
    }

    #[test]
    fn test_goto_to_missing_label() {
        let err = compile("LABEL a\nGOTO b\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(matches!(err, CompileError::UndeclaredLabel { ref name, .. } if name == "b"));
    }

    #[test]
    fn test_earliest_missing_label_reported() {
        let err = compile("GOTO zed\nGOTO alpha\nGOTO zed\n").unwrap_err();
        match err {
            CompileError::UndeclaredLabel { name, location } => {
                assert_eq!(name, "zed");
                assert_eq!(location.line, 1);
            }
            other => panic!("Expected undeclared label, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_needs_newline() {
        let err = compile("PRINT 1").unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnexpectedToken {
                expected: TokenKind::Newline,
                found: TokenKind::Eof,
                ..
            }
        ));
    }

    #[test]
    fn test_lexical_error_in_lookahead_stops_compilation() {
        let err = compile("PRINT 1\nPRINT $\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lexical);
    }
}
