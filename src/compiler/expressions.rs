//! Expression parsing and translation
//!
//! ```text
//! comparison ::= expression cmp_op expression { cmp_op expression }
//! expression ::= term { ("+" | "-") term }
//! term       ::= unary { ("*" | "/") unary }
//! unary      ::= [ "+" | "-" ] primary
//! primary    ::= number | ident
//! ```
//!
//! Operators are copied into the output in source order. Chained
//! comparisons such as `a == b == c` are written out exactly as they appear;
//! C then reads them as `(a == b) == c`.

use super::errors::CompileError;
use super::lexer::TokenKind;
use super::parser::Parser;

impl Parser {
    pub(crate) fn comparison(&mut self) -> Result<(), CompileError> {
        self.expression()?;

        if !self.cur_token.kind.is_comparison() {
            return Err(CompileError::Syntax {
                message: format!(
                    "Expected comparison operator at: '{}' ({})",
                    self.cur_token.text.trim(),
                    self.cur_token.kind
                ),
                location: self.cur_token.location,
            });
        }

        while self.cur_token.kind.is_comparison() {
            self.binary_operator()?;
            self.expression()?;
        }
        Ok(())
    }

    pub(crate) fn expression(&mut self) -> Result<(), CompileError> {
        self.term()?;

        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.binary_operator()?;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), CompileError> {
        self.unary()?;

        while self.check(TokenKind::Asterisk) || self.check(TokenKind::Slash) {
            self.binary_operator()?;
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<(), CompileError> {
        if self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            let sign = self.cur_token.text.clone();
            self.emitter.emit(&sign);
            self.next_token()?;
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<(), CompileError> {
        match self.cur_token.kind {
            TokenKind::Number => {
                let number = self.cur_token.text.clone();
                self.emitter.emit(&number);
                self.next_token()
            }
            TokenKind::Ident => {
                if !self.symbols.contains(&self.cur_token.text) {
                    return Err(CompileError::UndeclaredVariable {
                        name: self.cur_token.text.clone(),
                        location: self.cur_token.location,
                    });
                }
                let name = self.cur_token.text.clone();
                self.emitter.emit(&name);
                self.next_token()
            }
            _ => Err(CompileError::Syntax {
                message: format!(
                    "Unexpected token at '{}' ({}), expected a number or variable",
                    self.cur_token.text.trim(),
                    self.cur_token.kind
                ),
                location: self.cur_token.location,
            }),
        }
    }

    /// Copy the current operator, spaced so `x - -1` cannot become `x--1`.
    fn binary_operator(&mut self) -> Result<(), CompileError> {
        let op = format!(" {} ", self.cur_token.text);
        self.emitter.emit(&op);
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use crate::compile;
    use crate::compiler::errors::{CompileError, ErrorKind};

    #[test]
    fn test_operator_order_preserved() {
        let output = compile("LET a = 1\nLET b = -a + 2 * a / 4 - +3\n").unwrap();
        assert!(output.contains("b = -a + 2 * a / 4 - +3;\n"));
    }

    #[test]
    fn test_negative_operand_stays_separate() {
        let output = compile("LET a = 1\nPRINT a - -1\n").unwrap();
        assert!(output.contains("(float)(a - -1)"));
    }

    #[test]
    fn test_decimal_literal_verbatim() {
        let output = compile("LET pi = 3.14159\n").unwrap();
        assert!(output.contains("pi = 3.14159;"));
    }

    #[test]
    fn test_chained_comparison_is_positional() {
        let output = compile("LET a = 1\nLET b = 1\nIF a == b == 1 THEN\nPRINT a\nENDIF\n").unwrap();
        assert!(output.contains("if(a == b == 1){"));

        let output = compile("IF 1 < 2 >= 0 != 4 THEN\nENDIF\n").unwrap();
        assert!(output.contains("if(1 < 2 >= 0 != 4){\n}\n"));
    }

    #[test]
    fn test_comparison_requires_operator() {
        let err = compile("IF 1 + 2 THEN\nENDIF\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.to_string().contains("comparison operator"));
    }

    #[test]
    fn test_undeclared_variable() {
        let err = compile("PRINT x\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(err.to_string().contains("'x'"));
        match err {
            CompileError::UndeclaredVariable { name, location } => {
                assert_eq!(name, "x");
                assert_eq!((location.line, location.column), (1, 7));
            }
            other => panic!("Expected undeclared variable, got {:?}", other),
        }
    }

    #[test]
    fn test_declared_later_is_still_an_error() {
        let err = compile("PRINT y\nLET y = 1\n").unwrap_err();
        assert!(matches!(err, CompileError::UndeclaredVariable { .. }));
    }

    #[test]
    fn test_missing_operand() {
        let err = compile("LET a = 1 +\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.to_string().contains("NEWLINE"));
    }
}
