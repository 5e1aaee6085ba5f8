//! Statement parsing and translation
//!
//! # Grammar
//!
//! ```text
//! statement ::= "PRINT" (string | expression) nl
//!             | "IF" comparison "THEN" nl { statement } "ENDIF" nl
//!             | "WHILE" comparison "REPEAT" nl { statement } "ENDWHILE" nl
//!             | "LABEL" ident nl
//!             | "GOTO" ident nl
//!             | "LET" ident "=" expression nl
//!             | "INPUT" ident nl
//! ```
//!
//! Block nesting is tracked by the recursion itself; every opening `{`
//! written here is closed by the same call that opened it.

use super::errors::CompileError;
use super::lexer::TokenKind;
use super::parser::Parser;

impl Parser {
    /// Parse and translate one statement, including its trailing newlines.
    pub(crate) fn statement(&mut self) -> Result<(), CompileError> {
        match self.cur_token.kind {
            TokenKind::Print => self.print_statement()?,
            TokenKind::If => self.if_statement()?,
            TokenKind::While => self.while_statement()?,
            TokenKind::Label => self.label_statement()?,
            TokenKind::Goto => self.goto_statement()?,
            TokenKind::Let => self.let_statement()?,
            TokenKind::Input => self.input_statement()?,
            _ => return Err(self.invalid_statement()),
        }

        self.nl()
    }

    fn invalid_statement(&self) -> CompileError {
        let token = &self.cur_token;
        let mut message = format!("Invalid statement at '{}' ({})", token.text.trim(), token.kind);
        if token.kind == TokenKind::Ident && self.check_peek(TokenKind::Eq) {
            message.push_str("; assignments start with LET");
        }
        CompileError::Syntax {
            message,
            location: token.location,
        }
    }

    fn print_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;

        if self.check(TokenKind::String) {
            let line = format!("printf(\"{}\\n\");", self.cur_token.text);
            self.emitter.emit_line(&line);
            self.next_token()
        } else {
            self.emitter.emit("printf(\"%.2f\\n\", (float)(");
            self.expression()?;
            self.emitter.emit_line("));");
            Ok(())
        }
    }

    fn if_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        self.emitter.emit("if(");
        self.comparison()?;

        self.expect(TokenKind::Then)?;
        self.nl()?;
        self.emitter.emit_line("){");

        self.block_until(TokenKind::EndIf)?;

        self.expect(TokenKind::EndIf)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    fn while_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        self.emitter.emit("while(");
        self.comparison()?;

        self.expect(TokenKind::Repeat)?;
        self.nl()?;
        self.emitter.emit_line("){");

        self.block_until(TokenKind::EndWhile)?;

        self.expect(TokenKind::EndWhile)?;
        self.emitter.emit_line("}");
        Ok(())
    }

    /// Statements up to (not including) the `end` keyword.
    fn block_until(&mut self, end: TokenKind) -> Result<(), CompileError> {
        while !self.check(end) {
            if self.check(TokenKind::Eof) {
                return Err(self.unexpected(end));
            }
            self.statement()?;
        }
        Ok(())
    }

    fn label_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let location = self.cur_token.location;
        let name = self.expect_ident()?;

        if !self.labels_declared.insert(name.clone()) {
            return Err(CompileError::DuplicateLabel { name, location });
        }

        self.emitter.emit_line(&format!("{}:", name));
        Ok(())
    }

    fn goto_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let location = self.cur_token.location;
        let name = self.expect_ident()?;

        self.emitter.emit_line(&format!("goto {};", name));
        self.labels_gotoed.entry(name).or_insert(location);
        Ok(())
    }

    fn let_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Eq)?;

        self.emitter.emit(&format!("{} = ", name));
        // The target is registered only after the right-hand side, so a
        // first LET cannot read its own (uninitialized) variable.
        self.expression()?;
        self.emitter.emit_line(";");

        self.declare(&name);
        Ok(())
    }

    fn input_statement(&mut self) -> Result<(), CompileError> {
        self.next_token()?;
        let name = self.expect_ident()?;
        self.declare(&name);

        // A failed read zeroes the variable and drops the rest of the input word.
        self.emitter
            .emit_line(&format!("if(0 == scanf(\"%f\", &{})) {{", name));
        self.emitter.emit_line(&format!("{} = 0;", name));
        self.emitter.emit_line("scanf(\"%*s\");");
        self.emitter.emit_line("}");
        Ok(())
    }

    /// First use of a variable adds it to the symbol table and declares it.
    fn declare(&mut self, name: &str) {
        if self.symbols.insert(name.to_string()) {
            self.emitter.header_line(&format!("float {};", name));
        }
    }
}
