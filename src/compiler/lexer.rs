//! Lexer (tokenizer) for BASIC source text
//!
//! The lexer is pulled one token at a time by the parser through
//! [`Lexer::next_token`]. Whitespace other than newlines is skipped, `#`
//! starts a comment that runs to the end of the line, and newlines are real
//! tokens because they terminate statements.

use super::errors::CompileError;
use std::fmt;

/// Position of a token in the source (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Newline,
    Number,
    Ident,
    String,

    // Keywords
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,

    // Operators
    Eq,       // =
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    EqEq,     // ==
    NotEq,    // !=
    Lt,       // <
    LtEq,     // <=
    Gt,       // >
    GtEq,     // >=
}

impl TokenKind {
    /// Map an identifier spelling to its keyword kind, if it is reserved.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "LABEL" => TokenKind::Label,
            "GOTO" => TokenKind::Goto,
            "PRINT" => TokenKind::Print,
            "INPUT" => TokenKind::Input,
            "LET" => TokenKind::Let,
            "IF" => TokenKind::If,
            "THEN" => TokenKind::Then,
            "ENDIF" => TokenKind::EndIf,
            "WHILE" => TokenKind::While,
            "REPEAT" => TokenKind::Repeat,
            "ENDWHILE" => TokenKind::EndWhile,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Label => "LABEL",
            TokenKind::Goto => "GOTO",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::EndIf => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::Eq => "EQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
        };
        f.write_str(name)
    }
}

/// A single token: its kind, the literal text and where it starts.
///
/// String tokens carry the text between the quotes; EOF carries empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

/// Lexer for BASIC source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Return the next token, or an EOF token once input is exhausted.
    ///
    /// Calling this again after EOF keeps returning EOF.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_whitespace_and_comments();

        let loc = self.current_location();
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::Eof, "", loc)),
        };

        match ch {
            '\n' => Ok(Token::new(TokenKind::Newline, "\n", loc)),
            '"' => self.string_literal(loc),
            '0'..='9' => self.number_literal(ch, loc),
            'a'..='z' | 'A'..='Z' => Ok(self.identifier_or_keyword(ch, loc)),

            '+' => Ok(Token::new(TokenKind::Plus, "+", loc)),
            '-' => Ok(Token::new(TokenKind::Minus, "-", loc)),
            '*' => Ok(Token::new(TokenKind::Asterisk, "*", loc)),
            '/' => Ok(Token::new(TokenKind::Slash, "/", loc)),
            '=' => Ok(self.with_optional_eq(TokenKind::Eq, TokenKind::EqEq, '=', loc)),
            '<' => Ok(self.with_optional_eq(TokenKind::Lt, TokenKind::LtEq, '<', loc)),
            '>' => Ok(self.with_optional_eq(TokenKind::Gt, TokenKind::GtEq, '>', loc)),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenKind::NotEq, "!=", loc))
                } else {
                    Err(CompileError::Lexical {
                        message: "Expected '!=', got '!'".to_string(),
                        location: loc,
                    })
                }
            }

            _ => Err(CompileError::Lexical {
                message: format!("Unexpected character: '{}'", ch.escape_debug()),
                location: loc,
            }),
        }
    }

    /// `=`, `<`, `>` each have a two-character form ending in `=`.
    fn with_optional_eq(
        &mut self,
        single: TokenKind,
        double: TokenKind,
        first: char,
        loc: SourceLocation,
    ) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            Token::new(double, format!("{}=", first), loc)
        } else {
            Token::new(single, first.to_string(), loc)
        }
    }

    /// Parse string literal. The opening quote is already consumed.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, CompileError> {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance(); // closing quote
                    return Ok(Token::new(TokenKind::String, string, loc));
                }
                // These would break the generated printf format string.
                '\r' | '\n' | '\t' | '\\' | '%' => {
                    return Err(CompileError::Lexical {
                        message: format!(
                            "Illegal character in string: '{}'",
                            ch.escape_debug()
                        ),
                        location: self.current_location(),
                    });
                }
                _ => {
                    string.push(ch);
                    self.advance();
                }
            }
        }

        Err(CompileError::Lexical {
            message: "Unterminated string literal".to_string(),
            location: loc,
        })
    }

    /// Parse numeric literal: digits, optionally `.` and more digits.
    fn number_literal(
        &mut self,
        first_digit: char,
        loc: SourceLocation,
    ) -> Result<Token, CompileError> {
        let mut num_str = String::new();
        num_str.push(first_digit);
        self.take_digits(&mut num_str);

        if self.peek() == Some('.') {
            num_str.push('.');
            self.advance();

            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(CompileError::Lexical {
                    message: format!("Malformed number: '{}'", num_str),
                    location: loc,
                });
            }
            self.take_digits(&mut num_str);

            if self.peek() == Some('.') {
                num_str.push('.');
                self.advance();
                self.take_digits(&mut num_str);
                return Err(CompileError::Lexical {
                    message: format!("Malformed number: '{}'", num_str),
                    location: loc,
                });
            }
        }

        Ok(Token::new(TokenKind::Number, num_str, loc))
    }

    fn take_digits(&mut self, buf: &mut String) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            buf.push(ch);
            self.advance();
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match TokenKind::keyword(&ident) {
            Some(kind) => Token::new(kind, ident, loc),
            None => Token::new(TokenKind::Ident, ident, loc),
        }
    }

    /// Skip blanks and `#` comments, stopping in front of a newline.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') => {
                    self.advance();
                }
                Some('#') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::errors::ErrorKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            kinds.push(token.kind);
            if token.kind == TokenKind::Eof {
                return kinds;
            }
        }
    }

    fn lex_error(source: &str) -> CompileError {
        let mut lexer = Lexer::new(source);
        loop {
            match lexer.next_token() {
                Ok(token) if token.kind == TokenKind::Eof => {
                    panic!("Expected lexical error for {:?}", source)
                }
                Ok(_) => continue,
                Err(e) => return e,
            }
        }
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            kinds("LET x = 5\n"),
            vec![
                TokenKind::Let,
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * / = == != < <= > >="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Eq,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let mut lexer = Lexer::new("WHILE while ENDWHILE");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::While);
        let ident = lexer.next_token().unwrap();
        assert_eq!(ident.kind, TokenKind::Ident);
        assert_eq!(ident.text, "while");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndWhile);
    }

    #[test]
    fn test_comments_keep_newline() {
        assert_eq!(
            kinds("PRINT 1 # trailing comment\n# whole line\n"),
            vec![
                TokenKind::Print,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_literal() {
        let mut lexer = Lexer::new("\"hello world\"");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text, "hello world");
    }

    #[test]
    fn test_number_literals() {
        let mut lexer = Lexer::new("42 3.14");
        assert_eq!(lexer.next_token().unwrap().text, "42");
        assert_eq!(lexer.next_token().unwrap().text, "3.14");
    }

    #[test]
    fn test_locations() {
        let mut lexer = Lexer::new("LET a = 1\n  PRINT a");
        let tokens: Vec<Token> = (0..7).map(|_| lexer.next_token().unwrap()).collect();
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[3].location, SourceLocation::new(1, 9));
        assert_eq!(tokens[5].location, SourceLocation::new(2, 3));
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_malformed_numbers() {
        let err = lex_error("LET x = 12.3.4\n");
        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert!(err.to_string().contains("12.3.4"));

        assert_eq!(lex_error("PRINT 7.\n").kind(), ErrorKind::Lexical);
    }

    #[test]
    fn test_illegal_string_characters() {
        for source in ["\"50%\"", "\"a\\b\"", "\"tab\there\"", "\"line\nbreak\""] {
            assert_eq!(lex_error(source).kind(), ErrorKind::Lexical, "{:?}", source);
        }
        assert_eq!(lex_error("\"open").kind(), ErrorKind::Lexical);
    }

    #[test]
    fn test_unknown_character_names_line() {
        let err = lex_error("PRINT 1\nPRINT 2 ^ 3\n");
        assert_eq!(err.location(), SourceLocation::new(2, 9));
        assert!(err.to_string().contains("'^'"));
        assert!(err.to_string().contains("line 2"));

        assert_eq!(lex_error("IF a ! b").kind(), ErrorKind::Lexical);
    }
}
