//! Lexer (tokenizer) for matrix text.

use crate::error::{EulerError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in matrix text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An integer, possibly negative
    Integer,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing matrix text.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: start_line,
                    column: start_column,
                });
            }
        };

        let token = match ch {
            '\n' => {
                self.advance();
                Token {
                    kind: TokenKind::Newline,
                    text: "\n".to_string(),
                    line: start_line,
                    column: start_column,
                }
            }
            '-' | '0'..='9' => {
                let text = self.read_integer();
                if text == "-" {
                    return Err(EulerError::lexer(
                        start_line,
                        start_column,
                        "expected digits after '-'",
                    ));
                }
                Token {
                    kind: TokenKind::Integer,
                    text,
                    line: start_line,
                    column: start_column,
                }
            }
            _ => {
                return Err(EulerError::lexer(
                    start_line,
                    start_column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        // An integer must be followed by a separator, not glued to other text.
        if token.kind == TokenKind::Integer {
            if let Some(&next) = self.chars.peek() {
                if !matches!(next, ' ' | '\t' | '\r' | '\n' | '#') {
                    return Err(EulerError::lexer(
                        self.line,
                        self.column,
                        format!("unexpected character '{}' after '{}'", next, token.text),
                    ));
                }
            }
        }

        Ok(token)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_integer(&mut self) -> String {
        let mut text = String::new();

        if let Some(&'-') = self.chars.peek() {
            text.push('-');
            self.advance();
        }

        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut kinds = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            let done = tok.kind == TokenKind::Eof;
            kinds.push(tok.kind);
            if done {
                return kinds;
            }
        }
    }

    #[test]
    fn test_lexer_basic() {
        let mut lexer = Lexer::new("0 12\t3");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Integer);
        assert_eq!(tok.text, "0");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.text, "12");
        assert_eq!(tok.column, 3);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.text, "3");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_lexer_lines_and_comments() {
        use TokenKind::*;
        assert_eq!(
            kinds("0 1 # edge\r\n1 0\n"),
            vec![Integer, Integer, Newline, Integer, Integer, Newline, Eof]
        );
    }

    #[test]
    fn test_lexer_negative() {
        let mut lexer = Lexer::new("-3");
        assert_eq!(lexer.next_token().unwrap().text, "-3");
    }

    #[test]
    fn test_lexer_rejects_letters() {
        let mut lexer = Lexer::new("0 x");
        assert_eq!(lexer.next_token().unwrap().text, "0");
        assert!(matches!(
            lexer.next_token(),
            Err(EulerError::LexerError {
                line: 1,
                column: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_lexer_rejects_glued_text() {
        let mut lexer = Lexer::new("1a");
        match lexer.next_token() {
            Err(EulerError::LexerError { line, column, .. }) => {
                assert_eq!((line, column), (1, 2));
            }
            other => panic!("expected lexer error, got {:?}", other),
        }
    }

    #[test]
    fn test_lexer_rejects_lone_minus() {
        assert!(Lexer::new("- 1").next_token().is_err());
    }
}
