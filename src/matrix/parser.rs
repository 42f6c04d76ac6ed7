//! Parser for matrix text.

use log::debug;

use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{EulerError, Result};
use crate::graph::AdjacencyMatrix;

/// Parser for matrix text.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire matrix.
    ///
    /// Checks the matrix is square but not that it is symmetric; see
    /// [`validate_matrix`](crate::graph::validate_matrix).
    pub fn parse(&mut self) -> Result<AdjacencyMatrix> {
        let mut rows = Vec::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            rows.push(self.parse_row()?);
        }

        debug!("Parsed {} matrix rows", rows.len());
        AdjacencyMatrix::from_rows(rows)
    }

    fn parse_row(&mut self) -> Result<Vec<usize>> {
        let mut row = Vec::new();

        while self.current.kind == TokenKind::Integer {
            row.push(self.parse_multiplicity()?);
            self.advance()?;
        }

        // Consume newline or EOF
        if self.current.kind == TokenKind::Newline {
            self.advance()?;
        }

        Ok(row)
    }

    fn parse_multiplicity(&self) -> Result<usize> {
        let token = &self.current;
        let value: i64 = token.text.parse().map_err(|_| {
            EulerError::parse(token.line, format!("integer out of range: {}", token.text))
        })?;

        if value < 0 {
            return Err(EulerError::NegativeMultiplicity {
                line: token.line,
                column: token.column,
                value,
            });
        }

        usize::try_from(value).map_err(|_| {
            EulerError::parse(token.line, format!("integer out of range: {}", token.text))
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }
}
