//! Parser for adjacency matrix text files.
//!
//! A matrix file holds one row per line, each row a whitespace-separated list
//! of non-negative integers. Row `i`, column `j` is the number of edges
//! between vertex `i` and vertex `j`.
//!
//! # Grammar Overview
//!
//! ```text
//! matrix  = { line }
//! line    = [ row ] [ comment ] newline
//! row     = integer { integer }
//! comment = '#' { any_char }
//! integer = ['-'] digit+
//! ```
//!
//! Negative integers are tokenized so they can be reported precisely, then
//! rejected by the parser. Blank and comment-only lines are skipped.
//!
//! # Example
//!
//! ```text
//! # Triangle
//! 0 1 1
//! 1 0 1
//! 1 1 0
//! ```

mod lexer;
mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;
use crate::graph::{validate_matrix, AdjacencyMatrix};

/// Parse matrix text into a validated adjacency matrix.
pub fn parse(input: &str) -> Result<AdjacencyMatrix> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    let matrix = parser.parse()?;
    validate_matrix(&matrix)?;
    Ok(matrix)
}

/// Parse a matrix file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<AdjacencyMatrix> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::EulerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
