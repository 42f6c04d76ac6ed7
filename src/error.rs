//! Error types for the Eulerian circuit analyzer.
//!
//! This module provides a unified error type [`EulerError`] that covers
//! every way the input boundary can reject a run: reading files, choosing a
//! matrix from a directory, tokenizing and validating the matrix text.
//!
//! Analytical negatives (a disconnected graph, odd-degree vertices, a graph
//! without edges) are not errors. They are reported through
//! [`Outcome`](crate::analysis::Outcome).

use thiserror::Error;

/// Result type alias using [`EulerError`].
pub type Result<T> = std::result::Result<T, EulerError>;

/// Unified error type for all analyzer operations.
#[derive(Error, Debug)]
pub enum EulerError {
    // ============ Matrix Text Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// An edge multiplicity below zero
    #[error("Negative edge multiplicity {value} at line {line}, column {column}")]
    NegativeMultiplicity {
        line: usize,
        column: usize,
        value: i64,
    },

    // ============ Matrix Validation Errors ============
    /// The input contained no rows at all
    #[error("Adjacency matrix is empty")]
    EmptyMatrix,

    /// A row whose width differs from the number of rows
    #[error("Adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell (row, column) differs from cell (column, row); positions are 1-based
    #[error("Adjacency matrix is not symmetric: entry ({row}, {column}) is {forward} but ({column}, {row}) is {backward}")]
    AsymmetricMatrix {
        row: usize,
        column: usize,
        forward: usize,
        backward: usize,
    },

    /// A diagonal cell that does not hold whole loops; the vertex is 1-based
    #[error("Diagonal entry ({vertex}, {vertex}) is {value}, but each loop adds 2 to it")]
    OddLoopMultiplicity { vertex: usize, value: usize },

    // ============ I/O Errors ============
    /// Error reading a matrix file
    #[error("Failed to read matrix file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error listing the matrix directory
    #[error("Failed to read matrix directory '{path}': {source}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ Selection Errors ============
    /// The matrix directory holds no `.txt` files
    #[error("No .txt files found in directory '{dir}'")]
    NoMatrixFiles { dir: String },

    /// The user's choice is not a number in `1..=available`
    #[error("Invalid selection '{input}': expected a number between 1 and {available}")]
    InvalidSelection { input: String, available: usize },

    /// Error reading the user's choice
    #[error("Failed to read selection: {source}")]
    SelectionInputError {
        #[source]
        source: std::io::Error,
    },
}

impl EulerError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid selection error
    pub fn invalid_selection(input: impl Into<String>, available: usize) -> Self {
        Self::InvalidSelection {
            input: input.into(),
            available,
        }
    }
}
