//! Graph model for undirected multigraphs.
//!
//! This module provides the in-memory representation of the analyzed graph.
//! The [`AdjacencyMatrix`] holds edge multiplicities between vertex pairs and
//! doubles as the ledger of which edges are still available while a circuit
//! is being built.

mod adjacency;
mod types;
mod validate;

pub use adjacency::AdjacencyMatrix;
pub use types::*;
pub use validate::validate_matrix;
