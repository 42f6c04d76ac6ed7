//! Core types for graph representation.

use std::fmt;

/// A vertex of the graph.
/// Stored zero-based; displayed one-based, the way users number vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// The vertex every connectivity check starts from.
    pub const ROOT: VertexId = VertexId(0);

    /// Get the raw zero-based index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Get the one-based number shown to users.
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A vertex together with its degree, as listed in parity reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDegree {
    pub vertex: VertexId,
    pub degree: usize,
}

impl VertexDegree {
    /// Check if the degree is even.
    pub fn is_even(&self) -> bool {
        self.degree % 2 == 0
    }
}
