//! Eulerian circuit construction (Hierholzer's algorithm).

use std::fmt;

use log::{debug, trace};

use crate::graph::{AdjacencyMatrix, VertexId};
use crate::CIRCUIT_SEPARATOR;

/// An ordered sequence of vertices walked by the circuit finder.
///
/// A real circuit has at least two entries and starts and ends at the same
/// vertex. A single entry is the finder's fallback for a graph without edges
/// and is not a circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    vertices: Vec<VertexId>,
}

impl Circuit {
    /// Wrap a vertex sequence.
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// The vertices in walk order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// One-based vertex numbers in walk order.
    pub fn numbers(&self) -> Vec<usize> {
        self.vertices.iter().map(VertexId::number).collect()
    }

    /// Number of vertices in the sequence.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the sequence holds no vertex at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if this is the no-edge fallback rather than a walk.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() < 2
    }

    /// Check if the walk returns to its first vertex.
    pub fn is_closed(&self) -> bool {
        !self.is_trivial() && self.vertices.first() == self.vertices.last()
    }

    /// Number of edges walked.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consecutive vertex pairs, one per walked edge.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, vertex) in self.vertices.iter().enumerate() {
            if idx > 0 {
                f.write_str(CIRCUIT_SEPARATOR)?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

/// Build an Eulerian circuit, consuming every edge of `matrix`.
///
/// The caller must ensure the graph is connected and every vertex has even
/// degree; this is not re-checked. The walk starts at the lowest vertex with
/// an edge. From each vertex, neighbors are tried in increasing index order
/// and every parallel edge to a neighbor is exhausted before moving on to the
/// next. Vertices are recorded once exhausted and the record is reversed at
/// the end.
///
/// A graph without edges yields the single-vertex fallback `[1]`, which
/// [`Circuit::is_trivial`] reports.
pub fn find_euler_circuit(mut matrix: AdjacencyMatrix) -> Circuit {
    let n = matrix.vertex_count();
    let start = match matrix.vertices().find(|&v| matrix.degree(v) > 0) {
        Some(start) => start,
        None => {
            debug!("No vertex carries an edge");
            return Circuit::new(vec![VertexId::ROOT]);
        }
    };
    debug!("Starting circuit at vertex {}", start);

    let mut path = Vec::with_capacity(matrix.edge_count() + 1);
    // Each frame is a vertex and the lowest neighbor that may still have edges.
    let mut stack = vec![(start, 0usize)];

    while let Some((v, cursor)) = stack.last_mut() {
        let v = *v;
        let next = (*cursor..n).find(|&u| matrix.has_edge(v, VertexId(u)));
        match next {
            Some(u) => {
                // Stay on `u`: parallel edges to it are taken before the next neighbor.
                *cursor = u;
                let u = VertexId(u);
                matrix.consume_edge(v, u);
                trace!("Walked edge {} - {}", v, u);
                stack.push((u, 0));
            }
            None => {
                stack.pop();
                path.push(v);
            }
        }
    }

    path.reverse();
    Circuit::new(path)
}
