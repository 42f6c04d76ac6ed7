//! Eulerian circuit analysis.
//!
//! This module decides whether a graph admits an Eulerian circuit and builds
//! one when it does.
//!
//! ## Classical condition
//!
//! An undirected multigraph has a closed walk using every edge exactly once
//! iff it is connected and every vertex has even degree. The analysis runs
//! both checks read-only on the caller's matrix:
//!
//! 1. [`is_connected`] - depth-first reachability from vertex 1
//! 2. [`all_vertices_even_degree`] - parity of every row sum
//!
//! Only when both pass does [`find_euler_circuit`] run Hierholzer's algorithm
//! on a private copy, consuming edges as it walks them.

mod circuit;
mod connectivity;
mod parity;

pub use circuit::{find_euler_circuit, Circuit};
pub use connectivity::{is_connected, unreached_vertices};
pub use parity::{all_vertices_even_degree, degree_report, odd_vertices};

use log::{debug, info};

use crate::graph::{AdjacencyMatrix, VertexDegree};

/// Terminal result of analyzing one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Some vertex cannot be reached from vertex 1
    Disconnected,
    /// Some vertex has odd degree; lists every vertex with its degree
    OddDegree(Vec<VertexDegree>),
    /// Both checks passed and a circuit was built
    CircuitFound(Circuit),
    /// Both checks passed but the graph has no edge to walk
    NoCircuit,
}

impl Outcome {
    /// Get the circuit, if one was found.
    pub fn circuit(&self) -> Option<&Circuit> {
        match self {
            Outcome::CircuitFound(circuit) => Some(circuit),
            _ => None,
        }
    }

    /// Check if both the connectivity and the parity check passed.
    pub fn passed_checks(&self) -> bool {
        matches!(self, Outcome::CircuitFound(_) | Outcome::NoCircuit)
    }
}

/// Analyze a graph.
///
/// Connectivity is checked first, then degree parity. The matrix is never
/// modified; circuit construction works on a clone.
pub fn analyze(matrix: &AdjacencyMatrix) -> Outcome {
    debug!(
        "Analyzing graph with {} vertices and {} edges",
        matrix.vertex_count(),
        matrix.edge_count()
    );

    if !is_connected(matrix) {
        info!(
            "Graph is disconnected; unreached vertices: {:?}",
            unreached_vertices(matrix)
                .iter()
                .map(|v| v.number())
                .collect::<Vec<_>>()
        );
        return Outcome::Disconnected;
    }

    if !all_vertices_even_degree(matrix) {
        info!(
            "Graph has {} odd-degree vertices",
            odd_vertices(matrix).len()
        );
        return Outcome::OddDegree(degree_report(matrix));
    }

    let circuit = find_euler_circuit(matrix.clone());
    if circuit.is_trivial() {
        info!("Graph has no edges; no circuit to build");
        Outcome::NoCircuit
    } else {
        info!("Found Eulerian circuit of {} edges", circuit.edge_count());
        Outcome::CircuitFound(circuit)
    }
}
