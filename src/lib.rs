//! # Euler Circuit
//!
//! Eulerian circuit detection and construction for undirected multigraphs.
//!
//! This library provides:
//! - A plain-text adjacency matrix format and its parser
//! - Connectivity and degree-parity checks
//! - Hierholzer's algorithm for building the circuit
//! - Rendering of the outcome for users (vertices numbered from 1)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`matrix`] - Parser for adjacency matrix text
//! - [`graph`] - Adjacency matrix representation and validation
//! - [`analysis`] - Connectivity, parity and circuit construction
//! - [`report`] - User-facing rendering of outcomes
//! - [`catalog`] - Matrix file selection (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! euler --dir matrices            # pick a file interactively
//! euler matrices/triangle.txt     # analyze one file
//! ```
//!
//! ### Library
//!
//! ```
//! use euler_circuit::{analysis, matrix, Outcome};
//!
//! let graph = matrix::parse("0 1 1\n1 0 1\n1 1 0").unwrap();
//! match analysis::analyze(&graph) {
//!     Outcome::CircuitFound(circuit) => assert_eq!(circuit.to_string(), "1 -> 2 -> 3 -> 1"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! ## Analysis Method
//!
//! 1. Check every vertex is reachable from vertex 1
//! 2. Check every vertex has even degree
//! 3. Walk a private copy of the matrix, consuming each edge once, and
//!    assemble the circuit from the order in which vertices run out of edges

pub mod analysis;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod report;

#[cfg(feature = "cli")]
pub mod catalog;

// Re-export main types for convenience
pub use analysis::{analyze, Circuit, Outcome};
pub use error::{EulerError, Result};
pub use graph::AdjacencyMatrix;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmEulerAnalyzer;

/// Directory scanned for matrix files when none is given
pub const DEFAULT_MATRIX_DIR: &str = "matrices";

/// Separator between vertices of a rendered circuit
pub const CIRCUIT_SEPARATOR: &str = " -> ";
