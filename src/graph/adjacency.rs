//! Adjacency matrix storage.

use super::types::{VertexDegree, VertexId};
use crate::error::{EulerError, Result};

/// Square matrix of edge multiplicities between vertex pairs.
///
/// Cell `(v, u)` holds the number of parallel edges between `v` and `u`. For
/// an undirected multigraph the matrix is symmetric; see
/// [`validate_matrix`](super::validate_matrix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Edge multiplicities (row-major)
    cells: Vec<usize>,
    /// Number of vertices
    size: usize,
}

impl AdjacencyMatrix {
    /// Create a matrix of `size` vertices without edges.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size * size],
            size,
        }
    }

    /// Build a matrix from its rows.
    ///
    /// Fails when there are no rows or when a row's width differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EulerError::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(EulerError::NonSquareMatrix {
                    row: idx + 1,
                    expected: size,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self { cells, size })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Iterate over all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.size).map(VertexId)
    }

    /// Number of parallel edges between `v` and `u`.
    pub fn multiplicity(&self, v: VertexId, u: VertexId) -> usize {
        self.cells[self.offset(v, u)]
    }

    /// Check if at least one edge joins `v` and `u`.
    pub fn has_edge(&self, v: VertexId, u: VertexId) -> bool {
        self.multiplicity(v, u) > 0
    }

    /// Add `count` parallel edges between `v` and `u` (both directions).
    ///
    /// A loop puts both of its endpoints in the diagonal cell, so each loop
    /// adds 2 there.
    pub fn add_edges(&mut self, v: VertexId, u: VertexId, count: usize) {
        let forward = self.offset(v, u);
        self.cells[forward] += count;
        let backward = self.offset(u, v);
        self.cells[backward] += count;
    }

    /// Remove one edge between `v` and `u` from both directions.
    ///
    /// For a loop both directions are the diagonal cell, which drops by 2.
    ///
    /// # Panics
    ///
    /// Panics when no edge is left between `v` and `u`. Callers only consume
    /// edges they have just seen, so this marks a bookkeeping bug that would
    /// otherwise corrupt the circuit.
    pub fn consume_edge(&mut self, v: VertexId, u: VertexId) {
        let forward = self.offset(v, u);
        assert!(
            self.cells[forward] > 0,
            "consumed edge ({}, {}) that has no remaining multiplicity",
            v,
            u
        );
        self.cells[forward] -= 1;

        let backward = self.offset(u, v);
        assert!(
            self.cells[backward] > 0,
            "reverse edge ({}, {}) has no remaining multiplicity",
            u,
            v
        );
        self.cells[backward] -= 1;
    }

    /// Get row `v` as a slice.
    pub fn row(&self, v: VertexId) -> &[usize] {
        let start = v.0 * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // chunks_exact(0) panics; a matrix built by `new(0)` has no rows anyway
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Sum of row `v`: the number of edge endpoints at `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.row(v).iter().sum()
    }

    /// Degree of every vertex, in index order.
    pub fn degrees(&self) -> Vec<VertexDegree> {
        self.vertices()
            .map(|vertex| VertexDegree {
                vertex,
                degree: self.degree(vertex),
            })
            .collect()
    }

    /// Sum of all cells, i.e. twice the number of edges.
    pub fn total_multiplicity(&self) -> usize {
        self.cells.iter().sum()
    }

    /// Number of undirected edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.total_multiplicity() / 2
    }

    fn offset(&self, v: VertexId, u: VertexId) -> usize {
        debug_assert!(v.0 < self.size && u.0 < self.size, "vertex out of range");
        v.0 * self.size + u.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            AdjacencyMatrix::from_rows(Vec::new()),
            Err(EulerError::EmptyMatrix)
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1]]);
        assert!(matches!(
            result,
            Err(EulerError::NonSquareMatrix {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_degrees() {
        let matrix = AdjacencyMatrix::from_rows(vec![vec![0, 2, 1], vec![2, 0, 0], vec![1, 0, 0]])
            .unwrap();
        assert_eq!(matrix.vertex_count(), 3);
        assert_eq!(matrix.degree(VertexId(0)), 3);
        assert_eq!(matrix.degree(VertexId(1)), 2);
        assert_eq!(matrix.degree(VertexId(2)), 1);
        assert_eq!(matrix.total_multiplicity(), 6);
        assert_eq!(matrix.edge_count(), 3);
    }

    #[test]
    fn test_consume_edge_decrements_both_directions() {
        let mut matrix = triangle();
        assert!(matrix.has_edge(VertexId(0), VertexId(2)));

        matrix.consume_edge(VertexId(0), VertexId(2));

        assert!(!matrix.has_edge(VertexId(0), VertexId(2)));
        assert!(!matrix.has_edge(VertexId(2), VertexId(0)));
        assert!(matrix.has_edge(VertexId(0), VertexId(1)));
        assert_eq!(matrix.edge_count(), 2);
    }

    #[test]
    fn test_consume_parallel_edges() {
        let mut matrix = AdjacencyMatrix::new(2);
        matrix.add_edges(VertexId(0), VertexId(1), 2);
        matrix.consume_edge(VertexId(1), VertexId(0));
        assert_eq!(matrix.multiplicity(VertexId(0), VertexId(1)), 1);
        assert_eq!(matrix.multiplicity(VertexId(1), VertexId(0)), 1);
    }

    #[test]
    fn test_consume_loop_takes_both_endpoints() {
        let mut matrix = AdjacencyMatrix::new(2);
        matrix.add_edges(VertexId(1), VertexId(1), 2);
        assert_eq!(matrix.multiplicity(VertexId(1), VertexId(1)), 4);
        assert_eq!(matrix.degree(VertexId(1)), 4);
        assert_eq!(matrix.edge_count(), 2);

        matrix.consume_edge(VertexId(1), VertexId(1));
        assert_eq!(matrix.multiplicity(VertexId(1), VertexId(1)), 2);
        assert_eq!(matrix.edge_count(), 1);

        matrix.consume_edge(VertexId(1), VertexId(1));
        assert_eq!(matrix.total_multiplicity(), 0);
    }

    #[test]
    #[should_panic(expected = "no remaining multiplicity")]
    fn test_consume_half_loop_panics() {
        let mut matrix = AdjacencyMatrix::from_rows(vec![vec![1]]).unwrap();
        matrix.consume_edge(VertexId(0), VertexId(0));
    }

    #[test]
    #[should_panic(expected = "no remaining multiplicity")]
    fn test_consume_missing_edge_panics() {
        let mut matrix = triangle();
        matrix.consume_edge(VertexId(0), VertexId(1));
        matrix.consume_edge(VertexId(1), VertexId(0));
    }

    #[test]
    fn test_rows_iterate_in_order() {
        let matrix = triangle();
        let rows: Vec<&[usize]> = matrix.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[1, 0, 1]);
        assert_eq!(matrix.row(VertexId(2)), &[1, 1, 0]);
    }
}
