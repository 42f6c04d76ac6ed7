//! Degree parity checks.

use crate::graph::{AdjacencyMatrix, VertexDegree, VertexId};

/// Check if every vertex has even degree.
pub fn all_vertices_even_degree(matrix: &AdjacencyMatrix) -> bool {
    matrix.rows().all(|row| row.iter().sum::<usize>() % 2 == 0)
}

/// Every vertex with its degree, in index order.
pub fn degree_report(matrix: &AdjacencyMatrix) -> Vec<VertexDegree> {
    matrix.degrees()
}

/// The vertices with odd degree, in index order.
pub fn odd_vertices(matrix: &AdjacencyMatrix) -> Vec<VertexId> {
    matrix
        .degrees()
        .into_iter()
        .filter(|entry| !entry.is_even())
        .map(|entry| entry.vertex)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<usize>>) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_triangle_is_even() {
        let graph = matrix(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        assert!(all_vertices_even_degree(&graph));
        assert!(odd_vertices(&graph).is_empty());
    }

    #[test]
    fn test_single_edge_with_isolated_vertex() {
        let graph = matrix(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        assert!(!all_vertices_even_degree(&graph));

        let report: Vec<(usize, usize)> = degree_report(&graph)
            .iter()
            .map(|entry| (entry.vertex.number(), entry.degree))
            .collect();
        assert_eq!(report, vec![(1, 1), (2, 1), (3, 0)]);
        assert_eq!(odd_vertices(&graph), vec![VertexId(0), VertexId(1)]);
    }

    #[test]
    fn test_parallel_edges_count_with_multiplicity() {
        let graph = matrix(vec![vec![0, 3], vec![3, 0]]);
        assert!(!all_vertices_even_degree(&graph));

        let graph = matrix(vec![vec![0, 4], vec![4, 0]]);
        assert!(all_vertices_even_degree(&graph));
    }

    #[test]
    fn test_check_is_idempotent() {
        let graph = matrix(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let first = all_vertices_even_degree(&graph);
        assert_eq!(first, all_vertices_even_degree(&graph));
        assert_eq!(degree_report(&graph), degree_report(&graph));
    }
}
