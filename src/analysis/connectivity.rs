//! Reachability from the root vertex.

use log::trace;

use crate::graph::{AdjacencyMatrix, VertexId};

/// Check if every vertex is reachable from vertex 1 (index 0).
///
/// The walk always starts at the root, even when the root has no edges. A
/// graph whose only isolated vertex is the root is therefore disconnected,
/// although all edge-carrying vertices may reach each other.
pub fn is_connected(matrix: &AdjacencyMatrix) -> bool {
    visit_from_root(matrix).iter().all(|&visited| visited)
}

/// List the vertices the root cannot reach, in index order.
pub fn unreached_vertices(matrix: &AdjacencyMatrix) -> Vec<VertexId> {
    visit_from_root(matrix)
        .iter()
        .enumerate()
        .filter(|&(_, &visited)| !visited)
        .map(|(idx, _)| VertexId(idx))
        .collect()
}

/// Depth-first walk from the root, visiting neighbors in index order.
///
/// Each stack frame holds a vertex and the next neighbor index to examine,
/// so the visit order matches the recursive formulation.
fn visit_from_root(matrix: &AdjacencyMatrix) -> Vec<bool> {
    let n = matrix.vertex_count();
    let mut visited = vec![false; n];
    if n == 0 {
        return visited;
    }

    visited[VertexId::ROOT.index()] = true;
    let mut stack = vec![(VertexId::ROOT, 0usize)];

    while let Some((v, cursor)) = stack.last_mut() {
        let v = *v;
        let next = (*cursor..n).find(|&u| !visited[u] && matrix.has_edge(v, VertexId(u)));
        match next {
            Some(u) => {
                *cursor = u + 1;
                trace!("Reached vertex {} from {}", VertexId(u), v);
                visited[u] = true;
                stack.push((VertexId(u), 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<usize>>) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_cycle_is_connected() {
        let graph = matrix(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        assert!(is_connected(&graph));
        assert!(unreached_vertices(&graph).is_empty());
    }

    #[test]
    fn test_isolated_vertex_is_disconnected() {
        let graph = matrix(vec![
            vec![0, 1, 1, 0],
            vec![1, 0, 1, 0],
            vec![1, 1, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert!(!is_connected(&graph));
        assert_eq!(unreached_vertices(&graph), vec![VertexId(3)]);
    }

    #[test]
    fn test_isolated_root_is_disconnected() {
        // Vertices 2 and 3 form a double edge; vertex 1 has no edges at all.
        let graph = matrix(vec![vec![0, 0, 0], vec![0, 0, 2], vec![0, 2, 0]]);
        assert!(!is_connected(&graph));
        assert_eq!(unreached_vertices(&graph), vec![VertexId(1), VertexId(2)]);
    }

    #[test]
    fn test_long_path_is_connected() {
        let n = 2_000;
        let mut graph = AdjacencyMatrix::new(n);
        for v in 0..n - 1 {
            graph.add_edges(VertexId(v), VertexId(v + 1), 1);
        }
        assert!(is_connected(&graph));
    }

    #[test]
    fn test_single_vertex_is_connected() {
        assert!(is_connected(&matrix(vec![vec![0]])));
    }

    #[test]
    fn test_check_is_idempotent() {
        let graph = matrix(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]);
        assert_eq!(is_connected(&graph), is_connected(&graph));
        assert_eq!(unreached_vertices(&graph), unreached_vertices(&graph));
    }
}
