//! Adjacency matrix validation.

use crate::error::{EulerError, Result};

use super::{AdjacencyMatrix, VertexId};

/// Validate a matrix before analysis.
///
/// Checks:
/// - The matrix has at least one vertex
/// - Every cell equals its mirror cell (undirected edges)
/// - Every diagonal cell is even, since each loop puts both of its endpoints
///   in that cell
pub fn validate_matrix(matrix: &AdjacencyMatrix) -> Result<()> {
    if matrix.vertex_count() == 0 {
        return Err(EulerError::EmptyMatrix);
    }

    for v in matrix.vertices() {
        let loops = matrix.multiplicity(v, v);
        if loops % 2 != 0 {
            return Err(EulerError::OddLoopMultiplicity {
                vertex: v.number(),
                value: loops,
            });
        }

        for u in (v.index() + 1..matrix.vertex_count()).map(VertexId) {
            let forward = matrix.multiplicity(v, u);
            let backward = matrix.multiplicity(u, v);
            if forward != backward {
                return Err(EulerError::AsymmetricMatrix {
                    row: v.number(),
                    column: u.number(),
                    forward,
                    backward,
                });
            }
        }
    }

    Ok(())
}
