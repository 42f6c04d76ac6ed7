//! User-facing rendering of analysis outcomes.
//!
//! Vertices are numbered from 1 in everything rendered here.

use crate::analysis::Outcome;

/// Printed once both checks have passed, before the circuit result.
pub const CHECKS_PASSED: &str =
    "The graph is connected and all vertices have even degree. Computing...";

/// Render an outcome as the lines shown to the user.
pub fn render(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Disconnected => vec!["The graph is not connected.".to_string()],
        Outcome::OddDegree(degrees) => {
            let mut lines: Vec<String> = degrees
                .iter()
                .map(|entry| format!("Vertex {} has degree {}", entry.vertex, entry.degree))
                .collect();
            lines.push("Not all vertices have even degree.".to_string());
            lines
        }
        Outcome::CircuitFound(circuit) => vec![
            CHECKS_PASSED.to_string(),
            format!("Eulerian circuit found: {}", circuit),
        ],
        Outcome::NoCircuit => vec![
            CHECKS_PASSED.to_string(),
            "No Eulerian circuit found in the graph.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::graph::{VertexDegree, VertexId};
    use crate::matrix;

    #[test]
    fn test_render_circuit() {
        let graph = matrix::parse("0 1 1\n1 0 1\n1 1 0").unwrap();
        let lines = render(&analyze(&graph));
        assert_eq!(
            lines,
            vec![
                CHECKS_PASSED.to_string(),
                "Eulerian circuit found: 1 -> 2 -> 3 -> 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_odd_degree() {
        let outcome = Outcome::OddDegree(vec![
            VertexDegree {
                vertex: VertexId(0),
                degree: 1,
            },
            VertexDegree {
                vertex: VertexId(1),
                degree: 1,
            },
            VertexDegree {
                vertex: VertexId(2),
                degree: 0,
            },
        ]);
        assert_eq!(
            render(&outcome),
            vec![
                "Vertex 1 has degree 1",
                "Vertex 2 has degree 1",
                "Vertex 3 has degree 0",
                "Not all vertices have even degree.",
            ]
        );
    }

    #[test]
    fn test_render_disconnected() {
        assert_eq!(
            render(&Outcome::Disconnected),
            vec!["The graph is not connected."]
        );
    }

    #[test]
    fn test_render_no_circuit() {
        let lines = render(&Outcome::NoCircuit);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "No Eulerian circuit found in the graph.");
    }
}
