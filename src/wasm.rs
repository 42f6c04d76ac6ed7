//! WASM bindings for Euler Circuit.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmEulerAnalyzer } from 'euler_circuit';
//!
//! await init();
//!
//! const analyzer = new WasmEulerAnalyzer("0 1 1\n1 0 1\n1 1 0");
//! console.log(analyzer.analyze());   // report lines joined by "\n"
//! console.log(analyzer.circuit());   // Uint32Array [1, 2, 3, 1]
//! ```

use wasm_bindgen::prelude::*;

use crate::analysis::{self, Outcome};
use crate::graph::AdjacencyMatrix;
use crate::{matrix, report};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible Eulerian circuit analyzer for one matrix.
#[wasm_bindgen]
pub struct WasmEulerAnalyzer {
    graph: AdjacencyMatrix,
}

#[wasm_bindgen]
impl WasmEulerAnalyzer {
    /// Parse and validate a matrix given as text.
    ///
    /// # Returns
    /// A new `WasmEulerAnalyzer` or an error message if the text is malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(matrix_text: &str) -> Result<WasmEulerAnalyzer, JsValue> {
        let graph = matrix::parse(matrix_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmEulerAnalyzer { graph })
    }

    /// Run the full analysis and return the report lines joined by newlines.
    #[wasm_bindgen]
    pub fn analyze(&self) -> String {
        report::render(&analysis::analyze(&self.graph)).join("\n")
    }

    /// Check if every vertex is reachable from vertex 1.
    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        analysis::is_connected(&self.graph)
    }

    /// Check if every vertex has even degree.
    #[wasm_bindgen(js_name = allEven)]
    pub fn all_even(&self) -> bool {
        analysis::all_vertices_even_degree(&self.graph)
    }

    /// The circuit as 1-based vertex numbers, or an empty array if there is none.
    #[wasm_bindgen]
    pub fn circuit(&self) -> Vec<u32> {
        match analysis::analyze(&self.graph) {
            Outcome::CircuitFound(circuit) => circuit
                .vertices()
                .iter()
                .map(|vertex| vertex.number() as u32)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Number of vertices.
    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}
