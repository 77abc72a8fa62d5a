// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use numpy::PyReadonlyArray2;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::CliqueError;
use crate::{Algorithm, Clique, Graph};

/// Find all maximal cliques of a graph given as an adjacency list.
///
/// Args:
///     adjacency_list: ``adjacency_list[i]`` lists the neighbors of vertex
///         ``i``. Every neighbor must lie in ``[0, n)`` and the relation must
///         be symmetric.
///     algorithm: One of ``"tomita"``, ``"adjlist"``, ``"degeneracy"`` or
///         ``"hybrid"``.
///
/// Returns:
///     A list of maximal cliques, each a list of vertex indices.
///
/// Raises:
///     ValueError: If the algorithm name is unknown or the adjacency list is
///         invalid.
#[pyfunction]
#[pyo3(
    signature = (adjacency_list, algorithm = "degeneracy"),
    text_signature = "(adjacency_list, algorithm='degeneracy')"
)]
pub fn find_cliques(
    py: Python,
    adjacency_list: Vec<Vec<usize>>,
    algorithm: &str,
) -> PyResult<Vec<Clique>> {
    let algorithm: Algorithm = algorithm.parse()?;
    let graph = Graph::from_adjacency_list(&adjacency_list)?;
    Ok(py.allow_threads(|| crate::find_cliques(&graph, algorithm)))
}

/// Find all maximal cliques of a graph given as a square boolean matrix.
#[pyfunction]
#[pyo3(
    signature = (adjacency_matrix, algorithm = "degeneracy"),
    text_signature = "(adjacency_matrix, algorithm='degeneracy')"
)]
pub fn find_cliques_matrix(
    py: Python,
    adjacency_matrix: PyReadonlyArray2<bool>,
    algorithm: &str,
) -> PyResult<Vec<Clique>> {
    let algorithm: Algorithm = algorithm.parse()?;
    let graph = Graph::from_adjacency_matrix(adjacency_matrix.as_array())?;
    Ok(py.allow_threads(|| crate::find_cliques(&graph, algorithm)))
}

/// Convert a square boolean adjacency matrix to an adjacency list.
#[pyfunction]
#[pyo3(signature = (adjacency_matrix, /), text_signature = "(adjacency_matrix, /)")]
pub fn adjacency_matrix_to_list(adjacency_matrix: PyReadonlyArray2<bool>) -> PyResult<Vec<Vec<usize>>> {
    let matrix = adjacency_matrix.as_array();
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(CliqueError::NotSquare { rows, cols }.into());
    }
    Ok(crate::adjacency_matrix_to_list(matrix))
}

#[pymodule]
pub fn quick_cliques_core(_py: Python, m: &Bound<PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(find_cliques, m)?)?;
    m.add_function(wrap_pyfunction!(find_cliques_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(adjacency_matrix_to_list, m)?)?;
    Ok(())
}
