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

//! Errors raised while validating input, before any search starts.
//!
//! Once a [`Graph`](crate::graph::Graph) has been built the enumerators never
//! fail, so every variant here belongs to graph construction or argument
//! parsing.

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CliqueError {
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("self-loop at vertex {vertex}")]
    SelfLoop { vertex: usize },

    #[error("asymmetric adjacency: {u} lists {v} as a neighbor but {v} does not list {u}")]
    Asymmetric { u: usize, v: usize },

    #[error(
        "invalid neighbor {neighbor} for vertex {vertex}, neighbors must be integers in range [0, {vertex_count})"
    )]
    NeighborOutOfRange {
        vertex: usize,
        neighbor: usize,
        vertex_count: usize,
    },

    #[error("invalid algorithm name {0:?}, must be one of: tomita, adjlist, degeneracy, hybrid")]
    UnknownAlgorithm(String),

    #[error("edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type CliqueResult<T> = Result<T, CliqueError>;

#[cfg(feature = "python")]
impl From<CliqueError> for pyo3::PyErr {
    fn from(err: CliqueError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
