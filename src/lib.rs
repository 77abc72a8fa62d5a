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

//! Enumerate every maximal clique of an undirected, loop-free graph.
//!
//! Four interchangeable strategies are provided, selected with
//! [`Algorithm`]: pivoting Bron-Kerbosch ([`Algorithm::Tomita`]), plain
//! branching over neighbor lists ([`Algorithm::AdjList`]), degeneracy-seeded
//! pivoting ([`Algorithm::Degeneracy`], the default) and a hybrid of the
//! last two ([`Algorithm::Hybrid`]). All of them return the same set of
//! cliques; only the order differs.
//!
//! ```
//! use quick_cliques::{find_cliques, Algorithm, Graph};
//!
//! let graph = Graph::from_edges(
//!     6,
//!     &[(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4), (3, 5), (4, 5)],
//! )
//! .unwrap();
//! let mut cliques = find_cliques(&graph, Algorithm::Degeneracy);
//! for clique in &mut cliques {
//!     clique.sort_unstable();
//! }
//! cliques.sort();
//! assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3, 4], vec![3, 4, 5]]);
//! ```
//!
//! Cliques can also be pulled lazily and the search abandoned at any point:
//!
//! ```
//! use quick_cliques::{generators, Algorithm};
//!
//! let graph = generators::gnp_random_graph(200, 0.1, 1).unwrap();
//! let first_ten: Vec<_> = Algorithm::Hybrid.enumerator().stream(&graph).take(10).collect();
//! assert_eq!(first_ten.len(), 10);
//! ```

pub mod arena;
pub mod config;
pub mod degeneracy;
pub mod enumerate;
pub mod error;
pub mod generators;
pub mod graph;
pub mod pivot;
#[cfg(feature = "python")]
mod python;
pub mod sink;

pub use config::{Algorithm, EnumerationConfig};
pub use enumerate::{Cliques, Enumerator};
pub use error::{CliqueError, CliqueResult};
pub use graph::{adjacency_matrix_to_list, Graph, Vertex};
pub use sink::{Clique, CliqueCounter, CliqueSink, FnSink, RunSummary};

/// Collects every maximal clique of `graph` with `algorithm`.
pub fn find_cliques(graph: &Graph, algorithm: Algorithm) -> Vec<Clique> {
    algorithm.enumerator().find_all(graph)
}

/// Collects every maximal clique of `graph` as described by `config`.
pub fn find_cliques_with(graph: &Graph, config: &EnumerationConfig) -> CliqueResult<Vec<Clique>> {
    config.validate()?;
    Ok(config.enumerator().find_all(graph))
}

/// Validates an algorithm tag and an adjacency list, then collects every
/// maximal clique.
///
/// The tag is checked first, so an unknown algorithm is reported even when
/// the graph is also malformed. Nothing is enumerated on error.
pub fn find_cliques_by_name<L: AsRef<[Vertex]>>(
    adjacency: &[L],
    algorithm: &str,
) -> CliqueResult<Vec<Clique>> {
    let algorithm: Algorithm = algorithm.parse()?;
    let graph = Graph::from_adjacency_list(adjacency)?;
    Ok(find_cliques(&graph, algorithm))
}
