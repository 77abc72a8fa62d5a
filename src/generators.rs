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

//! Small graph families for benchmarks and tests.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::error::{CliqueError, CliqueResult};
use crate::graph::{Graph, Vertex};

/// Erdős–Rényi `G(n, p)` graph drawn from a `Pcg64` seeded with `seed`.
///
/// The same `(n, p, seed)` always yields the same graph.
pub fn gnp_random_graph(n: usize, p: f64, seed: u64) -> CliqueResult<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(CliqueError::InvalidProbability(p));
    }
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut edges: Vec<(Vertex, Vertex)> = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(n, &edges)
}

/// Complete graph `K_n`.
pub fn complete_graph(n: usize) -> Graph {
    let rows = (0..n)
        .map(|v| (0..n).filter(|&u| u != v).collect())
        .collect();
    Graph::from_sorted_rows(rows)
}

/// `n` vertices and no edges.
pub fn empty_graph(n: usize) -> Graph {
    Graph::from_sorted_rows(vec![Vec::new(); n])
}
