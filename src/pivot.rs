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
// Tomita, E.; Tanaka, A.; Takahashi, H. (2006). "The worst-case time complexity for generating all maximal cliques and computational experiments". Theoretical Computer Science 363 (1): 28–42.

use crate::graph::{Graph, Vertex};

/// Pivot chosen for one search level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pivot {
    pub vertex: Vertex,
    /// How many candidates the pivot neighbors, i.e. branches it prunes.
    pub coverage: usize,
}

/// Picks the vertex of `candidates ∪ excluded` with the most neighbors among
/// `candidates`, lowest index on ties. Returns `None` when both are empty.
pub fn select_pivot(graph: &Graph, candidates: &[Vertex], excluded: &[Vertex]) -> Option<Pivot> {
    let mut best: Option<Pivot> = None;
    for &u in candidates.iter().chain(excluded) {
        let coverage = candidates.iter().filter(|&&w| graph.adjacent(u, w)).count();
        let better = match best {
            None => true,
            Some(b) => coverage > b.coverage || (coverage == b.coverage && u < b.vertex),
        };
        if better {
            best = Some(Pivot {
                vertex: u,
                coverage,
            });
        }
    }
    best
}

/// Writes `candidates \ N(pivot)` into `out`, keeping candidate order.
///
/// Leaves `out` empty when there is nothing left to branch on.
pub fn pivot_branches(
    graph: &Graph,
    candidates: &[Vertex],
    excluded: &[Vertex],
    out: &mut Vec<Vertex>,
) {
    out.clear();
    if candidates.is_empty() {
        return;
    }
    if let Some(pivot) = select_pivot(graph, candidates, excluded) {
        out.extend(
            candidates
                .iter()
                .copied()
                .filter(|&w| !graph.adjacent(pivot.vertex, w)),
        );
    }
}
