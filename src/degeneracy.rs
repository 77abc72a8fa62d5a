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
// Matula, D. W.; Beck, L. L. (1983). "Smallest-last ordering and clustering and graph coloring algorithms". J. ACM 30 (3): 417–427.

use std::collections::BTreeSet;

use crate::graph::{Graph, Vertex};

/// Smallest-last vertex ordering of a graph.
///
/// Vertices are ranked by the step at which they were peeled off as the
/// current minimum-degree vertex, so every vertex has at most
/// [`degeneracy`](Self::degeneracy) neighbors of higher rank. Ties between
/// equal live degrees go to the lowest vertex index, which keeps the order
/// (and therefore clique output) reproducible.
#[derive(Clone, Debug)]
pub struct DegeneracyOrder {
    order: Vec<Vertex>,
    position: Vec<usize>,
    later_offsets: Vec<usize>,
    later: Vec<Vertex>,
    earlier_offsets: Vec<usize>,
    earlier: Vec<Vertex>,
    degeneracy: usize,
}

impl DegeneracyOrder {
    /// Peels the graph with a bucket queue keyed by live degree.
    ///
    /// The minimum non-empty bucket can drop by at most one per removal, so
    /// the cursor scan is amortized linear; each bucket is ordered by index
    /// to honor the tie rule.
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);
        let mut degree_bins: Vec<BTreeSet<Vertex>> = vec![BTreeSet::new(); max_degree + 1];
        for (v, &degree) in degrees.iter().enumerate() {
            degree_bins[degree].insert(v);
        }

        let mut order: Vec<Vertex> = Vec::with_capacity(n);
        let mut position = vec![usize::MAX; n];
        let mut removed = vec![false; n];
        let mut degeneracy = 0;
        let mut current_degree = 0;

        for rank in 0..n {
            while degree_bins[current_degree].is_empty() {
                current_degree += 1;
            }
            let Some(v) = degree_bins[current_degree].pop_first() else {
                break;
            };
            degeneracy = degeneracy.max(current_degree);
            removed[v] = true;
            position[v] = rank;
            order.push(v);
            for &w in graph.neighbors(v) {
                if removed[w] {
                    continue;
                }
                let degree = &mut degrees[w];
                degree_bins[*degree].remove(&w);
                *degree -= 1;
                degree_bins[*degree].insert(w);
            }
            current_degree = current_degree.saturating_sub(1);
        }

        let mut later_offsets = Vec::with_capacity(n + 1);
        let mut earlier_offsets = Vec::with_capacity(n + 1);
        let mut later = Vec::with_capacity(graph.edge_count());
        let mut earlier = Vec::with_capacity(graph.edge_count());
        later_offsets.push(0);
        earlier_offsets.push(0);
        for v in graph.vertices() {
            for &w in graph.neighbors(v) {
                if position[w] > position[v] {
                    later.push(w);
                } else {
                    earlier.push(w);
                }
            }
            later_offsets.push(later.len());
            earlier_offsets.push(earlier.len());
        }

        tracing::debug!(vertices = n, degeneracy, "computed degeneracy ordering");
        DegeneracyOrder {
            order,
            position,
            later_offsets,
            later,
            earlier_offsets,
            earlier,
            degeneracy,
        }
    }

    /// Vertices by increasing rank.
    #[inline]
    pub fn order(&self) -> &[Vertex] {
        &self.order
    }

    /// Rank of `v`.
    #[inline]
    pub fn position(&self, v: Vertex) -> usize {
        self.position[v]
    }

    /// Neighbors of `v` ranked after it, ascending by vertex index.
    #[inline]
    pub fn later_neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.later[self.later_offsets[v]..self.later_offsets[v + 1]]
    }

    /// Neighbors of `v` ranked before it, ascending by vertex index.
    #[inline]
    pub fn earlier_neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.earlier[self.earlier_offsets[v]..self.earlier_offsets[v + 1]]
    }

    /// Largest live degree seen while peeling, i.e. the graph degeneracy.
    #[inline]
    pub fn degeneracy(&self) -> usize {
        self.degeneracy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
