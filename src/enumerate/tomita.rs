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

use super::{BranchRule, Cliques, Enumerator, Roots, Search};
use crate::config::Algorithm;
use crate::graph::{Graph, Vertex};
use crate::pivot::pivot_branches;

/// Branch on `P \ N(u)` for the pivot `u` maximizing `|N(u) ∩ P|`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PivotBranching;

impl BranchRule for PivotBranching {
    #[inline]
    fn branches(
        &self,
        graph: &Graph,
        candidates: &[Vertex],
        excluded: &[Vertex],
        out: &mut Vec<Vertex>,
    ) {
        pivot_branches(graph, candidates, excluded, out);
    }
}

/// Pivoting Bron-Kerbosch over the whole graph.
///
/// Starts from a single level with every vertex as a candidate and
/// recomputes the pivot at each level.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tomita;

impl Enumerator for Tomita {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Tomita
    }

    fn stream<'g>(&self, graph: &'g Graph) -> Cliques<'g> {
        Cliques::new(Box::new(Search::new(
            graph,
            PivotBranching,
            Roots::whole(graph),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vertex_is_a_clique() {
        let graph = Graph::from_edges(1, &[]).unwrap();
        assert_eq!(Tomita.find_all(&graph), vec![vec![0]]);
    }

    #[test]
    fn emission_order_follows_pivot_branches() {
        // Bowtie: the pivot 2 covers everything, so only 2 is branched on at
        // the root and the triangles come out in candidate order.
        let graph =
            Graph::from_edges(5, &[(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)]).unwrap();
        assert_eq!(Tomita.find_all(&graph), vec![vec![2, 0, 1], vec![2, 3, 4]]);
    }
}
