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

use super::adjlist::AllCandidates;
use super::degeneracy::{par_find_all, seeded_stream};
use super::tomita::PivotBranching;
use super::{BranchRule, Cliques, Enumerator};
use crate::config::{Algorithm, DEFAULT_HYBRID_THRESHOLD};
use crate::graph::{Graph, Vertex};
use crate::sink::Clique;

/// Pivot while `|P| + |X|` is at least `threshold`, then branch on every
/// candidate.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ThresholdBranching {
    threshold: usize,
}

impl BranchRule for ThresholdBranching {
    fn branches(
        &self,
        graph: &Graph,
        candidates: &[Vertex],
        excluded: &[Vertex],
        out: &mut Vec<Vertex>,
    ) {
        if candidates.len() + excluded.len() < self.threshold {
            AllCandidates.branches(graph, candidates, excluded, out);
        } else {
            PivotBranching.branches(graph, candidates, excluded, out);
        }
    }
}

/// Degeneracy-seeded search that stops pivoting on small subproblems.
#[derive(Clone, Copy, Debug)]
pub struct Hybrid {
    pub threshold: usize,
    pub parallel: bool,
}

impl Default for Hybrid {
    fn default() -> Self {
        Hybrid {
            threshold: DEFAULT_HYBRID_THRESHOLD,
            parallel: false,
        }
    }
}

impl Hybrid {
    fn rule(&self) -> ThresholdBranching {
        ThresholdBranching {
            threshold: self.threshold,
        }
    }
}

impl Enumerator for Hybrid {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hybrid
    }

    fn stream<'g>(&self, graph: &'g Graph) -> Cliques<'g> {
        seeded_stream(graph, self.rule())
    }

    fn find_all(&self, graph: &Graph) -> Vec<Clique> {
        if self.parallel {
            par_find_all(graph, self.rule())
        } else {
            self.stream(graph).collect()
        }
    }
}
