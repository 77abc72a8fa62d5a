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
// Eppstein, D.; Löffler, M.; Strash, D. (2010). "Listing all maximal cliques in sparse graphs in near-optimal time". ISAAC 2010, LNCS 6506: 403–414.

use std::borrow::Cow;

use rayon::prelude::*;

use super::tomita::PivotBranching;
use super::{BranchRule, CliqueStream, Cliques, Enumerator, Roots, Search};
use crate::config::Algorithm;
use crate::degeneracy::DegeneracyOrder;
use crate::graph::Graph;
use crate::sink::Clique;

/// Pivoting search seeded one vertex at a time in degeneracy order.
///
/// The root for vertex `v` only sees `v`'s later neighbors as candidates, so
/// no level ever branches on more than `degeneracy` vertices.
#[derive(Clone, Copy, Debug, Default)]
pub struct Degeneracy {
    /// Collect with one rayon task per seed vertex in
    /// [`find_all`](Enumerator::find_all).
    pub parallel: bool,
}

impl Enumerator for Degeneracy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Degeneracy
    }

    fn stream<'g>(&self, graph: &'g Graph) -> Cliques<'g> {
        seeded_stream(graph, PivotBranching)
    }

    fn find_all(&self, graph: &Graph) -> Vec<Clique> {
        if self.parallel {
            par_find_all(graph, PivotBranching)
        } else {
            self.stream(graph).collect()
        }
    }
}

pub(super) fn seeded_stream<'g, B: BranchRule + 'g>(graph: &'g Graph, rule: B) -> Cliques<'g> {
    let order = DegeneracyOrder::compute(graph);
    Cliques::new(Box::new(Search::new(
        graph,
        rule,
        Roots::ranked(Cow::Owned(order)),
    )))
}

/// Runs every seed as an independent search, each with its own frame
/// arena, and concatenates the results in rank order.
pub(super) fn par_find_all<B: BranchRule>(graph: &Graph, rule: B) -> Vec<Clique> {
    let order = DegeneracyOrder::compute(graph);
    tracing::debug!(
        seeds = order.len(),
        threads = rayon::current_num_threads(),
        "collecting cliques in parallel"
    );
    let per_seed: Vec<Vec<Clique>> = (0..order.len())
        .into_par_iter()
        .map(|rank| {
            let mut search = Search::new(graph, rule, Roots::ranked_slice(&order, rank..rank + 1));
            let mut found = Vec::new();
            while let Some(clique) = search.next_clique() {
                found.push(clique.to_vec());
            }
            found
        })
        .collect();
    per_seed.into_iter().flatten().collect()
}
