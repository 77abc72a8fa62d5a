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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

//! Maximal clique enumeration strategies.
//!
//! Every strategy runs the same backtracking search over `(R, P, X)` and only
//! differs in how it seeds the search and how it picks the vertices to
//! branch on at each level:
//!
//! | strategy                 | seeding                       | branching                |
//! |--------------------------|-------------------------------|--------------------------|
//! | [`Tomita`]               | one root, `P` = all vertices  | `P \ N(pivot)`           |
//! | [`AdjacencyList`]        | one root, `P` = all vertices  | all of `P`               |
//! | [`Degeneracy`]           | one root per vertex, by rank  | `P \ N(pivot)`           |
//! | [`Hybrid`]               | one root per vertex, by rank  | pivot above a threshold  |
//!
//! The search keeps its levels in a [`FrameArena`](crate::arena::FrameArena)
//! instead of the call stack, so depth is limited by memory only, and it can
//! be suspended after each emitted clique. That makes [`Cliques`] a lazy
//! iterator: dropping it or stopping a [`CliqueSink`] abandons the rest of
//! the search.

mod adjlist;
mod degeneracy;
mod hybrid;
mod search;
mod tomita;

pub use adjlist::AdjacencyList;
pub use degeneracy::Degeneracy;
pub use hybrid::Hybrid;
pub use tomita::Tomita;

pub(crate) use search::{BranchRule, Roots, Search};

use crate::config::Algorithm;
use crate::graph::{Graph, Vertex};
use crate::sink::{Clique, CliqueSink, RunSummary};

/// A resumable search that lends out one clique at a time.
pub(crate) trait CliqueStream {
    fn next_clique(&mut self) -> Option<&[Vertex]>;

    /// Drops every active level; later calls yield nothing.
    fn unwind(&mut self);
}

/// Lazy, finite sequence of maximal cliques.
///
/// Not restartable: once exhausted or cancelled it yields `None` forever.
pub struct Cliques<'g> {
    inner: Box<dyn CliqueStream + Send + 'g>,
}

impl<'g> Cliques<'g> {
    pub(crate) fn new(inner: Box<dyn CliqueStream + Send + 'g>) -> Self {
        Cliques { inner }
    }

    /// Feeds the remaining cliques to `sink` until it breaks or the search
    /// is exhausted.
    pub fn drain_into(&mut self, sink: &mut dyn CliqueSink) -> RunSummary {
        let mut summary = RunSummary::default();
        while let Some(clique) = self.inner.next_clique() {
            summary.emitted += 1;
            if sink.push(clique).is_break() {
                self.inner.unwind();
                summary.aborted = true;
                tracing::debug!(emitted = summary.emitted, "clique sink requested abort");
                break;
            }
        }
        summary
    }

    /// Stops the search; the iterator yields nothing afterwards.
    pub fn cancel(&mut self) {
        self.inner.unwind();
    }
}

impl Iterator for Cliques<'_> {
    type Item = Clique;

    fn next(&mut self) -> Option<Clique> {
        self.inner.next_clique().map(<[Vertex]>::to_vec)
    }
}

/// Common contract of the four strategies.
pub trait Enumerator: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Starts a lazy enumeration over `graph`.
    fn stream<'g>(&self, graph: &'g Graph) -> Cliques<'g>;

    /// Pushes every maximal clique into `sink` as it is found.
    fn run(&self, graph: &Graph, sink: &mut dyn CliqueSink) -> RunSummary {
        log_run(self.algorithm(), graph);
        self.stream(graph).drain_into(sink)
    }

    /// Collects every maximal clique.
    fn find_all(&self, graph: &Graph) -> Vec<Clique> {
        log_run(self.algorithm(), graph);
        self.stream(graph).collect()
    }
}

fn log_run(algorithm: Algorithm, graph: &Graph) {
    tracing::debug!(
        %algorithm,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "enumerating maximal cliques"
    );
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;
    use crate::sink::FnSink;

    fn scenario() -> Graph {
        Graph::from_edges(
            6,
            &[
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 3),
                (2, 4),
                (3, 4),
                (3, 5),
                (4, 5),
            ],
        )
        .unwrap()
    }

    fn sorted(mut cliques: Vec<Clique>) -> Vec<Clique> {
        for clique in &mut cliques {
            clique.sort_unstable();
        }
        cliques.sort();
        cliques
    }

    #[test]
    fn every_strategy_finds_the_three_triangles() {
        let graph = scenario();
        for algorithm in Algorithm::ALL {
            let found = sorted(algorithm.enumerator().find_all(&graph));
            assert_eq!(
                found,
                vec![vec![0, 1, 2], vec![2, 3, 4], vec![3, 4, 5]],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn sink_break_stops_after_one_clique() {
        let graph = scenario();
        for algorithm in Algorithm::ALL {
            let mut seen = Vec::new();
            let summary = algorithm.enumerator().run(
                &graph,
                &mut FnSink(|c: &[Vertex]| {
                    seen.push(c.to_vec());
                    ControlFlow::Break(())
                }),
            );
            assert_eq!(
                summary,
                RunSummary {
                    emitted: 1,
                    aborted: true
                }
            );
            assert_eq!(seen.len(), 1);
        }
    }

    #[test]
    fn cancelled_stream_stays_empty() {
        let graph = scenario();
        let mut cliques = Algorithm::Tomita.enumerator().stream(&graph);
        assert!(cliques.next().is_some());
        cliques.cancel();
        assert!(cliques.next().is_none());
        assert!(cliques.next().is_none());
    }
}
