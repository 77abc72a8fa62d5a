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

use std::borrow::Cow;
use std::ops::Range;

use smallvec::SmallVec;

use super::CliqueStream;
use crate::arena::FrameArena;
use crate::degeneracy::DegeneracyOrder;
use crate::graph::{Graph, Vertex};

/// Chooses the subset of `P` a level branches on.
pub(crate) trait BranchRule: Copy + Send + Sync {
    /// Writes the branching vertices into `out` (cleared first), in the
    /// order they will be tried.
    fn branches(
        &self,
        graph: &Graph,
        candidates: &[Vertex],
        excluded: &[Vertex],
        out: &mut Vec<Vertex>,
    );
}

/// Where root levels come from.
pub(crate) enum Roots<'g> {
    /// A single root with `P` = every vertex.
    Whole { pending: bool },
    /// One root per rank in `ranks`: `R = {v}`, `P` = later neighbors of `v`,
    /// `X` = earlier neighbors of `v`.
    Ranked {
        order: Cow<'g, DegeneracyOrder>,
        ranks: Range<usize>,
    },
}

impl<'g> Roots<'g> {
    pub(crate) fn whole(graph: &Graph) -> Self {
        Roots::Whole {
            pending: !graph.is_empty(),
        }
    }

    pub(crate) fn ranked(order: Cow<'g, DegeneracyOrder>) -> Self {
        let ranks = 0..order.len();
        Roots::Ranked { order, ranks }
    }

    pub(crate) fn ranked_slice(order: &'g DegeneracyOrder, ranks: Range<usize>) -> Self {
        Roots::Ranked {
            order: Cow::Borrowed(order),
            ranks,
        }
    }
}

/// Depth-first `(R, P, X)` search with an explicit stack of frames.
///
/// `clique` holds `R`. Each active frame holds the `P` and `X` of one level
/// and a cursor into its branch list. Descending into branch `v` pushes `v`
/// onto `R` and a child frame with `P ∩ N(v)`, `X ∩ N(v)`; returning pops
/// both and moves `v` from the parent's `P` to its `X`.
pub(crate) struct Search<'g, B> {
    graph: &'g Graph,
    rule: B,
    roots: Roots<'g>,
    arena: FrameArena,
    clique: SmallVec<[Vertex; 32]>,
    /// The top frame is a leaf whose clique was just handed out.
    leaf_pending: bool,
    done: bool,
}

impl<'g, B: BranchRule> Search<'g, B> {
    pub(crate) fn new(graph: &'g Graph, rule: B, roots: Roots<'g>) -> Self {
        Search {
            graph,
            rule,
            roots,
            arena: FrameArena::new(),
            clique: SmallVec::new(),
            leaf_pending: false,
            done: false,
        }
    }

    /// Pushes the next root frame, or returns `false` when none are left.
    fn seed_next_root(&mut self) -> bool {
        match &mut self.roots {
            Roots::Whole { pending } => {
                if !*pending {
                    return false;
                }
                *pending = false;
                let frame = self.arena.acquire();
                frame.candidates.extend(self.graph.vertices());
                self.clique.clear();
                true
            }
            Roots::Ranked { order, ranks } => {
                let Some(rank) = ranks.next() else {
                    return false;
                };
                let v = order.order()[rank];
                let frame = self.arena.acquire();
                frame.candidates.extend_from_slice(order.later_neighbors(v));
                frame.excluded.extend_from_slice(order.earlier_neighbors(v));
                self.clique.clear();
                self.clique.push(v);
                true
            }
        }
    }

    /// Prepares the freshly pushed top frame. Returns `true` if `R` is
    /// maximal, i.e. both `P` and `X` are empty.
    fn enter(&mut self) -> bool {
        let Some(frame) = self.arena.top() else {
            return false;
        };
        if frame.candidates.is_empty() && frame.excluded.is_empty() {
            return true;
        }
        let (candidates, excluded, branches) = frame.split_for_branching();
        self.rule.branches(self.graph, candidates, excluded, branches);
        false
    }

    fn descend(&mut self, v: Vertex) {
        let graph = self.graph;
        let (parent, child) = self.arena.acquire_child();
        child.candidates.extend(
            parent
                .candidates
                .iter()
                .copied()
                .filter(|&w| graph.adjacent(v, w)),
        );
        child.excluded.extend(
            parent
                .excluded
                .iter()
                .copied()
                .filter(|&w| graph.adjacent(v, w)),
        );
        self.clique.push(v);
    }

    /// Releases the top frame and records its branch vertex as explored in
    /// the parent.
    fn retreat(&mut self) {
        self.arena.release();
        match self.arena.top() {
            Some(parent) => {
                if let Some(v) = self.clique.pop() {
                    parent.exclude(v);
                }
            }
            None => self.clique.clear(),
        }
    }
}

impl<B: BranchRule> CliqueStream for Search<'_, B> {
    fn next_clique(&mut self) -> Option<&[Vertex]> {
        if self.done {
            return None;
        }
        loop {
            if self.leaf_pending {
                self.leaf_pending = false;
                self.retreat();
            }
            let next = match self.arena.top() {
                None => {
                    if !self.seed_next_root() {
                        self.done = true;
                        return None;
                    }
                    None
                }
                Some(frame) => match frame.next_branch() {
                    Some(v) => Some(v),
                    None => {
                        self.retreat();
                        continue;
                    }
                },
            };
            if let Some(v) = next {
                self.descend(v);
            }
            if self.enter() {
                self.leaf_pending = true;
                return Some(self.clique.as_slice());
            }
        }
    }

    fn unwind(&mut self) {
        self.leaf_pending = false;
        self.arena.unwind();
        self.clique.clear();
        self.done = true;
    }
}
