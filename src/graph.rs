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

//! Immutable undirected graph used by every enumeration strategy.
//!
//! Vertices are the integers `0..n`. Neighbors are stored once in a
//! compressed row layout, sorted ascending, and a second structure answers
//! adjacency queries in constant time: a bitset row per vertex for graphs of
//! up to [`MAX_NODES_FOR_BITSET`] vertices, binary search over the sorted
//! rows above that.

use std::ops::Range;

use fixedbitset::FixedBitSet;
use ndarray::{Array2, ArrayView2};
use petgraph::graph::{IndexType, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::{CliqueError, CliqueResult};

/// Vertex identifier, an index in `0..vertex_count`.
pub type Vertex = usize;

/// Largest graph that gets a dense bitset adjacency index.
///
/// A bitset row per vertex costs `n * n / 8` bytes, which stays around
/// 32 MiB at this size.
pub const MAX_NODES_FOR_BITSET: usize = 1 << 14;

#[derive(Clone, Debug)]
enum AdjacencyIndex {
    Bitset(Vec<FixedBitSet>),
    SortedRows,
}

/// Loop-free undirected graph over `0..n`, read-only once built.
#[derive(Clone, Debug)]
pub struct Graph {
    offsets: Vec<usize>,
    targets: Vec<Vertex>,
    index: AdjacencyIndex,
}

fn reject(err: CliqueError) -> CliqueError {
    tracing::warn!(error = %err, "rejecting graph input");
    err
}

impl Graph {
    /// Builds a graph from an adjacency list.
    ///
    /// Every neighbor must lie in `[0, n)`, no vertex may list itself, and if
    /// `u` lists `v` then `v` must list `u`. Repeated entries are collapsed.
    pub fn from_adjacency_list<L: AsRef<[Vertex]>>(adjacency: &[L]) -> CliqueResult<Self> {
        let n = adjacency.len();
        let mut rows: Vec<Vec<Vertex>> = Vec::with_capacity(n);
        for (vertex, neighbors) in adjacency.iter().enumerate() {
            let mut row = neighbors.as_ref().to_vec();
            for &neighbor in &row {
                if neighbor >= n {
                    return Err(reject(CliqueError::NeighborOutOfRange {
                        vertex,
                        neighbor,
                        vertex_count: n,
                    }));
                }
                if neighbor == vertex {
                    return Err(reject(CliqueError::SelfLoop { vertex }));
                }
            }
            row.sort_unstable();
            row.dedup();
            rows.push(row);
        }
        for (u, row) in rows.iter().enumerate() {
            for &v in row {
                if rows[v].binary_search(&u).is_err() {
                    return Err(reject(CliqueError::Asymmetric { u, v }));
                }
            }
        }
        Ok(Self::from_sorted_rows(rows))
    }

    /// Builds a graph from a square boolean adjacency matrix.
    ///
    /// The diagonal must be all `false` and `matrix[[i, j]]` must equal
    /// `matrix[[j, i]]` for every pair.
    pub fn from_adjacency_matrix(matrix: ArrayView2<'_, bool>) -> CliqueResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(reject(CliqueError::NotSquare { rows, cols }));
        }
        for i in 0..rows {
            if matrix[[i, i]] {
                return Err(reject(CliqueError::SelfLoop { vertex: i }));
            }
            for j in (i + 1)..rows {
                let forward = matrix[[i, j]];
                if forward != matrix[[j, i]] {
                    let (u, v) = if forward { (i, j) } else { (j, i) };
                    return Err(reject(CliqueError::Asymmetric { u, v }));
                }
            }
        }
        Ok(Self::from_sorted_rows(adjacency_matrix_to_list(matrix)))
    }

    /// Builds a graph from matrix rows, rejecting ragged input.
    pub fn from_matrix_rows<R: AsRef<[bool]>>(rows: &[R]) -> CliqueResult<Self> {
        let n = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            let len = entries.as_ref().len();
            if len != n {
                return Err(reject(CliqueError::RaggedRow {
                    row,
                    len,
                    expected: n,
                }));
            }
        }
        let matrix = Array2::from_shape_fn((n, n), |(i, j)| rows[i].as_ref()[j]);
        Self::from_adjacency_matrix(matrix.view())
    }

    /// Builds a graph on `vertex_count` vertices from an undirected edge list.
    pub fn from_edges(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> CliqueResult<Self> {
        let mut rows: Vec<Vec<Vertex>> = vec![Vec::new(); vertex_count];
        for &(u, v) in edges {
            for (vertex, neighbor) in [(u, v), (v, u)] {
                if neighbor >= vertex_count {
                    return Err(reject(CliqueError::NeighborOutOfRange {
                        vertex,
                        neighbor,
                        vertex_count,
                    }));
                }
            }
            if u == v {
                return Err(reject(CliqueError::SelfLoop { vertex: u }));
            }
            rows[u].push(v);
            rows[v].push(u);
        }
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
        }
        Ok(Self::from_sorted_rows(rows))
    }

    /// Converts a petgraph undirected graph, keyed by node index.
    ///
    /// Self-loops and parallel edges are dropped rather than rejected.
    pub fn from_petgraph<N, E, Ix: IndexType>(graph: &UnGraph<N, E, Ix>) -> Self {
        let mut rows: Vec<Vec<Vertex>> = vec![Vec::new(); graph.node_count()];
        for edge in graph.edge_references() {
            let s = edge.source().index();
            let t = edge.target().index();
            if s == t {
                continue;
            }
            rows[s].push(t);
            rows[t].push(s);
        }
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
        }
        Self::from_sorted_rows(rows)
    }

    /// Rows must already be sorted, deduplicated, symmetric and loop-free.
    pub(crate) fn from_sorted_rows(rows: Vec<Vec<Vertex>>) -> Self {
        let n = rows.len();
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut targets = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for row in &rows {
            targets.extend_from_slice(row);
            offsets.push(targets.len());
        }
        let index = if n <= MAX_NODES_FOR_BITSET {
            let bits = rows
                .iter()
                .map(|row| {
                    let mut set = FixedBitSet::with_capacity(n);
                    set.extend(row.iter().copied());
                    set
                })
                .collect();
            AdjacencyIndex::Bitset(bits)
        } else {
            AdjacencyIndex::SortedRows
        };
        let graph = Graph {
            offsets,
            targets,
            index,
        };
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            bitset = graph.has_bitset_index(),
            "built graph"
        );
        graph
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    #[inline]
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.vertex_count()
    }

    /// Neighbors of `v` in ascending order.
    #[inline]
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    #[inline]
    pub fn degree(&self, v: Vertex) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    pub fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// Whether `u` and `v` share an edge.
    #[inline]
    pub fn adjacent(&self, u: Vertex, v: Vertex) -> bool {
        match &self.index {
            AdjacencyIndex::Bitset(rows) => rows[u].contains(v),
            AdjacencyIndex::SortedRows => self.neighbors(u).binary_search(&v).is_ok(),
        }
    }

    pub(crate) fn has_bitset_index(&self) -> bool {
        matches!(self.index, AdjacencyIndex::Bitset(_))
    }

    /// Whether `vertices` is a non-empty set of distinct, pairwise adjacent
    /// vertices of this graph.
    pub fn is_clique(&self, vertices: &[Vertex]) -> bool {
        if vertices.is_empty() {
            return false;
        }
        let n = self.vertex_count();
        for (i, &u) in vertices.iter().enumerate() {
            if u >= n {
                return false;
            }
            for &v in &vertices[i + 1..] {
                if !self.adjacent(u, v) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether `vertices` is a clique that no other vertex extends.
    pub fn is_maximal_clique(&self, vertices: &[Vertex]) -> bool {
        if !self.is_clique(vertices) {
            return false;
        }
        // Any extending vertex must neighbor the first member.
        self.neighbors(vertices[0]).iter().all(|&candidate| {
            vertices.contains(&candidate)
                || !vertices.iter().all(|&v| self.adjacent(candidate, v))
        })
    }
}

/// Lists the `true` columns of every row of a boolean matrix.
///
/// Performs no validation; pair it with [`Graph::from_adjacency_list`] or use
/// [`Graph::from_adjacency_matrix`] directly.
pub fn adjacency_matrix_to_list(matrix: ArrayView2<'_, bool>) -> Vec<Vec<Vertex>> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(j, &edge)| edge.then_some(j))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn path3() -> Vec<Vec<usize>> {
        vec![vec![1], vec![0, 2], vec![1]]
    }

    #[test]
    fn adjacency_list_round_trips_neighbors() {
        let graph = Graph::from_adjacency_list(&path3()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.degree(0), 1);
        assert!(graph.adjacent(0, 1));
        assert!(graph.adjacent(2, 1));
        assert!(!graph.adjacent(0, 2));
    }

    #[test]
    fn duplicate_neighbors_are_collapsed() {
        let graph = Graph::from_adjacency_list(&[vec![1usize, 1], vec![0]]).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn out_of_range_neighbor_is_rejected() {
        let err = Graph::from_adjacency_list(&[vec![1usize], vec![0, 5]]).unwrap_err();
        assert_eq!(
            err,
            CliqueError::NeighborOutOfRange {
                vertex: 1,
                neighbor: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn asymmetric_list_is_rejected() {
        let err = Graph::from_adjacency_list(&[vec![1usize], vec![]]).unwrap_err();
        assert_eq!(err, CliqueError::Asymmetric { u: 0, v: 1 });
    }

    #[test]
    fn self_loop_in_list_is_rejected() {
        let err = Graph::from_adjacency_list(&[vec![0usize]]).unwrap_err();
        assert_eq!(err, CliqueError::SelfLoop { vertex: 0 });
    }

    #[test]
    fn matrix_validation() {
        let asymmetric = array![[false, true], [false, false]];
        assert_eq!(
            Graph::from_adjacency_matrix(asymmetric.view()).unwrap_err(),
            CliqueError::Asymmetric { u: 0, v: 1 }
        );
        let looped = array![[true, false], [false, false]];
        assert_eq!(
            Graph::from_adjacency_matrix(looped.view()).unwrap_err(),
            CliqueError::SelfLoop { vertex: 0 }
        );
        let wide = Array2::<bool>::default((2, 3));
        assert_eq!(
            Graph::from_adjacency_matrix(wide.view()).unwrap_err(),
            CliqueError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![false, true], vec![true]];
        assert_eq!(
            Graph::from_matrix_rows(&rows).unwrap_err(),
            CliqueError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn matrix_to_list_reads_true_columns() {
        let matrix = array![[false, true, true], [true, false, false], [true, false, false]];
        assert_eq!(
            adjacency_matrix_to_list(matrix.view()),
            vec![vec![1, 2], vec![0], vec![0]]
        );
        let graph = Graph::from_adjacency_matrix(matrix.view()).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edges_and_petgraph_agree() {
        let edges = [(0, 1), (1, 2), (2, 0), (2, 3)];
        let from_edges = Graph::from_edges(4, &edges).unwrap();
        let mut pg = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| pg.add_node(())).collect();
        for &(u, v) in &edges {
            pg.add_edge(nodes[u], nodes[v], ());
        }
        pg.add_edge(nodes[3], nodes[3], ());
        pg.add_edge(nodes[0], nodes[1], ());
        let from_pg = Graph::from_petgraph(&pg);
        for v in 0..4 {
            assert_eq!(from_edges.neighbors(v), from_pg.neighbors(v));
        }
        assert_eq!(
            Graph::from_edges(2, &[(0, 2)]).unwrap_err(),
            CliqueError::NeighborOutOfRange {
                vertex: 0,
                neighbor: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn sorted_rows_backend_answers_like_bitsets() {
        let n = MAX_NODES_FOR_BITSET + 1;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
        let graph = Graph::from_edges(n, &edges).unwrap();
        assert!(!graph.has_bitset_index());
        assert!(graph.adjacent(10, 11));
        assert!(graph.adjacent(n - 1, n - 2));
        assert!(!graph.adjacent(10, 12));
    }

    #[test]
    fn maximality_check() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        assert!(graph.is_maximal_clique(&[2, 0, 1]));
        assert!(graph.is_maximal_clique(&[3, 2]));
        assert!(!graph.is_maximal_clique(&[0, 1]));
        assert!(!graph.is_clique(&[0, 3]));
        assert!(!graph.is_clique(&[]));
    }
}
