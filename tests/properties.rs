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

use foldhash::{HashSet, HashSetExt};
use proptest::prelude::*;
use quick_cliques::{find_cliques, find_cliques_with, Algorithm, EnumerationConfig, Graph};

const MAX_VERTICES: usize = 10;

/// Every maximal clique found by checking all vertex subsets.
fn brute_force(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut out = Vec::new();
    for mask in 1u32..(1u32 << n) {
        let members: Vec<usize> = (0..n).filter(|&v| mask & (1 << v) != 0).collect();
        if graph.is_maximal_clique(&members) {
            out.push(members);
        }
    }
    out.sort();
    out
}

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (0..=MAX_VERTICES).prop_flat_map(|n| {
        proptest::collection::vec(any::<bool>(), n * n.saturating_sub(1) / 2).prop_map(
            move |bits| {
                let mut edges = Vec::new();
                let mut bit = bits.iter();
                for u in 0..n {
                    for v in (u + 1)..n {
                        if *bit.next().unwrap() {
                            edges.push((u, v));
                        }
                    }
                }
                Graph::from_edges(n, &edges).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn every_strategy_matches_brute_force(graph in graph_strategy()) {
        let expected = brute_force(&graph);
        for algorithm in Algorithm::ALL {
            let found = find_cliques(&graph, algorithm);

            let mut distinct = HashSet::new();
            for clique in &found {
                prop_assert!(graph.is_maximal_clique(clique), "{algorithm}: {clique:?}");
                let mut key = clique.clone();
                key.sort_unstable();
                prop_assert!(distinct.insert(key), "{algorithm}: duplicate {clique:?}");
            }

            let mut canonical: Vec<Vec<usize>> = distinct.into_iter().collect();
            canonical.sort();
            prop_assert_eq!(&canonical, &expected, "{}", algorithm);
        }
    }

    #[test]
    fn hybrid_threshold_does_not_change_the_set(graph in graph_strategy(), threshold in 1usize..12) {
        let config = EnumerationConfig {
            algorithm: Algorithm::Hybrid,
            hybrid_threshold: threshold,
            parallel: false,
        };
        let mut found = find_cliques_with(&graph, &config).unwrap();
        for clique in &mut found {
            clique.sort_unstable();
        }
        found.sort();
        prop_assert_eq!(found, brute_force(&graph));
    }

    #[test]
    fn matrix_and_list_forms_agree(graph in graph_strategy()) {
        let n = graph.vertex_count();
        let rows: Vec<Vec<bool>> = (0..n)
            .map(|u| (0..n).map(|v| graph.adjacent(u, v)).collect())
            .collect();
        let from_rows = Graph::from_matrix_rows(&rows).unwrap();
        let lists: Vec<Vec<usize>> = (0..n).map(|v| graph.neighbors(v).to_vec()).collect();
        let from_lists = Graph::from_adjacency_list(&lists).unwrap();
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(
                find_cliques(&from_rows, algorithm),
                find_cliques(&from_lists, algorithm)
            );
        }
    }
}
