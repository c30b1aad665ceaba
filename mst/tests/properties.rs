// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use proptest::prelude::*;

use mst::{run, DisjointSet, Edge, EngineError, Graph, MinHeap};
use mst::benchmarks::min_span_tree::check::{check, reference_weight, total_weight};

/// A connected graph: a random spanning path plus random extra edges.
fn connected_graph() -> impl Strategy<Value = Graph<u32>> {
    (2usize..24)
        .prop_flat_map(|n| {
            let path = prop::collection::vec(0u32..50, n - 1);
            let extra = prop::collection::vec((0..n as u32, 0..n as u32, 0u32..50), 0..3 * n);
            (Just(n), path, extra)
        })
        .prop_map(|(n, path, extra)| {
            let mut g = Graph::new(n);
            for (i, w) in path.into_iter().enumerate() {
                g.insert_edge(i as u32, i as u32 + 1, w);
            }
            extra.into_iter().for_each(|(u, v, w)| g.insert_edge(u, v, w));
            g
        })
}

#[derive(Clone, Debug)]
enum HeapOp { Insert(i32), Extract }

fn heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        2 => (-100i32..100).prop_map(HeapOp::Insert),
        1 => Just(HeapOp::Extract),
    ]
}

fn is_heap(es: &[Edge<i32>]) -> bool {
    (1..es.len()).all(|i| es[(i - 1) / 2].weight <= es[i].weight)
}

proptest! {
    #[test]
    fn heap_root_is_always_minimum(ops in prop::collection::vec(heap_op(), 0..200)) {
        let mut h = MinHeap::new();
        let mut shadow: Vec<i32> = vec![];
        for op in ops {
            match op {
                HeapOp::Insert(w) => {
                    h.insert(Edge::new(0, 0, w)).unwrap();
                    shadow.push(w);
                }
                HeapOp::Extract => {
                    let min = shadow.iter().copied().min();
                    match min {
                        Some(m) => {
                            prop_assert_eq!(h.extract_min().unwrap().weight, m);
                            let at = shadow.iter().position(|&w| w == m).unwrap();
                            shadow.swap_remove(at);
                        }
                        None => { prop_assert_eq!(h.extract_min(), Err(EngineError::EmptyHeap)); }
                    }
                }
            }
            prop_assert!(is_heap(h.as_slice()));
            prop_assert_eq!(h.peek().map(|e| e.weight), shadow.iter().copied().min());
        }
    }

    #[test]
    fn tree_spans_and_is_minimum(g in connected_graph()) {
        let r = run(&g).unwrap();
        prop_assert_eq!(r.len(), g.num_vertices() - 1);

        let mut sets = DisjointSet::new(g.num_vertices());
        for e in &r {
            prop_assert!(!sets.same_set(e.start, e.end).unwrap());
            sets.union(e.start, e.end).unwrap();
        }
        for v in 1..g.num_vertices() as u32 {
            prop_assert!(sets.same_set(0, v).unwrap());
        }

        prop_assert_eq!(Some(total_weight(&r)), reference_weight(&g));
        prop_assert!(check(&g, &r));
    }

    #[test]
    fn repeated_union_leaves_others_alone(
        n in 3usize..40,
        seed in prop::collection::vec((0u32..40, 0u32..40), 0..40),
        a in 0u32..40, b in 0u32..40, c in 0u32..40,
    ) {
        let n32 = n as u32;
        let (a, b, c) = (a % n32, b % n32, c % n32);
        let mut ds = DisjointSet::new(n);
        seed.into_iter()
            .filter(|&(u, v)| u < n32 && v < n32)
            .for_each(|(u, v)| ds.union(u, v).unwrap());

        let third = ds.find(c).unwrap();
        let untouched = third != ds.find(a).unwrap() && third != ds.find(b).unwrap();

        ds.union(a, b).unwrap();
        prop_assert_eq!(ds.find(a).unwrap(), ds.find(b).unwrap());
        ds.union(a, b).unwrap();
        prop_assert_eq!(ds.find(a).unwrap(), ds.find(b).unwrap());
        if untouched { prop_assert_eq!(ds.find(c).unwrap(), third); }
    }

    #[test]
    fn splitting_a_graph_is_detected(g in connected_graph(), shift in 1usize..5) {
        // shifting every id up leaves the low ids isolated
        let n = g.num_vertices() + shift;
        let shifted = Graph::from_edges(
            n,
            0,
            g.edges().iter().map(|e| (e.start + shift as u32, e.end + shift as u32, e.weight)),
        );
        prop_assert_eq!(
            run(&shifted),
            Err(EngineError::InsufficientEdges { accepted: g.num_vertices() - 1, required: n - 1 })
        );
    }
}
