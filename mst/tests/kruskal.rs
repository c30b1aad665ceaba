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

use mst::{run, run_with, Collect, Edge, EngineConfig, EngineError, Graph};
use mst::benchmarks::min_span_tree::check::{check, total_weight};
use mst::common::fixture::{reference_graph, MST_WEIGHT, NUM_VERTICES};


#[test]
fn reference_graph_tree() {
    let g = reference_graph();
    let r = run(&g).unwrap();
    assert_eq!(r.len(), NUM_VERTICES - 1);
    assert_eq!(r[0], Edge::new(5, 2, 1));
    assert_eq!(total_weight(&r), MST_WEIGHT);
    assert!(check(&g, &r));
}


#[test]
fn reference_graph_acceptance_order() {
    let r = run(&reference_graph()).unwrap();
    let got: Vec<_> = r.iter().map(|e| (e.start, e.end, e.weight)).collect();
    assert_eq!(got, vec![
        (5, 2, 1), (3, 4, 2), (1, 2, 3), (2, 4, 4), (3, 8, 5),
        (7, 3, 6), (6, 2, 7), (9, 10, 10), (8, 10, 15),
    ]);
    assert!(r.windows(2).all(|w| w[0].weight <= w[1].weight));
}


#[test]
fn reporter_sees_every_acceptance() {
    let g = reference_graph();
    let mut c = Collect::default();
    let r = run_with(&g, &EngineConfig::default(), &mut c).unwrap();
    assert_eq!(c.edges, r);
    assert_eq!(c.finished, Some(NUM_VERTICES - 1));
}


#[test]
fn disconnected_graph_is_detected() {
    let g = Graph::from_edges(4, 0, [(0, 1, 1), (2, 3, 2), (1, 0, 3)]);
    assert_eq!(
        run(&g),
        Err(EngineError::InsufficientEdges { accepted: 2, required: 3 })
    );
}


#[test]
fn isolated_vertex_is_detected() {
    // vertex 0 is outside every edge of the 1-based fixture
    let g = Graph::from_edges(NUM_VERTICES + 1, 0, mst::common::fixture::EDGES);
    assert_eq!(
        run(&g),
        Err(EngineError::InsufficientEdges { accepted: 9, required: 10 })
    );
}


#[test]
fn self_loops_and_duplicates_are_tolerated() {
    let g = Graph::from_edges(3, 0, [(0, 0, 0), (0, 1, 2), (1, 0, 2), (2, 2, 1), (1, 2, 3)]);
    let r = run(&g).unwrap();
    assert_eq!(r, vec![Edge::new(0, 1, 2), Edge::new(1, 2, 3)]);
}


#[test]
fn vertex_outside_universe_is_invalid() {
    let g = Graph::from_edges(3, 0, [(0, 1, 1), (1, 7, 2)]);
    assert_eq!(run(&g), Err(EngineError::InvalidVertex { vertex: 7 }));

    let g = Graph::from_edges(3, 1, [(0, 1, 1), (1, 2, 2)]);
    assert_eq!(run(&g), Err(EngineError::InvalidVertex { vertex: 0 }));
}


#[test]
fn heap_capacity_is_enforced() {
    let g = reference_graph();
    let config = EngineConfig { heap_capacity: Some(10) };
    assert_eq!(
        run_with(&g, &config, &mut ()),
        Err(EngineError::CapacityExceeded { capacity: 10 })
    );
    let config = EngineConfig { heap_capacity: Some(100) };
    assert!(run_with(&g, &config, &mut ()).is_ok());
}


#[test]
fn trivial_graphs() {
    let empty: Graph = Graph::new(0);
    assert_eq!(run(&empty), Ok(vec![]));

    let single = Graph::from_edges(1, 0, [(0, 0, 5)]);
    assert_eq!(run(&single), Ok(vec![]));
}


#[test]
fn float_weights() {
    let g = Graph::from_edges(3, 0, [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 0.75)]);
    let r = run(&g).unwrap();
    assert_eq!(total_weight(&r), 0.75);
}
