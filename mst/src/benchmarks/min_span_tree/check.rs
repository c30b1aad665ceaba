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

use std::cmp::Ordering;

use crate::DefInt;
use crate::algorithm::union_find::DisjointSet;
use crate::common::error::Result;
use crate::common::graph::{Edge, Graph, Weight};

#[inline(always)]
fn cmp_weight<W: Weight>(a: &Edge<W>, b: &Edge<W>) -> Ordering {
    a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal)
}

pub fn total_weight<W: Weight>(es: &[Edge<W>]) -> W {
    es.iter().fold(W::zero(), |acc, e| acc + e.weight)
}

fn roots<W: Weight>(g: &Graph<W>, sets: &DisjointSet, e: &Edge<W>)
    -> Result<(DefInt, DefInt)>
{
    Ok((
        sets.find(g.offset(e.start)? as DefInt)?,
        sets.find(g.offset(e.end)? as DefInt)?,
    ))
}

fn sorted_tree<W: Weight>(g: &Graph<W>) -> Result<Vec<Edge<W>>> {
    let mut es = g.edges().to_vec();
    es.sort_by(cmp_weight);

    let mut sets = DisjointSet::new(g.num_vertices());
    let mut tree = Vec::with_capacity(g.tree_size());
    for e in es {
        if tree.len() == g.tree_size() { break; }
        let (u, v) = roots(g, &sets, &e)?;
        if u != v {
            sets.union(u, v)?;
            tree.push(e);
        }
    }
    Ok(tree)
}

/// MST weight computed independently of the heap, by sorting the edge list.
/// `None` if the graph is disconnected or references a vertex outside its
/// universe.
pub fn reference_weight<W: Weight>(g: &Graph<W>) -> Option<W> {
    let tree = sorted_tree(g).ok()?;
    (tree.len() == g.tree_size()).then(|| total_weight(&tree))
}

/// Checks that `out` is a minimum spanning tree of `g`, printing the first
/// problem found.
pub fn check<W: Weight>(g: &Graph<W>, out: &[Edge<W>]) -> bool {
    let n = g.tree_size();
    if out.len() != n {
        println!(
            "Wrong edge count: MST has {} edges but algorithm returned {} edges.",
            n,
            out.len()
        );
        return false;
    }

    let mut used = vec![false; g.num_edges()];
    for e in out {
        let hit = (0..g.num_edges()).position(|i| !used[i] && g[i] == *e);
        match hit {
            Some(i) => used[i] = true,
            None => {
                println!("Edge ({},{}) {} is not in the graph", e.start, e.end, e.weight);
                return false;
            }
        }
    }

    // n-1 edges with no cycle span the graph
    let mut sets = DisjointSet::new(g.num_vertices());
    for e in out {
        match roots(g, &sets, e) {
            Ok((u, v)) if u != v => {
                if sets.union(u, v).is_err() { return false; }
            }
            Ok(_) => {
                println!("Result is not a spanning tree: ({},{}) closes a cycle", e.start, e.end);
                return false;
            }
            Err(err) => {
                println!("Result is not a spanning tree: {err}");
                return false;
            }
        }
    }

    let got = total_weight(out);
    match reference_weight(g) {
        Some(w) if w == got => true,
        Some(w) => {
            println!("Result is not minimum: weight {got}, expected {w}");
            false
        }
        None => {
            println!("Graph has no spanning tree");
            false
        }
    }
}
