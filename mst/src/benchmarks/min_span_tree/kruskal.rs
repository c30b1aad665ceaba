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

use crate::{DefInt, DefWeight};
use crate::algorithm::min_heap::MinHeap;
use crate::algorithm::union_find::DisjointSet;
use crate::common::error::{EngineError, Result};
use crate::common::graph::{Edge, Graph, Weight};

/// Receives the edges of the tree as they are accepted.
pub trait Reporter<W> {
    fn accept(&mut self, _e: &Edge<W>) {}

    /// Called once the tree is complete with the number of accepted edges.
    fn finish(&mut self, _accepted: usize) {}
}

impl<W> Reporter<W> for () {}

/// Keeps a copy of every reported edge.
#[derive(Clone, Debug)]
pub struct Collect<W> {
    pub edges: Vec<Edge<W>>,
    pub finished: Option<usize>,
}

impl<W> Default for Collect<W> {
    fn default() -> Self { Self { edges: vec![], finished: None } }
}

impl<W: Copy> Reporter<W> for Collect<W> {
    fn accept(&mut self, e: &Edge<W>) { self.edges.push(*e); }

    fn finish(&mut self, accepted: usize) { self.finished = Some(accepted); }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on the heap; `None` sizes it to the graph's edge count.
    pub heap_capacity: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    Loading,
    Selecting,
    Done,
    /// A step failed; every later step repeats the error until `restart`.
    Failed(EngineError),
}

/// One run of Kruskal's algorithm over a borrowed graph.
///
/// ```
/// use mst::{Graph, KruskalEngine, EngineConfig};
///
/// let g = Graph::from_edges(3, 0, [(0, 1, 4), (1, 2, 1), (0, 2, 2)]);
/// let mut engine = KruskalEngine::new(&g, &EngineConfig::default());
/// engine.load().unwrap();
/// engine.select(&mut ()).unwrap();
/// let w: i32 = engine.accepted().iter().map(|e| e.weight).sum();
/// assert_eq!(w, 3);
/// ```
pub struct KruskalEngine<'g, W = DefWeight> {
    g: &'g Graph<W>,
    sets: DisjointSet,
    heap: MinHeap<W>,
    accepted: Vec<Edge<W>>,
    phase: Phase,
}

impl<'g, W: Weight> KruskalEngine<'g, W> {
    pub fn new(g: &'g Graph<W>, config: &EngineConfig) -> Self {
        let capacity = config.heap_capacity.unwrap_or(g.num_edges());
        Self {
            g,
            sets: DisjointSet::new(g.num_vertices()),
            heap: MinHeap::bounded(capacity),
            accepted: Vec::with_capacity(g.tree_size()),
            phase: Phase::Init,
        }
    }

    pub const fn phase(&self) -> Phase { self.phase }

    pub fn accepted(&self) -> &[Edge<W>] { &self.accepted }

    pub fn into_edges(self) -> Vec<Edge<W>> { self.accepted }

    /// Drops all progress so the same graph can be run again.
    pub fn restart(&mut self) {
        self.sets.reset(self.g.num_vertices());
        self.heap.clear();
        self.accepted.clear();
        self.phase = Phase::Init;
    }

    fn fail(&mut self, r: Result<()>) -> Result<()> {
        if let Err(e) = r { self.phase = Phase::Failed(e); }
        r
    }

    /// Pushes every edge of the graph onto the heap, in graph order.
    pub fn load(&mut self) -> Result<()> {
        match self.phase {
            Phase::Init => {}
            Phase::Failed(e) => return Err(e),
            _ => return Ok(()),
        }
        self.phase = Phase::Loading;
        let r = self.load_edges();
        self.fail(r)?;
        verbose_println!("loaded {} edges", self.heap.len());
        self.phase = Phase::Selecting;
        Ok(())
    }

    fn load_edges(&mut self) -> Result<()> {
        for &e in self.g.edges() {
            self.heap.insert(e)?;
        }
        Ok(())
    }

    fn root(&self, v: DefInt) -> Result<DefInt> {
        self.sets.find(self.g.offset(v)? as DefInt)
    }

    /// Grows the tree until it spans the graph. Loads the heap first if
    /// [`KruskalEngine::load`] has not been called.
    ///
    /// Fails with [`EngineError::InsufficientEdges`] when the heap runs out
    /// first, which happens exactly when the graph is disconnected.
    pub fn select<R: Reporter<W>>(&mut self, reporter: &mut R) -> Result<()> {
        match self.phase {
            Phase::Init => self.load()?,
            Phase::Failed(e) => return Err(e),
            _ => {}
        }
        let r = self.select_edges(reporter);
        self.fail(r)?;
        self.phase = Phase::Done;
        reporter.finish(self.accepted.len());
        Ok(())
    }

    fn select_edges<R: Reporter<W>>(&mut self, reporter: &mut R) -> Result<()> {
        let required = self.g.tree_size();

        while self.accepted.len() < required {
            if self.heap.is_empty() {
                return Err(EngineError::InsufficientEdges {
                    accepted: self.accepted.len(),
                    required,
                });
            }
            let e = self.heap.extract_min()?;
            let (uset, vset) = (self.root(e.start)?, self.root(e.end)?);
            if uset != vset {
                reporter.accept(&e);
                self.accepted.push(e);
                self.sets.union(uset, vset)?;
            } else {
                verbose_println!("cycle edge ({},{}) {} skipped", e.start, e.end, e.weight);
            }
        }
        Ok(())
    }
}

pub fn run<W: Weight>(g: &Graph<W>) -> Result<Vec<Edge<W>>> {
    run_with(g, &EngineConfig::default(), &mut ())
}

pub fn run_with<W, R>(
    g: &Graph<W>,
    config: &EngineConfig,
    reporter: &mut R
) -> Result<Vec<Edge<W>>>
where
    W: Weight,
    R: Reporter<W>,
{
    let mut engine = KruskalEngine::new(g, config);
    engine.load()?;
    engine.select(reporter)?;
    Ok(engine.into_edges())
}
