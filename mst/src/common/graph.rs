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

use std::fmt;
use std::ops::Index;

use num_traits::Zero;

use crate::{DefInt, DefWeight};
use super::error::{EngineError, Result};

/// Anything that can weigh an edge: copyable, ordered and summable.
pub trait Weight: Copy + PartialOrd + Zero + fmt::Debug + fmt::Display {}

impl<T> Weight for T
where T: Copy + PartialOrd + Zero + fmt::Debug + fmt::Display {}

// **************************************************************
//    WEIGHTED EDGE
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<W = DefWeight> {
    pub start: DefInt,
    pub end: DefInt,
    pub weight: W,
}

impl<W> Edge<W> {
    pub const fn new(start: DefInt, end: DefInt, weight: W) -> Self
    { Self { start, end, weight } }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.end, self.weight)
    }
}

// **************************************************************
//    WEIGHTED EDGE LIST GRAPH
// **************************************************************

/// An unordered list of weighted edges over the vertex universe
/// `[base, base + n)`.
///
/// Edges are not checked against the universe when inserted; use
/// [`Graph::validate`] before a run to catch bad ids up front.
#[derive(Clone, Debug)]
pub struct Graph<W = DefWeight> {
    pub es: Vec<Edge<W>>,
    pub n: usize,
    pub base: DefInt,
}

impl<W: Weight> Graph<W> {
    pub fn new(n: usize) -> Self { Self::with_base(n, 0) }

    pub fn with_base(n: usize, base: DefInt) -> Self {
        Self { es: vec![], n, base }
    }

    pub fn from_edges<I>(n: usize, base: DefInt, edges: I) -> Self
    where I: IntoIterator<Item = (DefInt, DefInt, W)>
    {
        let mut g = Self::with_base(n, base);
        edges
            .into_iter()
            .for_each(|(u, v, w)| g.insert_edge(u, v, w));
        g
    }

    pub fn insert_edge(&mut self, start: DefInt, end: DefInt, weight: W) {
        self.es.push(Edge::new(start, end, weight));
    }

    pub const fn num_vertices(&self) -> usize { self.n }

    pub fn num_edges(&self) -> usize { self.es.len() }

    pub fn edges(&self) -> &[Edge<W>] { &self.es }

    pub fn contains(&self, v: DefInt) -> bool { self.offset(v).is_ok() }

    /// Maps `v` to its 0-based position in the universe.
    pub fn offset(&self, v: DefInt) -> Result<usize> {
        v.checked_sub(self.base)
            .map(|o| o as usize)
            .filter(|&o| o < self.n)
            .ok_or(EngineError::InvalidVertex { vertex: v })
    }

    /// Fails on the first edge with an endpoint outside the universe.
    pub fn validate(&self) -> Result<()> {
        for e in &self.es {
            self.offset(e.start)?;
            self.offset(e.end)?;
        }
        Ok(())
    }

    /// Number of edges a spanning tree of this graph has.
    pub fn tree_size(&self) -> usize { self.n.saturating_sub(1) }
}

impl<W> Index<usize> for Graph<W> {
    type Output = Edge<W>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.es[index]
    }
}
