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

//! Kruskal's minimum spanning tree over a weighted edge list.
//!
//! The engine loads every edge of a [`Graph`] into a [`MinHeap`] and grows
//! the tree greedily, using a [`DisjointSet`] to reject cycle edges.

#[macro_use]
pub mod macros;
pub mod common;
pub mod algorithm;
pub mod benchmarks;

pub use common::error::EngineError;
pub use common::graph::{Edge, Graph, Weight};
pub use algorithm::union_find::DisjointSet;
pub use algorithm::min_heap::MinHeap;
pub use benchmarks::min_span_tree::kruskal::{
    run, run_with, Collect, EngineConfig, KruskalEngine, Phase, Reporter,
};

/// Vertex identifier.
pub type DefInt = u32;
/// Signed counterpart of [`DefInt`], used where a negative root marker is needed.
pub type DefIntS = i64;
/// Default edge weight.
pub type DefWeight = i64;
