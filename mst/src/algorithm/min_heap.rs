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

use crate::DefWeight;
use crate::common::error::{EngineError, Result};
use crate::common::graph::{Edge, Weight};

/// An array-backed binary min-heap of edges keyed on weight.
///
/// Slot `i` has its children at `2i+1` and `2i+2`. Equal weights never
/// trigger a move, and on sift-down the left child wins a tie between
/// siblings.
#[derive(Clone, Debug)]
pub struct MinHeap<W = DefWeight> {
    heap: Vec<Edge<W>>,
    capacity: usize,
}

impl<W: Weight> Default for MinHeap<W> {
    fn default() -> Self { Self::new() }
}

impl<W: Weight> MinHeap<W> {
    /// A heap with no size bound.
    pub fn new() -> Self { Self::bounded(usize::MAX) }

    /// A heap that refuses to hold more than `capacity` edges.
    pub fn bounded(capacity: usize) -> Self {
        Self { heap: vec![], capacity }
    }

    pub fn clear(&mut self) { self.heap.clear(); }

    pub fn len(&self) -> usize { self.heap.len() }

    pub fn is_empty(&self) -> bool { self.heap.is_empty() }

    pub const fn capacity(&self) -> usize { self.capacity }

    pub fn peek(&self) -> Option<&Edge<W>> { self.heap.first() }

    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[Edge<W>] { &self.heap }

    pub fn insert(&mut self, item: Edge<W>) -> Result<()> {
        if self.heap.len() >= self.capacity {
            return Err(EngineError::CapacityExceeded { capacity: self.capacity });
        }
        self.heap.push(item);

        let mut i = self.heap.len() - 1;
        while i > 0 && item.weight < self.heap[(i - 1) / 2].weight {
            self.heap[i] = self.heap[(i - 1) / 2];
            i = (i - 1) / 2;
        }
        self.heap[i] = item;
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<Edge<W>> {
        let last = self.heap.pop().ok_or(EngineError::EmptyHeap)?;
        if self.heap.is_empty() { return Ok(last); }

        let item = self.heap[0];
        let size = self.heap.len();
        let (mut parent, mut child) = (0, 1);
        while child < size {
            if child + 1 < size
                && self.heap[child + 1].weight < self.heap[child].weight
            {
                child += 1;
            }
            if !(self.heap[child].weight < last.weight) { break; }

            self.heap[parent] = self.heap[child];
            parent = child;
            child = 2 * child + 1;
        }
        self.heap[parent] = last;
        Ok(item)
    }
}
