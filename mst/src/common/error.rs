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

use thiserror::Error;

use crate::DefInt;

/// Everything that can end a Kruskal run early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A vertex id outside the graph's universe was referenced.
    #[error("vertex {vertex} is outside the vertex universe")]
    InvalidVertex { vertex: DefInt },

    /// `extract_min` was called on an empty heap.
    #[error("cannot extract from an empty heap")]
    EmptyHeap,

    /// The heap ran dry before the tree spanned every vertex.
    #[error("graph is disconnected: accepted {accepted} of {required} edges \
        before running out of candidates")]
    InsufficientEdges { accepted: usize, required: usize },

    /// An insert would grow the heap past its configured bound.
    #[error("heap capacity of {capacity} edges exceeded")]
    CapacityExceeded { capacity: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
