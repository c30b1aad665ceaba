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

//! The 10-vertex reference network, vertices numbered from 1.

use crate::{DefInt, DefWeight};
use super::graph::Graph;

pub const NUM_VERTICES: usize = 10;
pub const FIRST_VERTEX: DefInt = 1;

/// Weight of the minimum spanning tree of [`reference_graph`].
pub const MST_WEIGHT: DefWeight = 53;

pub const EDGES: [(DefInt, DefInt, DefWeight); 20] = [
    (1, 6, 11),
    (1, 2, 3),
    (1, 7, 12),
    (6, 5, 9),
    (6, 2, 7),
    (7, 2, 8),
    (5, 2, 1),
    (7, 8, 13),
    (7, 3, 6),
    (3, 2, 5),
    (3, 8, 5),
    (2, 4, 4),
    (3, 4, 2),
    (8, 4, 14),
    (5, 4, 13),
    (5, 9, 18),
    (8, 10, 15),
    (4, 10, 16),
    (5, 10, 17),
    (9, 10, 10),
];

pub fn reference_graph() -> Graph {
    Graph::from_edges(NUM_VERTICES, FIRST_VERTEX, EDGES)
}
