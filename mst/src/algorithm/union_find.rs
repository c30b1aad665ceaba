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

use crate::{DefInt, DefIntS};
use crate::common::error::{EngineError, Result};

const ROOT: DefIntS = -1;


/// A union-find forest over `[0, n)`.
///
/// `find` walks parent links without compressing them and `union` always
/// hangs the first root under the second, so the shape of the forest only
/// depends on the order of the calls.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<DefIntS>
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self { parents: vec![ROOT; n] }
    }

    /// Makes every vertex of `[0, n)` a singleton again.
    pub fn reset(&mut self, n: usize) {
        self.parents.clear();
        self.parents.resize(n, ROOT);
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    fn is_root(&self, u: DefInt) -> bool {
        self.parents[u as usize] < 0
    }

    fn check(&self, u: DefInt) -> Result<()> {
        if (u as usize) < self.parents.len() { Ok(()) }
        else { Err(EngineError::InvalidVertex { vertex: u }) }
    }

    pub fn find(&self, mut u: DefInt) -> Result<DefInt> {
        self.check(u)?;
        while !self.is_root(u) {
            u = self.parents[u as usize] as DefInt;
        }
        Ok(u)
    }

    pub fn union(&mut self, a: DefInt, b: DefInt) -> Result<()> {
        let (ra, rb) = (self.find(a)?, self.find(b)?);
        if ra != rb { self.link(ra, rb); }
        Ok(())
    }

    pub fn same_set(&self, a: DefInt, b: DefInt) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Hangs root `u` under `v`. Both must be roots.
    fn link(&mut self, u: DefInt, v: DefInt) {
        debug_assert!(self.is_root(u) && self.is_root(v));
        self.parents[u as usize] = v as DefIntS;
    }
}
