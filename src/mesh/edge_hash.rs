// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Chained hash table from an unordered vertex pair to the point created on
//! that edge.

use crate::{error::AllocError, mesh::arena::grown_capacity};

const KA: usize = 7;
const KB: usize = 11;

#[derive(Debug, Clone, Copy)]
struct HashEdge {
    low: usize,
    high: usize,
    point: usize,
    next: Option<usize>,
}

/// Pass-scoped edge table. Each edge is stored at most once and lookups do
/// not depend on the order of the endpoints.
#[derive(Debug)]
pub struct EdgeHash {
    heads: Vec<Option<usize>>,
    entries: Vec<HashEdge>,
    capacity: usize,
    max_items: usize,
    gap: f64,
}

#[inline]
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

impl EdgeHash {
    /// `head_slots` buckets, room for `capacity` entries before the first
    /// reallocation and never more than `max_items` entries.
    pub fn new(head_slots: usize, capacity: usize, max_items: usize, gap: f64) -> Result<Self, AllocError> {
        let head_slots = head_slots.max(1);
        let capacity = capacity.min(max_items);

        let mut heads = Vec::new();
        heads
            .try_reserve_exact(head_slots)
            .map_err(|source| AllocError::OutOfMemory {
                kind: "edge hash bucket",
                requested: head_slots,
                source,
            })?;
        heads.resize(head_slots, None);

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|source| AllocError::OutOfMemory {
                kind: "edge hash entry",
                requested: capacity,
                source,
            })?;

        Ok(Self {
            heads,
            entries,
            capacity,
            max_items,
            gap,
        })
    }

    #[inline]
    fn bucket(&self, low: usize, high: usize) -> usize {
        KA.wrapping_mul(low).wrapping_add(KB.wrapping_mul(high)) % self.heads.len()
    }

    fn find(&self, low: usize, high: usize) -> Option<&HashEdge> {
        let mut cur = self.heads[self.bucket(low, high)];
        while let Some(idx) = cur {
            let e = &self.entries[idx];
            if e.low == low && e.high == high {
                return Some(e);
            }
            cur = e.next;
        }
        None
    }

    /// Stores `point` for edge `(a, b)`. Returns `Ok(false)` if the edge is
    /// already known; the first mapping is kept.
    pub fn insert(&mut self, a: usize, b: usize, point: usize) -> Result<bool, AllocError> {
        let (low, high) = ordered(a, b);
        if self.find(low, high).is_some() {
            return Ok(false);
        }

        if self.entries.len() >= self.capacity {
            let next = grown_capacity(self.capacity, self.gap, self.max_items).ok_or(
                AllocError::Exhausted {
                    kind: "edge hash entry",
                    max: self.max_items,
                },
            )?;
            self.entries
                .try_reserve_exact(next - self.entries.len())
                .map_err(|source| AllocError::OutOfMemory {
                    kind: "edge hash entry",
                    requested: next,
                    source,
                })?;
            self.capacity = next;
        }

        let key = self.bucket(low, high);
        let idx = self.entries.len();
        self.entries.push(HashEdge {
            low,
            high,
            point,
            next: self.heads[key],
        });
        self.heads[key] = Some(idx);
        Ok(true)
    }

    /// Point created on edge `(a, b)`, in either order.
    pub fn get(&self, a: usize, b: usize) -> Option<usize> {
        let (low, high) = ordered(a, b);
        self.find(low, high).map(|e| e.point)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored `(low, high, point)` triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.entries.iter().map(|e| (e.low, e.high, e.point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_lookup() {
        let mut hash = EdgeHash::new(4, 8, 64, 0.2).unwrap();
        assert!(hash.insert(3, 9, 100).unwrap());
        assert_eq!(hash.get(3, 9), Some(100));
        assert_eq!(hash.get(9, 3), Some(100));
        assert_eq!(hash.get(3, 8), None);
    }

    #[test]
    fn second_insert_is_ignored() {
        let mut hash = EdgeHash::new(4, 8, 64, 0.2).unwrap();
        assert!(hash.insert(1, 2, 10).unwrap());
        assert!(!hash.insert(2, 1, 11).unwrap());
        assert_eq!(hash.get(1, 2), Some(10));
        assert_eq!(hash.len(), 1);
    }

    #[test]
    fn collisions_are_chained() {
        // a single bucket forces every edge into the same chain
        let mut hash = EdgeHash::new(1, 2, 64, 0.2).unwrap();
        for i in 0..20 {
            assert!(hash.insert(i, i + 1, 1000 + i).unwrap());
        }
        for i in 0..20 {
            assert_eq!(hash.get(i + 1, i), Some(1000 + i));
        }
    }

    #[test]
    fn exhaustion_fails() {
        let mut hash = EdgeHash::new(2, 1, 2, 0.2).unwrap();
        hash.insert(0, 1, 5).unwrap();
        hash.insert(1, 2, 6).unwrap();
        assert!(matches!(
            hash.insert(2, 3, 7),
            Err(AllocError::Exhausted { max: 2, .. })
        ));
        assert_eq!(hash.get(2, 3), None);
    }
}
