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

//! Index-stable growable slot storage for points and triangles.

use crate::error::AllocError;

use std::ops::{Index, IndexMut};

/// Slot content that can be marked dead without being compacted away.
pub trait Slot {
    fn is_removed(&self) -> bool;
    fn mark_removed(&mut self);
}

/// Next capacity after `current` is exhausted, or `None` once `max` is
/// reached. Grows by `gap` (a fraction of the current capacity) and by at
/// least one slot.
pub fn grown_capacity(current: usize, gap: f64, max: usize) -> Option<usize> {
    if current >= max {
        return None;
    }
    let grown = (current as f64 * (1.0 + gap.max(0.0))).ceil() as usize;
    Some(grown.max(current + 1).min(max))
}

/// Growable table whose indices never move.
///
/// The logical capacity plays the role of a preallocated table size: pushing
/// past it triggers a reallocation by the gap factor, bounded by
/// `max_slots`. Removed slots keep their index.
#[derive(Debug, Clone)]
pub struct Arena<E> {
    items: Vec<E>,
    capacity: usize,
    max_slots: usize,
    gap: f64,
    kind: &'static str,
}

impl<E: Slot> Arena<E> {
    pub fn new(kind: &'static str, capacity: usize, max_slots: usize, gap: f64) -> Self {
        let capacity = capacity.min(max_slots);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            max_slots,
            gap,
            kind,
        }
    }

    /// Number of slots in use, removed ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    pub fn push(&mut self, item: E) -> Result<usize, AllocError> {
        if self.items.len() >= self.capacity {
            self.grow()?;
        }
        let idx = self.items.len();
        self.items.push(item);
        Ok(idx)
    }

    /// Makes sure the next `n` pushes cannot fail.
    pub fn reserve(&mut self, n: usize) -> Result<(), AllocError> {
        while self.items.len() + n > self.capacity {
            self.grow()?;
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let next = grown_capacity(self.capacity, self.gap, self.max_slots).ok_or(
            AllocError::Exhausted {
                kind: self.kind,
                max: self.max_slots,
            },
        )?;
        self.items
            .try_reserve_exact(next - self.items.len())
            .map_err(|source| AllocError::OutOfMemory {
                kind: self.kind,
                requested: next,
                source,
            })?;
        tracing::debug!(kind = self.kind, from = self.capacity, to = next, "table reallocated");
        self.capacity = next;
        Ok(())
    }

    pub fn get(&self, idx: usize) -> Option<&E> {
        self.items.get(idx).filter(|e| !e.is_removed())
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut E> {
        self.items.get_mut(idx).filter(|e| !e.is_removed())
    }

    pub fn is_live(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    /// Marks `idx` removed. Returns false if it was not live.
    pub fn remove(&mut self, idx: usize) -> bool {
        match self.get_mut(idx) {
            Some(e) => {
                e.mark_removed();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &E)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_removed())
    }

    pub fn live_count(&self) -> usize {
        self.items.iter().filter(|e| !e.is_removed()).count()
    }
}

impl<E> Index<usize> for Arena<E> {
    type Output = E;
    fn index(&self, idx: usize) -> &E {
        &self.items[idx]
    }
}

impl<E> IndexMut<usize> for Arena<E> {
    fn index_mut(&mut self, idx: usize) -> &mut E {
        &mut self.items[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Cell {
        value: u32,
        removed: bool,
    }

    impl Slot for Cell {
        fn is_removed(&self) -> bool {
            self.removed
        }
        fn mark_removed(&mut self) {
            self.removed = true;
        }
    }

    fn cell(value: u32) -> Cell {
        Cell {
            value,
            removed: false,
        }
    }

    #[test]
    fn growth_by_gap() {
        assert_eq!(grown_capacity(10, 0.2, 100), Some(12));
        assert_eq!(grown_capacity(1, 0.2, 100), Some(2));
        assert_eq!(grown_capacity(0, 0.2, 100), Some(1));
        assert_eq!(grown_capacity(95, 0.2, 100), Some(100));
        assert_eq!(grown_capacity(100, 0.2, 100), None);
    }

    #[test]
    fn indices_survive_growth() {
        let mut arena = Arena::new("cell", 2, 64, 0.5);
        let ids: Vec<usize> = (0..20).map(|i| arena.push(cell(i)).unwrap()).collect();
        assert_eq!(ids, (0..20).collect::<Vec<_>>());
        assert!(arena.capacity() >= 20);
        for i in 0..20 {
            assert_eq!(arena[i].value, i as u32);
        }
    }

    #[test]
    fn exhaustion_is_an_error() {
        let mut arena = Arena::new("cell", 1, 3, 0.2);
        for i in 0..3 {
            arena.push(cell(i)).unwrap();
        }
        let err = arena.push(cell(3)).unwrap_err();
        assert!(matches!(err, AllocError::Exhausted { kind: "cell", max: 3 }));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn reserve_is_all_or_nothing() {
        let mut arena = Arena::new("cell", 1, 3, 0.2);
        arena.push(cell(0)).unwrap();
        arena.push(cell(1)).unwrap();
        assert!(arena.reserve(2).is_err());
        assert_eq!(arena.len(), 2);
        arena.reserve(1).unwrap();
        arena.push(cell(2)).unwrap();
    }

    #[test]
    fn removal_keeps_indices() {
        let mut arena = Arena::new("cell", 4, 4, 0.2);
        for i in 0..3 {
            arena.push(cell(i)).unwrap();
        }
        assert!(arena.remove(1));
        assert!(!arena.remove(1));
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.live_count(), 2);
        assert!(arena.get(1).is_none());
        assert_eq!(arena.iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);
    }
}
