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

use std::collections::HashMap;

use isocut::AllocError;
use isocut::mesh::edge_hash::EdgeHash;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn matches_a_map_under_growth() {
    let mut rng = StdRng::seed_from_u64(42);
    // deliberately undersized so the table has to grow
    let mut hash = EdgeHash::new(8, 4, usize::MAX, 0.2).unwrap();
    let mut reference = HashMap::new();

    for point in 0..500 {
        let a = rng.random_range(0..60usize);
        let b = rng.random_range(0..60usize);
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        let fresh = !reference.contains_key(&key);
        reference.entry(key).or_insert(point);
        assert_eq!(hash.insert(a, b, point).unwrap(), fresh);
    }

    assert_eq!(hash.len(), reference.len());
    for (&(a, b), &point) in &reference {
        assert_eq!(hash.get(a, b), Some(point));
        assert_eq!(hash.get(b, a), Some(point));
    }
    assert_eq!(hash.get(60, 61), None);
}

#[test]
fn item_limit_is_enforced() {
    let mut hash = EdgeHash::new(2, 1, 2, 0.2).unwrap();
    assert!(hash.insert(0, 1, 10).unwrap());
    assert!(hash.insert(1, 2, 11).unwrap());
    // already known edges never need room
    assert!(!hash.insert(2, 1, 12).unwrap());
    assert!(matches!(
        hash.insert(2, 3, 13),
        Err(AllocError::Exhausted { max: 2, .. })
    ));
    assert_eq!(hash.get(1, 2), Some(11));
    assert_eq!(hash.iter().count(), 2);
}
