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

use crate::{
    geometry::point::Point2,
    mesh::{adjacency::Adjacency, arena::{Arena, Slot}},
    numeric::scalar::Scalar,
};

/// Next local index in a triangle: edge `i` joins `v[NEXT[i]]` and `v[PREV[i]]`.
pub const NEXT: [usize; 3] = [1, 2, 0];
pub const PREV: [usize; 3] = [2, 0, 1];

/// Edge carries a user reference.
pub const TAG_REF: u8 = 1 << 0;
/// Edge lies on the domain boundary.
pub const TAG_BDY: u8 = 1 << 1;
/// Edge lies on the discretized level set.
pub const TAG_ISO: u8 = 1 << 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T: Scalar> {
    pub position: Point2<T>,
    pub reference: i32,
    pub removed: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point2<T>) -> Self {
        Self {
            position,
            reference: 0,
            removed: false,
        }
    }
}

impl<T: Scalar> Slot for Vertex<T> {
    fn is_removed(&self) -> bool {
        self.removed
    }
    fn mark_removed(&mut self) {
        self.removed = true;
    }
}

/// Counter-clockwise triangle. Local edge `i` is opposite vertex `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub v: [usize; 3],
    pub reference: i32,
    pub edge_refs: [i32; 3],
    pub edge_tags: [u8; 3],
    pub removed: bool,
}

impl Triangle {
    pub fn new(v: [usize; 3], reference: i32) -> Self {
        Self {
            v,
            reference,
            edge_refs: [0; 3],
            edge_tags: [0; 3],
            removed: false,
        }
    }

    /// Endpoints of local edge `i`, in the triangle's orientation.
    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        (self.v[NEXT[i]], self.v[PREV[i]])
    }

    /// Local index of the edge joining `a` and `b`, in either direction.
    pub fn local_edge(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|&i| {
            let (p, q) = self.edge(i);
            (p == a && q == b) || (p == b && q == a)
        })
    }
}

impl Slot for Triangle {
    fn is_removed(&self) -> bool {
        self.removed
    }
    fn mark_removed(&mut self) {
        self.removed = true;
    }
}

/// Quadrilateral cell. Only tracked so that hybrid meshes can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    pub v: [usize; 4],
    pub reference: i32,
}

/// Boundary or required edge given with the input mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub reference: i32,
}

/// Capacity limits of the point and triangle tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLimits {
    pub max_points: usize,
    pub max_triangles: usize,
    /// Fraction of the current capacity added on each reallocation.
    pub gap: f64,
}

impl Default for MeshLimits {
    fn default() -> Self {
        Self {
            max_points: 500_000,
            max_triangles: 1_000_000,
            gap: 0.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub points: Arena<Vertex<T>>,
    pub triangles: Arena<Triangle>,
    pub quads: Vec<Quad>,
    pub edges: Vec<Edge>,
    /// Triangle neighbours; dropped whenever the topology changes.
    pub adjacency: Option<Adjacency>,
}
