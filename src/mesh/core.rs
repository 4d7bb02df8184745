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
    error::{AllocError, MeshError, MeshResult},
    geometry::{point::Point2, util::orient2d},
    impl_mesh,
    mesh::{arena::Arena, basic_types::*},
    numeric::scalar::Scalar,
};

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self::with_limits(MeshLimits::default())
    }

    pub fn with_limits(limits: MeshLimits) -> Self {
        Self {
            points: Arena::new("point", 16, limits.max_points, limits.gap),
            triangles: Arena::new("triangle", 16, limits.max_triangles, limits.gap),
            quads: Vec::new(),
            edges: Vec::new(),
            adjacency: None,
        }
    }

    pub fn add_vertex(&mut self, position: Point2<T>) -> Result<usize, AllocError> {
        self.points.push(Vertex::new(position))
    }

    /// Adds the counter-clockwise triangle `(a, b, c)` with region `reference`.
    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize, reference: i32) -> MeshResult<usize> {
        self.check_cell(&[a, b, c])?;
        self.adjacency = None;
        Ok(self.triangles.push(Triangle::new([a, b, c], reference))?)
    }

    pub fn add_quad(&mut self, v: [usize; 4], reference: i32) -> MeshResult<usize> {
        self.check_cell(&v)?;
        self.quads.push(Quad { v, reference });
        Ok(self.quads.len() - 1)
    }

    /// Registers a referenced edge, transferred to the triangles by
    /// [`assign_boundary_edges`](Self::assign_boundary_edges).
    pub fn add_edge(&mut self, a: usize, b: usize, reference: i32) -> MeshResult<()> {
        self.check_cell(&[a, b])?;
        self.edges.push(Edge { a, b, reference });
        Ok(())
    }

    fn check_cell(&self, v: &[usize]) -> MeshResult<()> {
        for (i, &p) in v.iter().enumerate() {
            if !self.points.is_live(p) {
                return Err(MeshError::InvalidVertex {
                    index: p,
                    len: self.points.len(),
                });
            }
            if v[..i].contains(&p) {
                return Err(MeshError::RepeatedVertex { index: p });
            }
        }
        Ok(())
    }

    pub fn point_count(&self) -> usize {
        self.points.live_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.live_count()
    }

    pub fn is_hybrid(&self) -> bool {
        !self.quads.is_empty()
    }

    pub fn position(&self, p: usize) -> &Point2<T> {
        &self.points[p].position
    }
}

impl_mesh! {
    /// Twice the signed area of triangle `k`.
    pub fn signed_area2(&self, k: usize) -> T {
        let [a, b, c] = self.triangles[k].v;
        orient2d(self.position(a), self.position(b), self.position(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Real64;

    #[test]
    fn rejects_invalid_cells() {
        let mut mesh = Mesh::<Real64>::new();
        let a = mesh.add_vertex(Point2::from_vals([0.0, 0.0])).unwrap();
        let b = mesh.add_vertex(Point2::from_vals([1.0, 0.0])).unwrap();

        assert!(matches!(
            mesh.add_triangle(a, b, 7, 0),
            Err(MeshError::InvalidVertex { index: 7, .. })
        ));
        assert!(matches!(
            mesh.add_triangle(a, b, a, 0),
            Err(MeshError::RepeatedVertex { index: 0 })
        ));
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn triangle_limit_is_enforced() {
        let mut mesh = Mesh::<Real64>::with_limits(MeshLimits {
            max_points: 8,
            max_triangles: 1,
            gap: 0.2,
        });
        let a = mesh.add_vertex(Point2::from_vals([0.0, 0.0])).unwrap();
        let b = mesh.add_vertex(Point2::from_vals([1.0, 0.0])).unwrap();
        let c = mesh.add_vertex(Point2::from_vals([0.0, 1.0])).unwrap();
        mesh.add_triangle(a, b, c, 1).unwrap();
        assert!(matches!(
            mesh.add_triangle(a, c, b, 1),
            Err(MeshError::Alloc(AllocError::Exhausted { kind: "triangle", .. }))
        ));
        assert_eq!(mesh.signed_area2(0), Real64(1.0));
    }
}
