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

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::{
    error::{MeshError, MeshResult},
    mesh::basic_types::{Mesh, TAG_BDY, TAG_REF},
    numeric::scalar::Scalar,
};

impl<T: Scalar> Mesh<T> {
    /// Copies the references of the input edges onto the matching triangle
    /// edges. Returns the number of triangle edges updated; input edges that
    /// match no triangle are skipped.
    pub fn assign_boundary_edges(&mut self) -> MeshResult<usize> {
        if self.edges.is_empty() {
            return Ok(0);
        }

        let mut lookup: AHashMap<(usize, usize), Vec<(usize, usize)>> = AHashMap::default();
        for (k, t) in self.triangles.iter() {
            for i in 0..3 {
                let (a, b) = t.edge(i);
                let key = if a < b { (a, b) } else { (b, a) };
                lookup.entry(key).or_default().push((k, i));
            }
        }

        let mut assigned = 0;
        for e in &self.edges {
            for p in [e.a, e.b] {
                if !self.points.is_live(p) {
                    return Err(MeshError::InvalidVertex {
                        index: p,
                        len: self.points.len(),
                    });
                }
            }
            let key = if e.a < e.b { (e.a, e.b) } else { (e.b, e.a) };
            let Some(owners) = lookup.get(&key) else {
                warn!(a = e.a, b = e.b, reference = e.reference, "edge matches no triangle");
                continue;
            };
            for &(k, i) in owners {
                let t = &mut self.triangles[k];
                t.edge_refs[i] = e.reference;
                t.edge_tags[i] |= TAG_REF | TAG_BDY;
                assigned += 1;
            }
        }

        debug!(edges = self.edges.len(), assigned, "boundary references transferred");
        Ok(assigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::point::Point2, numeric::Real64};

    #[test]
    fn references_reach_both_sides() {
        let mut mesh = Mesh::<Real64>::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            mesh.add_vertex(Point2::from_vals(p)).unwrap();
        }
        mesh.add_triangle(0, 1, 2, 1).unwrap();
        mesh.add_triangle(0, 2, 3, 1).unwrap();
        mesh.add_edge(2, 0, 5).unwrap();
        mesh.add_edge(0, 1, 7).unwrap();
        mesh.add_edge(1, 3, 9).unwrap();

        assert_eq!(mesh.assign_boundary_edges().unwrap(), 3);
        assert_eq!(mesh.triangles[0].edge_refs, [0, 5, 7]);
        assert_eq!(mesh.triangles[1].edge_refs, [0, 0, 5]);
        assert_eq!(mesh.triangles[0].edge_tags[2], TAG_REF | TAG_BDY);
    }
}
