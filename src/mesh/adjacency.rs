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
use smallvec::SmallVec;

use crate::{
    error::{MeshError, MeshResult},
    mesh::basic_types::{Mesh, TAG_BDY},
    numeric::scalar::Scalar,
};

/// Local edge `edge` of triangle `triangle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub triangle: usize,
    pub edge: usize,
}

/// Edge-neighbour relation between triangles, indexed like the triangle table.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: Vec<[Option<EdgeRef>; 3]>,
}

impl Adjacency {
    pub fn build<T: Scalar>(mesh: &Mesh<T>) -> MeshResult<Self> {
        let mut edge2tris: AHashMap<(usize, usize), SmallVec<[EdgeRef; 2]>> =
            AHashMap::with_capacity(mesh.triangles.len() * 3);

        for (k, t) in mesh.triangles.iter() {
            for i in 0..3 {
                let (a, b) = t.edge(i);
                let key = if a < b { (a, b) } else { (b, a) };
                edge2tris
                    .entry(key)
                    .or_default()
                    .push(EdgeRef { triangle: k, edge: i });
            }
        }

        let mut neighbors = vec![[None; 3]; mesh.triangles.len()];
        for (&(a, b), tris) in edge2tris.iter() {
            match tris.as_slice() {
                [_] => {}
                [e0, e1] => {
                    neighbors[e0.triangle][e0.edge] = Some(*e1);
                    neighbors[e1.triangle][e1.edge] = Some(*e0);
                }
                _ => {
                    return Err(MeshError::NonManifoldEdge {
                        a,
                        b,
                        count: tris.len(),
                    });
                }
            }
        }

        Ok(Self { neighbors })
    }

    pub fn neighbor(&self, triangle: usize, edge: usize) -> Option<EdgeRef> {
        self.neighbors.get(triangle).and_then(|n| n[edge])
    }

    /// Edges with no neighbour across them.
    pub fn free_edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(k, n)| {
            (0..3)
                .filter(move |&i| n[i].is_none())
                .map(move |i| EdgeRef { triangle: k, edge: i })
        })
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl<T: Scalar> Mesh<T> {
    /// Rebuilds the adjacency relation and tags edges without a neighbour as
    /// boundary edges.
    pub fn hash_triangles(&mut self) -> MeshResult<()> {
        let adjacency = Adjacency::build(self)?;
        for k in 0..self.triangles.len() {
            if !self.triangles.is_live(k) {
                continue;
            }
            for i in 0..3 {
                if adjacency.neighbor(k, i).is_none() {
                    self.triangles[k].edge_tags[i] |= TAG_BDY;
                }
            }
        }
        self.adjacency = Some(adjacency);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::point::Point2, numeric::Real64};

    fn square() -> Mesh<Real64> {
        let mut mesh = Mesh::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            mesh.add_vertex(Point2::from_vals(p)).unwrap();
        }
        mesh.add_triangle(0, 1, 2, 1).unwrap();
        mesh.add_triangle(0, 2, 3, 1).unwrap();
        mesh
    }

    #[test]
    fn shared_diagonal() {
        let mut mesh = square();
        mesh.hash_triangles().unwrap();
        let adja = mesh.adjacency.as_ref().unwrap();

        // edge 1 of triangle 0 is (2, 0), edge 2 of triangle 1 is (0, 2)
        assert_eq!(adja.neighbor(0, 1), Some(EdgeRef { triangle: 1, edge: 2 }));
        assert_eq!(adja.neighbor(1, 2), Some(EdgeRef { triangle: 0, edge: 1 }));
        assert_eq!(adja.free_edges().count(), 4);
        assert_eq!(mesh.triangles[0].edge_tags[1] & TAG_BDY, 0);
        assert_ne!(mesh.triangles[0].edge_tags[0] & TAG_BDY, 0);
    }

    #[test]
    fn three_triangles_on_an_edge() {
        let mut mesh = square();
        let p = mesh.add_vertex(Point2::from_vals([2.0, 2.0])).unwrap();
        mesh.add_triangle(0, p, 2, 1).unwrap();
        assert!(matches!(
            mesh.hash_triangles(),
            Err(MeshError::NonManifoldEdge { a: 0, b: 2, count: 3 })
        ));
        assert!(mesh.adjacency.is_none());
    }
}
