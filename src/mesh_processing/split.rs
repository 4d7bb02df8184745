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

//! Local retriangulation of a triangle whose edges are cut by the level set.

use crate::{
    error::{AllocError, LevelSetError, LevelSetResult},
    impl_mesh,
    mesh::basic_types::{NEXT, PREV, TAG_ISO, TAG_REF, Triangle},
};

/// Which edges of a triangle carry a crossing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingPattern {
    /// No edge is crossed; the triangle is kept.
    Untouched,
    /// Only local edge `edge` is crossed; the opposite vertex lies on the
    /// level set.
    Single { edge: usize },
    /// The two edges meeting at vertex `apex` are crossed.
    Double { apex: usize },
}

impl CrossingPattern {
    /// Decodes a 3-bit edge mask, bit `i` standing for local edge `i`. All
    /// three edges crossed cannot happen for a single contour and is `None`.
    pub fn from_bits(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(CrossingPattern::Untouched),
            1 => Some(CrossingPattern::Single { edge: 0 }),
            2 => Some(CrossingPattern::Single { edge: 1 }),
            4 => Some(CrossingPattern::Single { edge: 2 }),
            6 => Some(CrossingPattern::Double { apex: 0 }),
            5 => Some(CrossingPattern::Double { apex: 1 }),
            3 => Some(CrossingPattern::Double { apex: 2 }),
            _ => None,
        }
    }

    /// Number of triangles replacing the original one.
    pub fn output_triangles(&self) -> usize {
        match self {
            CrossingPattern::Untouched => 1,
            CrossingPattern::Single { .. } => 2,
            CrossingPattern::Double { .. } => 3,
        }
    }
}

/// Edge mask of the crossing points `vx`, `vx[i]` lying on local edge `i`.
pub fn crossing_flag(vx: &[Option<usize>; 3]) -> u8 {
    vx.iter()
        .enumerate()
        .filter(|(_, p)| p.is_some())
        .fold(0, |flag, (i, _)| flag | (1 << i))
}

/// Local relabeling putting `i` first, keeping the orientation.
#[inline]
fn rotation(i: usize) -> [usize; 3] {
    [i, NEXT[i], PREV[i]]
}

/// Sub-triangle of `parent`: `v`, edge references and tags are given in the
/// parent's local positions.
fn child(parent: &Triangle, v: [usize; 3], edge_refs: [i32; 3], edge_tags: [u8; 3]) -> Triangle {
    Triangle {
        v,
        reference: parent.reference,
        edge_refs,
        edge_tags,
        removed: false,
    }
}

impl_mesh! {
    /// Splits triangle `k` whose local edge `edge` carries point `ip`.
    ///
    /// The triangle is cut along the segment joining `ip` to the opposite
    /// vertex; `k` keeps one half and the other half is appended. Returns the
    /// index of the new triangle.
    pub fn split1(&mut self, k: usize, edge: usize, ip: usize, iso_ref: Option<i32>) -> Result<usize, AllocError> {
        let tau = rotation(edge);
        let pt = self.triangles[k].clone();
        let (iso_edge_ref, iso_tag) = match iso_ref {
            Some(r) => (r, TAG_ISO | TAG_REF),
            None => (0, 0),
        };

        // (a, b, ip) in slot k, (a, ip, c) appended
        let mut v0 = pt.v;
        v0[tau[2]] = ip;
        let mut refs0 = pt.edge_refs;
        let mut tags0 = pt.edge_tags;
        refs0[tau[1]] = iso_edge_ref;
        tags0[tau[1]] = iso_tag;

        let mut v1 = pt.v;
        v1[tau[1]] = ip;
        let mut refs1 = pt.edge_refs;
        let mut tags1 = pt.edge_tags;
        refs1[tau[2]] = iso_edge_ref;
        tags1[tau[2]] = iso_tag;

        let iel = self.triangles.push(child(&pt, v1, refs1, tags1))?;
        self.triangles[k] = child(&pt, v0, refs0, tags0);
        Ok(iel)
    }

    /// Splits triangle `k` whose two edges meeting at local vertex `apex` are
    /// crossed: `ips[0]` lies on the edge after the apex edge in the local
    /// order, `ips[1]` on the one after that.
    ///
    /// `k` keeps the corner triangle at the apex; the remaining quadrilateral
    /// is cut along its shorter diagonal into two appended triangles.
    pub fn split2(&mut self, k: usize, apex: usize, ips: [usize; 2], iso_ref: Option<i32>) -> Result<[usize; 2], AllocError> {
        let tau = rotation(apex);
        let pt = self.triangles[k].clone();
        let (iso_edge_ref, iso_tag) = match iso_ref {
            Some(r) => (r, TAG_ISO | TAG_REF),
            None => (0, 0),
        };

        // m1 on edge tau[1] (c a), m2 on edge tau[2] (a b)
        let [m1, m2] = ips;
        let b = pt.v[tau[1]];
        let c = pt.v[tau[2]];

        // corner (a, m2, m1)
        let mut v0 = pt.v;
        v0[tau[1]] = m2;
        v0[tau[2]] = m1;
        let mut refs0 = pt.edge_refs;
        let mut tags0 = pt.edge_tags;
        refs0[tau[0]] = iso_edge_ref;
        tags0[tau[0]] = iso_tag;
        let corner = child(&pt, v0, refs0, tags0);

        let diag_b_m1 = self.position(b).distance_squared(self.position(m1));
        let diag_c_m2 = self.position(c).distance_squared(self.position(m2));

        let (t1, t2) = if diag_c_m2 < diag_b_m1 {
            // (m2, b, c) and (m1, m2, c)
            let mut v1 = pt.v;
            v1[tau[0]] = m2;
            let mut refs1 = pt.edge_refs;
            let mut tags1 = pt.edge_tags;
            refs1[tau[1]] = 0;
            tags1[tau[1]] = 0;

            let mut v2 = pt.v;
            v2[tau[0]] = m1;
            v2[tau[1]] = m2;
            let mut refs2 = pt.edge_refs;
            let mut tags2 = pt.edge_tags;
            refs2[tau[0]] = 0;
            tags2[tau[0]] = 0;
            refs2[tau[2]] = iso_edge_ref;
            tags2[tau[2]] = iso_tag;

            (child(&pt, v1, refs1, tags1), child(&pt, v2, refs2, tags2))
        } else {
            // (m2, b, m1) and (m1, b, c)
            let mut v1 = pt.v;
            v1[tau[0]] = m2;
            v1[tau[2]] = m1;
            let mut refs1 = pt.edge_refs;
            let mut tags1 = pt.edge_tags;
            refs1[tau[0]] = 0;
            tags1[tau[0]] = 0;
            refs1[tau[1]] = iso_edge_ref;
            tags1[tau[1]] = iso_tag;

            let mut v2 = pt.v;
            v2[tau[0]] = m1;
            let mut refs2 = pt.edge_refs;
            let mut tags2 = pt.edge_tags;
            refs2[tau[2]] = 0;
            tags2[tau[2]] = 0;

            (child(&pt, v1, refs1, tags1), child(&pt, v2, refs2, tags2))
        };

        self.triangles.reserve(2)?;
        let iel1 = self.triangles.push(t1)?;
        let iel2 = self.triangles.push(t2)?;
        self.triangles[k] = corner;
        Ok([iel1, iel2])
    }

    /// Applies the pattern selected by the crossing points `vx` of triangle
    /// `k` (`vx[i]` on local edge `i`).
    pub fn split_triangle(&mut self, k: usize, vx: &[Option<usize>; 3], iso_ref: Option<i32>) -> LevelSetResult<CrossingPattern> {
        let flag = crossing_flag(vx);
        let pattern = CrossingPattern::from_bits(flag)
            .ok_or(LevelSetError::InvalidCrossingPattern { triangle: k, flag })?;

        match pattern {
            CrossingPattern::Untouched => {}
            CrossingPattern::Single { edge } => {
                let ip = vx[edge].ok_or(LevelSetError::InvalidCrossingPattern { triangle: k, flag })?;
                self.split1(k, edge, ip, iso_ref)?;
            }
            CrossingPattern::Double { apex } => {
                let tau = rotation(apex);
                match (vx[tau[1]], vx[tau[2]]) {
                    (Some(m1), Some(m2)) => {
                        self.split2(k, apex, [m1, m2], iso_ref)?;
                    }
                    _ => return Err(LevelSetError::InvalidCrossingPattern { triangle: k, flag }),
                }
            }
        }
        Ok(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_decode_to_patterns() {
        assert_eq!(CrossingPattern::from_bits(0), Some(CrossingPattern::Untouched));
        for (flag, edge) in [(1, 0), (2, 1), (4, 2)] {
            assert_eq!(
                CrossingPattern::from_bits(flag),
                Some(CrossingPattern::Single { edge })
            );
        }
        // the uncrossed edge is opposite the apex
        for (flag, apex) in [(6, 0), (5, 1), (3, 2)] {
            assert_eq!(
                CrossingPattern::from_bits(flag),
                Some(CrossingPattern::Double { apex })
            );
            assert_eq!(flag & (1 << apex), 0);
        }
        assert_eq!(CrossingPattern::Untouched.output_triangles(), 1);
        assert_eq!(CrossingPattern::Single { edge: 2 }.output_triangles(), 2);
        assert_eq!(CrossingPattern::Double { apex: 1 }.output_triangles(), 3);
        assert_eq!(CrossingPattern::from_bits(7), None);
        assert_eq!(CrossingPattern::from_bits(8), None);
    }

    #[test]
    fn flag_from_points() {
        assert_eq!(crossing_flag(&[None, None, None]), 0);
        assert_eq!(crossing_flag(&[Some(3), None, Some(9)]), 5);
        assert_eq!(crossing_flag(&[Some(3), Some(4), Some(9)]), 7);
    }
}
