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

//! Discretization of the zero level set of a scalar field in a triangle
//! mesh.

use std::ops::{Add, Div, Mul, Sub};

use tracing::{debug, error, info};

use crate::{
    error::{LevelSetError, LevelSetResult},
    mesh::{
        basic_types::{Mesh, NEXT, PREV},
        edge_hash::EdgeHash,
        material::{MaterialTable, split_references},
        sol::{MetricInterpolation, SolField},
    },
    mesh_processing::{
        intersection::{crossing_parameter, crossing_point, is_crossing},
        params::LevelSetParams,
        references::set_references,
        split::CrossingPattern,
    },
    numeric::scalar::Scalar,
};

/// Outcome of a cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutStats {
    /// Crossed edges seen while scanning triangles; an edge shared by two
    /// triangles counts twice.
    pub crossings: usize,
    /// Points inserted, one per distinct crossed edge.
    pub new_points: usize,
    pub single_splits: usize,
    pub double_splits: usize,
}

impl CutStats {
    pub fn splits(&self) -> usize {
        self.single_splits + self.double_splits
    }

    /// Triangles added on top of the ones that were split.
    pub fn new_triangles(&self) -> usize {
        self.single_splits + 2 * self.double_splits
    }
}

/// Points touching a crossed edge, for one pass.
struct CrossingMarks {
    visited: Vec<bool>,
}

impl CrossingMarks {
    fn new(points: usize) -> Self {
        Self {
            visited: vec![false; points],
        }
    }

    fn mark(&mut self, p: usize) {
        self.visited[p] = true;
    }

    fn is_visited(&self, p: usize) -> bool {
        self.visited.get(p).copied().unwrap_or(false)
    }
}

fn check_field<T: Scalar>(mesh: &Mesh<T>, sol: &SolField<T>) -> LevelSetResult<()> {
    if sol.size() != 1 {
        return Err(LevelSetError::UnsupportedFieldSize { size: sol.size() });
    }
    if sol.len() < mesh.points.len() {
        return Err(LevelSetError::FieldSizeMismatch {
            expected: mesh.points.len(),
            found: sol.len(),
        });
    }
    Ok(())
}

/// Inserts a point on every edge crossed by the zero level set of `sol` and
/// splits the crossed triangles.
///
/// Only triangles of regions that `materials` marks for splitting create
/// points, but every triangle touching a created point is split so that the
/// mesh stays conforming. New points get a level-set value of exactly zero
/// and, if `met` is given, an interpolated metric. Triangles created by the
/// pass are not rescanned. On error the pass stops where it is; the work
/// already done is kept.
pub fn cut_triangles<T: Scalar>(
    mesh: &mut Mesh<T>,
    sol: &mut SolField<T>,
    mut met: Option<&mut dyn MetricInterpolation<T>>,
    materials: Option<&MaterialTable>,
    params: &LevelSetParams,
) -> LevelSetResult<CutStats>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    params.validate()?;
    check_field(mesh, sol)?;
    let tol: T = params.tolerance();
    let (low, high) = params.clamp_bounds::<T>();

    // Count the crossed edges
    let mut marks = CrossingMarks::new(mesh.points.len());
    let mut nb = 0;
    for (_, t) in mesh.triangles.iter() {
        for i in 0..3 {
            let (ip0, ip1) = t.edge(i);
            if is_crossing(sol.value(ip0), sol.value(ip1), &tol) {
                nb += 1;
                marks.mark(ip0);
                marks.mark(ip1);
            }
        }
    }
    if nb == 0 {
        debug!("level set crosses no edge");
        return Ok(CutStats::default());
    }
    debug!(crossings = nb, "crossed edges counted");

    let mut stats = CutStats {
        crossings: nb,
        ..CutStats::default()
    };

    // Create the intersection points
    let mut hash = EdgeHash::new(nb, 2 * nb, mesh.points.max_slots(), params.gap)?;
    let nt = mesh.triangles.len();
    for k in 0..nt {
        let Some(t) = mesh.triangles.get(k) else {
            continue;
        };
        if split_references(materials, t.reference).is_none() {
            continue;
        }
        let v = t.v;

        for i in 0..3 {
            let (ip0, ip1) = (v[NEXT[i]], v[PREV[i]]);
            if hash.get(ip0, ip1).is_some() {
                continue;
            }
            if !marks.is_visited(ip0) || !marks.is_visited(ip1) {
                continue;
            }
            let Some(s) = crossing_parameter(sol.value(ip0), sol.value(ip1), &tol, &low, &high)
            else {
                continue;
            };

            let c = crossing_point(mesh.position(ip0), mesh.position(ip1), &s);
            let np = mesh.add_vertex(c).inspect_err(|e| {
                error!(%e, "unable to allocate a new point, increase the memory limits");
            })?;
            sol.set_value(np, T::zero());
            if let Some(met) = met.as_deref_mut() {
                met.interpolate(mesh, k, i, np, &s)?;
            }
            hash.insert(ip0, ip1, np).inspect_err(|e| {
                error!(%e, "unable to register the crossed edge");
            })?;
            stats.new_points += 1;
        }
    }

    // Split by patterns
    for k in 0..nt {
        let Some(t) = mesh.triangles.get(k) else {
            continue;
        };
        let mut vx = [None; 3];
        for (i, p) in vx.iter_mut().enumerate() {
            let (ip0, ip1) = t.edge(i);
            *p = hash.get(ip0, ip1);
        }
        let iso_ref = split_references(materials, t.reference).map(|_| params.iso_ref);

        let pattern = mesh.split_triangle(k, &vx, iso_ref).inspect_err(|e| {
            error!(%e, "unable to split triangle {k}");
        })?;
        match pattern {
            CrossingPattern::Untouched => {}
            CrossingPattern::Single { .. } => stats.single_splits += 1,
            CrossingPattern::Double { .. } => stats.double_splits += 1,
        }
    }

    if stats.splits() > 0 {
        debug!(splits = stats.splits(), "triangles split");
    }
    Ok(stats)
}

/// Discretizes the `params.iso_value` level set of `sol` in `mesh`.
///
/// Rejects meshes with quadrilaterals before touching anything. Otherwise
/// shifts the field to its zero level set, transfers the edge references to
/// the triangles, cuts, assigns the interior and exterior references of the
/// split regions and rebuilds the adjacency. The level-set field and the
/// material table are consumed.
pub fn discretize_level_set<T: Scalar>(
    mesh: &mut Mesh<T>,
    mut sol: SolField<T>,
    met: Option<&mut dyn MetricInterpolation<T>>,
    materials: Option<MaterialTable>,
    params: &LevelSetParams,
) -> LevelSetResult<CutStats>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    info!(iso_value = params.iso_value, "isosurface extraction (boundary part)");

    if mesh.is_hybrid() {
        error!(quads = mesh.quads.len(), "isosurface extraction not available with hybrid meshes");
        return Err(LevelSetError::HybridMesh {
            quads: mesh.quads.len(),
        });
    }
    params.validate()?;
    check_field(mesh, &sol)?;

    sol.shift(&T::from(params.iso_value));

    mesh.assign_boundary_edges().inspect_err(|e| {
        error!(%e, "problem in setting boundary");
    })?;

    // stale once the topology changes
    mesh.adjacency = None;

    let stats = cut_triangles(mesh, &mut sol, met, materials.as_ref(), params).inspect_err(|e| {
        error!(%e, "problem in cutting triangles");
    })?;

    set_references(mesh, &sol, materials.as_ref(), params);

    mesh.hash_triangles().inspect_err(|e| {
        error!(%e, "hashing problem");
    })?;

    info!(
        new_points = stats.new_points,
        new_triangles = stats.new_triangles(),
        splits = stats.splits(),
        "level set discretized"
    );
    Ok(stats)
}
