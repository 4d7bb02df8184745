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

use tracing::{debug, warn};

use crate::{
    mesh::{
        basic_types::Mesh,
        material::{MaterialTable, relabel_references},
        sol::SolField,
    },
    mesh_processing::params::LevelSetParams,
    numeric::scalar::Scalar,
};

/// Gives every triangle of a split region the interior or exterior
/// reference of its material, depending on the side of the level set its
/// vertices lie on. Vertices on the level set do not vote; triangles with
/// all vertices on it keep their reference, as do triangles already carrying
/// a side reference of the material table. Returns the number of triangles
/// whose reference changed.
pub fn set_references<T: Scalar>(
    mesh: &mut Mesh<T>,
    sol: &SolField<T>,
    materials: Option<&MaterialTable>,
    params: &LevelSetParams,
) -> usize {
    let tol: T = params.tolerance();
    let mut changed = 0;

    for k in 0..mesh.triangles.len() {
        let Some(t) = mesh.triangles.get(k) else {
            continue;
        };
        let Some((interior, exterior)) = relabel_references(materials, t.reference) else {
            continue;
        };

        let (mut negative, mut positive) = (0, 0);
        for &p in &t.v {
            let Some(v) = sol.get(p) else { continue };
            if v.abs() <= tol {
                continue;
            }
            if v.is_negative() {
                negative += 1;
            } else if v.is_positive() {
                positive += 1;
            }
        }

        let reference = match (negative > 0, positive > 0) {
            (true, false) => interior,
            (false, true) => exterior,
            (false, false) => continue,
            (true, true) => {
                warn!(triangle = k, "triangle still crosses the level set");
                continue;
            }
        };
        if t.reference != reference {
            mesh.triangles[k].reference = reference;
            changed += 1;
        }
    }

    debug!(changed, "interior and exterior references set");
    changed
}
