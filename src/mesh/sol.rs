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

//! Per-point solution fields: the level-set function and the optional
//! metric.

use std::ops::{Add, Mul, Sub};

use crate::{
    error::{LevelSetError, LevelSetResult},
    mesh::basic_types::{Mesh, NEXT, PREV},
    numeric::scalar::Scalar,
};

/// `size` values per point, indexed like the mesh points.
///
/// Size 1 holds a scalar (level-set or isotropic size), size 3 the
/// components `(m11, m12, m22)` of a symmetric 2-D metric tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct SolField<T: Scalar> {
    size: usize,
    values: Vec<T>,
}

impl<T: Scalar> SolField<T> {
    pub fn new(size: usize, points: usize) -> Self {
        Self {
            size: size.max(1),
            values: vec![T::zero(); size.max(1) * points],
        }
    }

    /// Scalar field with one value per point.
    pub fn scalar(values: Vec<T>) -> Self {
        Self { size: 1, values }
    }

    /// Field with `size` components per point, stored point after point.
    /// Trailing values that do not fill a whole point are dropped.
    pub fn with_components(size: usize, mut values: Vec<T>) -> Self {
        let size = size.max(1);
        values.truncate(values.len() / size * size);
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of points the field holds values for.
    pub fn len(&self) -> usize {
        self.values.len() / self.size
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn components(&self, p: usize) -> &[T] {
        &self.values[p * self.size..(p + 1) * self.size]
    }

    pub fn get(&self, p: usize) -> Option<&T> {
        self.values.get(p * self.size)
    }

    /// First component at point `p`.
    pub fn value(&self, p: usize) -> &T {
        &self.values[p * self.size]
    }

    pub fn set_value(&mut self, p: usize, value: T) {
        self.ensure_len(p + 1);
        self.values[p * self.size] = value;
    }

    pub fn set_components(&mut self, p: usize, components: &[T]) {
        self.ensure_len(p + 1);
        let size = self.size;
        for (dst, src) in self.values[p * size..(p + 1) * size]
            .iter_mut()
            .zip(components)
        {
            *dst = src.clone();
        }
    }

    /// Grows the field with zeros so that it covers `points` points.
    pub fn ensure_len(&mut self, points: usize) {
        if self.len() < points {
            self.values.resize(points * self.size, T::zero());
        }
    }

    /// Subtracts `iso` from every value so that the iso-line becomes the
    /// zero line.
    pub fn shift(&mut self, iso: &T) {
        if iso.is_zero() {
            return;
        }
        for v in &mut self.values {
            *v -= iso;
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// Hook called for each point inserted on a crossed edge.
///
/// `edge` is the local edge of `triangle` that was cut and `s` the position
/// of `point` on it, measured from the first endpoint of that edge.
pub trait MetricInterpolation<T: Scalar> {
    fn interpolate(
        &mut self,
        mesh: &Mesh<T>,
        triangle: usize,
        edge: usize,
        point: usize,
        s: &T,
    ) -> LevelSetResult<()>;
}

impl<T: Scalar> MetricInterpolation<T> for SolField<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// Linear interpolation for sizes, component-wise for tensors; a convex
    /// combination of two positive definite tensors stays positive definite.
    fn interpolate(
        &mut self,
        mesh: &Mesh<T>,
        triangle: usize,
        edge: usize,
        point: usize,
        s: &T,
    ) -> LevelSetResult<()> {
        if self.size != 1 && self.size != 3 {
            return Err(LevelSetError::UnsupportedFieldSize { size: self.size });
        }
        let t = &mesh.triangles[triangle];
        let (ip0, ip1) = (t.v[NEXT[edge]], t.v[PREV[edge]]);
        if self.len() <= ip0.max(ip1) {
            return Err(LevelSetError::FieldSizeMismatch {
                expected: mesh.points.len(),
                found: self.len(),
            });
        }

        let r = &T::one() - s;
        let interpolated: Vec<T> = self
            .components(ip0)
            .iter()
            .zip(self.components(ip1))
            .map(|(m0, m1)| &(&r * m0) + &(s * m1))
            .collect();
        self.set_components(point, &interpolated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::point::Point2, numeric::Real64};

    #[test]
    fn shift_and_grow() {
        let mut sol = SolField::scalar(vec![Real64(1.0), Real64(3.0)]);
        sol.shift(&Real64(1.0));
        assert_eq!(sol.values(), &[Real64(0.0), Real64(2.0)]);

        sol.set_value(4, Real64(5.0));
        assert_eq!(sol.len(), 5);
        assert_eq!(*sol.value(3), Real64(0.0));
        assert_eq!(*sol.value(4), Real64(5.0));
    }

    #[test]
    fn tensor_interpolation() {
        let mut mesh = Mesh::<Real64>::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.5, 0.5]] {
            mesh.add_vertex(Point2::from_vals(p)).unwrap();
        }
        mesh.add_triangle(0, 1, 2, 1).unwrap();

        let mut met = SolField::with_components(
            3,
            [[1.0, 0.0, 1.0], [3.0, 1.0, 5.0], [1.0, 0.0, 1.0]]
                .concat()
                .into_iter()
                .map(Real64)
                .collect(),
        );
        // edge 2 runs from vertex 0 to vertex 1
        met.interpolate(&mesh, 0, 2, 3, &Real64(0.5)).unwrap();
        assert_eq!(met.components(3), &[Real64(2.0), Real64(0.5), Real64(3.0)]);
    }

    #[test]
    fn unsupported_size() {
        let mut mesh = Mesh::<Real64>::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]] {
            mesh.add_vertex(Point2::from_vals(p)).unwrap();
        }
        mesh.add_triangle(0, 1, 2, 1).unwrap();
        let mut met = SolField::<Real64>::new(2, 3);
        assert!(matches!(
            met.interpolate(&mesh, 0, 0, 3, &Real64(0.5)),
            Err(LevelSetError::UnsupportedFieldSize { size: 2 })
        ));
    }
}
