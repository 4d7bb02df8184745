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

use std::{
    array::from_fn,
    ops::{Add, Index, IndexMut, Mul, Sub},
};

use crate::numeric::scalar::Scalar;

#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub type Point2<T> = Point<T, 2>;

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn coords(&self) -> &[T; N] {
        &self.coords
    }

    /// Affine combination `self + s * (other - self)`.
    pub fn lerp(&self, other: &Self, s: &T) -> Self
    where
        for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        Point {
            coords: from_fn(|i| {
                let d = &other.coords[i] - &self.coords[i];
                &self.coords[i] + &(s * &d)
            }),
        }
    }

    pub fn distance_squared(&self, other: &Self) -> T
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let mut acc = T::zero();
        for i in 0..N {
            let d = &self.coords[i] - &other.coords[i];
            acc += &(&d * &d);
        }
        acc
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{ExactRational, Real64};

    #[test]
    fn lerp_hits_both_ends() {
        let a = Point2::<Real64>::from_vals([0.0, 2.0]);
        let b = Point2::<Real64>::from_vals([4.0, -2.0]);
        assert_eq!(a.lerp(&b, &Real64(0.0)), a);
        assert_eq!(a.lerp(&b, &Real64(1.0)), b);
        assert_eq!(a.lerp(&b, &Real64(0.25)), Point2::from_vals([1.0, 1.0]));
    }

    #[test]
    fn rational_distance() {
        let a = Point2::<ExactRational>::from_vals([0, 0]);
        let b = Point2::<ExactRational>::from_vals([3, 4]);
        assert_eq!(a.distance_squared(&b), ExactRational::from(25));
    }
}
