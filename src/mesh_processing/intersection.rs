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

//! Crossing test and crossing point of an edge with the zero level set.

use std::ops::{Add, Div, Mul, Sub};

use crate::{geometry::point::Point2, numeric::scalar::Scalar};

/// True when both values are farther than `tolerance` from zero and of
/// opposite signs.
pub fn is_crossing<T: Scalar>(v0: &T, v1: &T, tolerance: &T) -> bool {
    v0.abs() > *tolerance && v1.abs() > *tolerance && v0.is_negative() != v1.is_negative()
}

/// Position of the zero of the linear interpolant between `v0` and `v1`,
/// measured from the `v0` end and clamped into `[low, high]`. `None` when the
/// edge does not cross.
pub fn crossing_parameter<T: Scalar>(v0: &T, v1: &T, tolerance: &T, low: &T, high: &T) -> Option<T>
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Div<&'a T, Output = T>,
{
    if !is_crossing(v0, v1, tolerance) {
        return None;
    }
    let s = v0 / &(v0 - v1);
    Some(s.min(high.clone()).max(low.clone()))
}

/// Point at parameter `s` on segment `p0 p1`.
pub fn crossing_point<T: Scalar>(p0: &Point2<T>, p1: &Point2<T>, s: &T) -> Point2<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    p0.lerp(p1, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{ExactRational, Real64};

    fn bounds() -> (Real64, Real64, Real64) {
        (Real64(1.0e-200), Real64(1.0e-6), Real64(1.0 - 1.0e-6))
    }

    #[test]
    fn symmetric_values_cross_at_half() {
        let (tol, lo, hi) = bounds();
        let s = crossing_parameter(&Real64(-1.0), &Real64(1.0), &tol, &lo, &hi);
        assert_eq!(s, Some(Real64(0.5)));
    }

    #[test]
    fn same_sign_or_zero_never_cross() {
        let (tol, lo, hi) = bounds();
        assert_eq!(crossing_parameter(&Real64(1.0), &Real64(2.0), &tol, &lo, &hi), None);
        assert_eq!(crossing_parameter(&Real64(-1.0), &Real64(-2.0), &tol, &lo, &hi), None);
        assert_eq!(crossing_parameter(&Real64(0.0), &Real64(2.0), &tol, &lo, &hi), None);
        assert_eq!(crossing_parameter(&Real64(-2.0), &Real64(0.0), &tol, &lo, &hi), None);
    }

    #[test]
    fn parameter_is_clamped() {
        let (tol, lo, hi) = bounds();
        let s = crossing_parameter(&Real64(-1.0e-12), &Real64(1.0), &tol, &lo, &hi).unwrap();
        assert_eq!(s, lo);
        let s = crossing_parameter(&Real64(1.0), &Real64(-1.0e-12), &tol, &lo, &hi).unwrap();
        assert_eq!(s, hi);
    }

    #[test]
    fn exact_crossing_point() {
        let tol = ExactRational::from(1.0e-200);
        let lo = ExactRational::from_num_den(1, 1_000_000);
        let hi = ExactRational::from_num_den(999_999, 1_000_000);
        let s = crossing_parameter(
            &ExactRational::from(-1),
            &ExactRational::from(2),
            &tol,
            &lo,
            &hi,
        )
        .unwrap();
        assert_eq!(s, ExactRational::from_num_den(1, 3));

        let p0 = Point2::<ExactRational>::from_vals([0, 0]);
        let p1 = Point2::<ExactRational>::from_vals([3, 6]);
        assert_eq!(crossing_point(&p0, &p1, &s), Point2::from_vals([1, 2]));
    }
}
