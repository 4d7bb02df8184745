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

use num_traits::{One, ToPrimitive, Zero};

use crate::{numeric::scalar::Scalar, operations::Abs};

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Plain `f64` scalar. Comparisons are exact; tolerances are applied by the
/// algorithms that need them.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Real64(pub f64);

impl Scalar for Real64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        Real64(num as f64 / den as f64)
    }
}

macro_rules! real64_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a, 'b> $trait<&'b Real64> for &'a Real64 {
            type Output = Real64;
            fn $method(self, rhs: &'b Real64) -> Real64 {
                Real64(self.0 $op rhs.0)
            }
        }

        impl $trait for Real64 {
            type Output = Real64;
            fn $method(self, rhs: Real64) -> Real64 {
                &self $op &rhs
            }
        }
    };
}

real64_binop!(Add, add, +);
real64_binop!(Sub, sub, -);
real64_binop!(Mul, mul, *);
real64_binop!(Div, div, /);

impl<'c> AddAssign<&'c Real64> for Real64 {
    fn add_assign(&mut self, rhs: &'c Real64) {
        self.0 += rhs.0;
    }
}

impl<'d> SubAssign<&'d Real64> for Real64 {
    fn sub_assign(&mut self, rhs: &'d Real64) {
        self.0 -= rhs.0;
    }
}

impl Neg for Real64 {
    type Output = Real64;

    fn neg(self) -> Real64 {
        Real64(-self.0)
    }
}

impl<'a> Neg for &'a Real64 {
    type Output = Real64;

    fn neg(self) -> Real64 {
        Real64(-self.0)
    }
}

impl Zero for Real64 {
    fn zero() -> Self {
        Real64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Real64 {
    fn one() -> Self {
        Real64(1.0)
    }
}

impl Abs for Real64 {
    fn abs(&self) -> Self {
        Real64(self.0.abs())
    }
}

impl From<i32> for Real64 {
    fn from(value: i32) -> Self {
        Real64(value as f64)
    }
}

impl From<f64> for Real64 {
    fn from(value: f64) -> Self {
        Real64(value)
    }
}

impl From<Real64> for f64 {
    fn from(value: Real64) -> Self {
        value.0
    }
}

impl ToPrimitive for Real64 {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}
