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
use rug::Rational;

use crate::{numeric::scalar::Scalar, operations::Abs};

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Arbitrary precision rational scalar backed by GMP.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct ExactRational(pub Rational);

impl Scalar for ExactRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        ExactRational(Rational::from((num, den)))
    }

    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

macro_rules! rational_binop {
    ($trait:ident, $method:ident, $assign:tt) => {
        impl<'a, 'b> $trait<&'b ExactRational> for &'a ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: &'b ExactRational) -> ExactRational {
                // in-place API on rug::Rational
                let mut result = self.0.clone();
                result $assign &rhs.0;
                ExactRational(result)
            }
        }

        impl $trait for ExactRational {
            type Output = ExactRational;

            fn $method(mut self, rhs: ExactRational) -> ExactRational {
                self.0 $assign &rhs.0;
                self
            }
        }
    };
}

rational_binop!(Add, add, +=);
rational_binop!(Sub, sub, -=);
rational_binop!(Mul, mul, *=);
rational_binop!(Div, div, /=);

impl<'c> AddAssign<&'c ExactRational> for ExactRational {
    fn add_assign(&mut self, rhs: &'c ExactRational) {
        self.0 += &rhs.0;
    }
}

impl<'d> SubAssign<&'d ExactRational> for ExactRational {
    fn sub_assign(&mut self, rhs: &'d ExactRational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0)
    }
}

impl<'a> Neg for &'a ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        ExactRational(-self.0.clone())
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl Abs for ExactRational {
    fn abs(&self) -> Self {
        ExactRational(self.0.clone().abs())
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

/// Non-finite values have no rational counterpart and map to zero.
impl From<f64> for ExactRational {
    fn from(value: f64) -> Self {
        ExactRational(Rational::from_f64(value).unwrap_or_default())
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_stay_exact() {
        let third = ExactRational::from_num_den(1, 3);
        let sum = &(&third + &third) + &third;
        assert_eq!(sum, ExactRational::one());
        assert_eq!((-third).sign(), -1);
    }

    #[test]
    fn from_f64_is_exact() {
        let half = ExactRational::from(0.5);
        assert_eq!(half, ExactRational::from_num_den(1, 2));
        assert_eq!(ExactRational::from(f64::NAN), ExactRational::zero());
    }
}
