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

//! Level-set discretization parameters.

use crate::{
    error::{LevelSetError, LevelSetResult},
    numeric::scalar::Scalar,
};

/// Reference given by default to the edges of the discretized level set.
pub const ISO_REF: i32 = 10;

/// Parameters of a level-set discretization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSetParams {
    /// Value of the level set to discretize; the field is shifted by it.
    pub iso_value: f64,

    /// Edge reference given to the new edges lying on the level set.
    pub iso_ref: i32,

    /// Values with a magnitude not above this are considered on the level
    /// set and never produce a crossing.
    pub zero_tolerance: f64,

    /// Crossing parameters are clamped to `[clamp, 1 - clamp]` so that no
    /// new point coincides with an edge endpoint.
    pub clamp: f64,

    /// Growth fraction of the edge table when it runs out of room.
    pub gap: f64,
}

impl Default for LevelSetParams {
    fn default() -> Self {
        Self {
            iso_value: 0.0,
            iso_ref: ISO_REF,
            zero_tolerance: 1.0e-200,
            clamp: 1.0e-6,
            gap: 0.2,
        }
    }
}

fn invalid(name: &'static str, value: f64) -> LevelSetError {
    LevelSetError::InvalidParameter { name, value }
}

impl LevelSetParams {
    #[must_use]
    pub fn with_iso_value(mut self, iso_value: f64) -> Self {
        self.iso_value = iso_value;
        self
    }

    #[must_use]
    pub fn with_iso_ref(mut self, iso_ref: i32) -> Self {
        self.iso_ref = iso_ref;
        self
    }

    #[must_use]
    pub fn with_zero_tolerance(mut self, zero_tolerance: f64) -> Self {
        self.zero_tolerance = zero_tolerance;
        self
    }

    #[must_use]
    pub fn with_clamp(mut self, clamp: f64) -> Self {
        self.clamp = clamp;
        self
    }

    /// Checks that the parameters describe a usable pass: a finite iso value,
    /// a clamp in `[0, 0.5)`, non-negative finite tolerance and gap.
    pub fn validate(&self) -> LevelSetResult<()> {
        if !self.iso_value.is_finite() {
            return Err(invalid("iso_value", self.iso_value));
        }
        if !(0.0..0.5).contains(&self.clamp) {
            return Err(invalid("clamp", self.clamp));
        }
        if !(self.zero_tolerance >= 0.0 && self.zero_tolerance.is_finite()) {
            return Err(invalid("zero_tolerance", self.zero_tolerance));
        }
        if !(self.gap >= 0.0 && self.gap.is_finite()) {
            return Err(invalid("gap", self.gap));
        }
        Ok(())
    }

    pub(crate) fn tolerance<T: Scalar>(&self) -> T {
        T::from(self.zero_tolerance)
    }

    pub(crate) fn clamp_bounds<T: Scalar>(&self) -> (T, T) {
        let low = T::from(self.clamp);
        let high = T::one() - low.clone();
        (low, high)
    }
}
