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

//! Region references that take part in the level-set split, and the
//! references given to each side of the new boundary.

use ahash::AHashSet;
use tracing::debug;

use crate::error::MaterialError;

/// Reference given to the negative side of the level set by default.
pub const REF_MINUS: i32 = 2;
/// Reference given to the positive side of the level set by default.
pub const REF_PLUS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    NoSplit,
    Split,
}

impl TryFrom<i32> for SplitMode {
    type Error = MaterialError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SplitMode::NoSplit),
            1 => Ok(SplitMode::Split),
            other => Err(MaterialError::UnknownSplitMode(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub reference: i32,
    pub mode: SplitMode,
    pub interior: i32,
    pub exterior: i32,
}

/// Collects exactly `expected` materials, one per reference.
#[derive(Debug, Clone)]
pub struct MaterialTableBuilder {
    expected: usize,
    materials: Vec<Material>,
}

impl MaterialTableBuilder {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            materials: Vec::with_capacity(expected),
        }
    }

    /// Registers `reference`. A `NoSplit` material keeps its own reference on
    /// both sides whatever `interior` and `exterior` say.
    pub fn register(
        &mut self,
        reference: i32,
        mode: SplitMode,
        interior: i32,
        exterior: i32,
    ) -> Result<(), MaterialError> {
        if self.expected == 0 {
            return Err(MaterialError::NoMaterials);
        }
        if self.materials.len() >= self.expected {
            return Err(MaterialError::TableFull { max: self.expected });
        }
        if reference < 0 {
            return Err(MaterialError::NegativeReference(reference));
        }
        if self.materials.iter().any(|m| m.reference == reference) {
            return Err(MaterialError::DuplicateReference(reference));
        }

        let (interior, exterior) = match mode {
            SplitMode::Split => (interior, exterior),
            SplitMode::NoSplit => (reference, reference),
        };
        self.materials.push(Material {
            reference,
            mode,
            interior,
            exterior,
        });
        Ok(())
    }

    pub fn registered(&self) -> usize {
        self.materials.len()
    }

    pub fn is_complete(&self) -> bool {
        self.expected > 0 && self.materials.len() == self.expected
    }

    /// Compiles the direct lookup table. Fails unless every expected material
    /// is registered.
    pub fn build(self) -> Result<MaterialTable, MaterialError> {
        if !self.is_complete() {
            return Err(MaterialError::Incomplete {
                registered: self.materials.len(),
                expected: self.expected,
            });
        }

        // non-empty and non-negative, checked above
        let offset = self.materials.iter().map(|m| m.reference).min().unwrap_or(0);
        let top = self.materials.iter().map(|m| m.reference).max().unwrap_or(0);
        let span = (top - offset) as usize + 1;

        let mut lookup = Vec::new();
        lookup
            .try_reserve_exact(span)
            .map_err(|_| MaterialError::LookupTooLarge { span })?;
        lookup.resize(span, None);
        for (k, m) in self.materials.iter().enumerate() {
            lookup[(m.reference - offset) as usize] = Some(k);
        }

        // side references that are not materials of their own
        let derived: AHashSet<i32> = self
            .materials
            .iter()
            .filter(|m| m.mode == SplitMode::Split)
            .flat_map(|m| [m.interior, m.exterior])
            .filter(|&r| r < offset || r > top || lookup[(r - offset) as usize].is_none())
            .collect();

        debug!(materials = self.materials.len(), offset, span, "material lookup built");
        Ok(MaterialTable {
            materials: self.materials,
            offset,
            lookup,
            derived,
        })
    }
}

/// Immutable reference → material lookup, indexed by `reference - offset`.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    materials: Vec<Material>,
    offset: i32,
    lookup: Vec<Option<usize>>,
    derived: AHashSet<i32>,
}

impl MaterialTable {
    pub fn get(&self, reference: i32) -> Option<&Material> {
        if reference < self.offset {
            return None;
        }
        let slot = (reference - self.offset) as usize;
        self.lookup
            .get(slot)
            .copied()
            .flatten()
            .map(|k| &self.materials[k])
    }

    /// `(interior, exterior)` references for cells of region `reference`, or
    /// `None` if that region must not be split.
    pub fn is_split(&self, reference: i32) -> Option<(i32, i32)> {
        match self.get(reference) {
            Some(m) if m.mode == SplitMode::NoSplit => None,
            Some(m) => Some((m.interior, m.exterior)),
            None => Some((REF_MINUS, REF_PLUS)),
        }
    }

    /// True when `reference` is the interior or exterior reference of a split
    /// material without being registered itself.
    pub fn is_derived(&self, reference: i32) -> bool {
        self.derived.contains(&reference)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Split decision when the material table is optional: without a table,
/// every region is split with the default references.
pub fn split_references(table: Option<&MaterialTable>, reference: i32) -> Option<(i32, i32)> {
    match table {
        Some(table) => table.is_split(reference),
        None => Some((REF_MINUS, REF_PLUS)),
    }
}

/// Side references for relabeling a cell of region `reference`. Cells that
/// already carry the side reference of a split material are left as they
/// are, so that relabeling an extracted mesh again changes nothing.
pub fn relabel_references(table: Option<&MaterialTable>, reference: i32) -> Option<(i32, i32)> {
    match table {
        Some(table) if table.is_derived(reference) => None,
        _ => split_references(table, reference),
    }
}
