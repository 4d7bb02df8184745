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

//! Error types for mesh construction, material registration and the
//! level-set cut.

use std::collections::TryReserveError;

use thiserror::Error;

/// Failure to obtain a new slot in one of the growable mesh tables.
#[derive(Debug, Error)]
pub enum AllocError {
    /// The configured maximum number of slots is reached.
    #[error("unable to allocate a new {kind}: maximum of {max} slots reached")]
    Exhausted { kind: &'static str, max: usize },

    /// The allocator refused to grow the backing storage.
    #[error("unable to allocate a new {kind}: {requested} slots requested")]
    OutOfMemory {
        kind: &'static str,
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Invalid mesh construction or topology.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("vertex {index} does not exist or was removed ({len} slots)")]
    InvalidVertex { index: usize, len: usize },

    #[error("cell repeats vertex {index}")]
    RepeatedVertex { index: usize },

    #[error("edge ({a}, {b}) is shared by {count} triangles")]
    NonManifoldEdge { a: usize, b: usize, count: usize },

    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// Malformed material registration. The mesh is never touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    #[error("the number of materials must be set before registering one")]
    NoMaterials,

    #[error("unable to register a new material: at most {max} expected")]
    TableFull { max: usize },

    #[error("negative reference {0} is not allowed")]
    NegativeReference(i32),

    #[error("reference {0} is already registered")]
    DuplicateReference(i32),

    #[error("unexpected split mode {0}: expected 0 (no split) or 1 (split)")]
    UnknownSplitMode(i32),

    #[error("material table incomplete: {registered} of {expected} registered")]
    Incomplete { registered: usize, expected: usize },

    #[error("unable to create the material lookup table over {span} references")]
    LookupTooLarge { span: usize },
}

/// Failure of a level-set discretization pass.
#[derive(Debug, Error)]
pub enum LevelSetError {
    #[error("isosurface extraction is not available with hybrid meshes ({quads} quadrilaterals)")]
    HybridMesh { quads: usize },

    #[error("level-set holds {found} values, {expected} points in the mesh")]
    FieldSizeMismatch { expected: usize, found: usize },

    #[error("solution field with {size} components per point is not supported here")]
    UnsupportedFieldSize { size: usize },

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("triangle {triangle} has crossing flag {flag}")]
    InvalidCrossingPattern { triangle: usize, flag: u8 },

    #[error(transparent)]
    Alloc(#[from] AllocError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Material(#[from] MaterialError),
}

pub type MeshResult<T> = std::result::Result<T, MeshError>;
pub type LevelSetResult<T> = std::result::Result<T, LevelSetError>;
