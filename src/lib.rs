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

//! Level-set discretization on unstructured 2-D triangle meshes.
//!
//! A scalar field sampled at the mesh vertices is cut along its zero
//! contour: crossing points are inserted on the crossed edges, the crossed
//! triangles are re-split by local patterns and the region references of the
//! resulting cells are updated, so that the contour becomes a chain of mesh
//! edges.

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod mesh_processing;
pub mod numeric;
pub mod operations;

pub use error::{AllocError, LevelSetError, MaterialError, MeshError};
pub use mesh::basic_types::{Mesh, MeshLimits};
pub use mesh::material::{MaterialTable, MaterialTableBuilder, SplitMode};
pub use mesh::sol::{MetricInterpolation, SolField};
pub use mesh_processing::level_set::{CutStats, cut_triangles, discretize_level_set};
pub use mesh_processing::params::LevelSetParams;
