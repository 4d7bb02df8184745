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

use isocut::geometry::point::Point2;
use isocut::mesh::basic_types::TAG_ISO;
use isocut::numeric::Real64;
use isocut::{
    CutStats, LevelSetParams, MaterialError, MaterialTable, MaterialTableBuilder, Mesh, SolField,
    SplitMode, discretize_level_set,
};

fn two_regions() -> Mesh<Real64> {
    let mut mesh = Mesh::new();
    for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
        mesh.add_vertex(Point2::from_vals(p)).unwrap();
    }
    mesh.add_triangle(0, 1, 2, 1).unwrap();
    mesh.add_triangle(0, 2, 3, 5).unwrap();
    mesh
}

#[test]
fn frozen_region_only_follows_its_neighbour() {
    let mut builder = MaterialTableBuilder::new(2);
    builder.register(1, SplitMode::NoSplit, 40, 41).unwrap();
    builder.register(5, SplitMode::Split, 20, 21).unwrap();
    let table = builder.build().unwrap();

    let mut mesh = two_regions();
    let sol = SolField::scalar(vec![Real64(-1.0), Real64(1.0), Real64(1.0), Real64(1.0)]);

    let stats = discretize_level_set(&mut mesh, sol, None, Some(table), &LevelSetParams::default()).unwrap();

    // edge (0, 1) is crossed but lies only in the frozen region
    assert_eq!(stats.new_points, 2);
    assert_eq!(stats.single_splits, 1);
    assert_eq!(stats.double_splits, 1);
    assert_eq!(mesh.point_count(), 6);
    assert_eq!(mesh.triangle_count(), 5);
    assert_eq!(*mesh.position(4), Point2::from_vals([0.0, 0.5]));
    assert_eq!(*mesh.position(5), Point2::from_vals([0.5, 0.5]));

    // the frozen triangle is split through the shared point to stay conforming
    assert_eq!(mesh.triangles[0].v, [5, 1, 2]);
    assert_eq!(mesh.triangles[2].v, [0, 1, 5]);
    for k in [0, 2] {
        let t = &mesh.triangles[k];
        assert_eq!(t.reference, 1);
        assert!(t.edge_tags.iter().all(|tag| tag & TAG_ISO == 0));
    }

    let mut refs: Vec<_> = [1, 3, 4].iter().map(|&k| mesh.triangles[k].reference).collect();
    refs.sort();
    assert_eq!(refs, vec![20, 21, 21]);
    assert_eq!(mesh.triangles[1].reference, 20);

    let adjacency = mesh.adjacency.as_ref().unwrap();
    assert_eq!(adjacency.free_edges().count(), 5);
}

fn single_material(reference: i32, interior: i32, exterior: i32) -> MaterialTable {
    let mut builder = MaterialTableBuilder::new(1);
    builder.register(reference, SplitMode::Split, interior, exterior).unwrap();
    builder.build().unwrap()
}

fn shifted_x(mesh: &Mesh<Real64>) -> SolField<Real64> {
    SolField::scalar(
        (0..mesh.points.len())
            .map(|p| Real64(mesh.position(p)[0].0 - 0.5))
            .collect(),
    )
}

#[test]
fn second_extraction_keeps_material_references() {
    let mut mesh = Mesh::new();
    for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
        mesh.add_vertex(Point2::from_vals(p)).unwrap();
    }
    mesh.add_triangle(0, 1, 2, 1).unwrap();
    mesh.add_triangle(0, 2, 3, 1).unwrap();
    let params = LevelSetParams::default();

    let sol = shifted_x(&mesh);
    let first = discretize_level_set(&mut mesh, sol, None, Some(single_material(1, 10, 11)), &params)
        .unwrap();
    assert!(first.new_points > 0);
    let after_first: Vec<_> = mesh.triangles.iter().map(|(_, t)| t.reference).collect();
    assert!(after_first.iter().all(|&r| r == 10 || r == 11));
    assert!(after_first.contains(&10) && after_first.contains(&11));

    // new points sit on x = 0.5 exactly, so the field vanishes there
    let sol = shifted_x(&mesh);
    let second = discretize_level_set(&mut mesh, sol, None, Some(single_material(1, 10, 11)), &params)
        .unwrap();
    assert_eq!(second, CutStats::default());
    let after_second: Vec<_> = mesh.triangles.iter().map(|(_, t)| t.reference).collect();
    assert_eq!(after_second, after_first);
}

#[test]
fn unknown_regions_use_default_references() {
    let mut builder = MaterialTableBuilder::new(1);
    builder.register(1, SplitMode::NoSplit, 0, 0).unwrap();
    let table = builder.build().unwrap();

    let mut mesh = two_regions();
    let sol = SolField::scalar(vec![Real64(-1.0), Real64(1.0), Real64(-1.0), Real64(1.0)]);
    let stats = discretize_level_set(&mut mesh, sol, None, Some(table), &LevelSetParams::default()).unwrap();

    // region 5 is split with the defaults; region 1 shares no cut edge
    assert_eq!(stats.new_points, 2);
    assert_eq!(stats.double_splits, 1);
    assert_eq!(stats.single_splits, 0);
    let mut refs: Vec<_> = mesh.triangles.iter().map(|(_, t)| t.reference).collect();
    refs.sort();
    assert_eq!(refs, vec![1, 2, 2, 3]);
}

#[test]
fn builder_rejects_bad_registrations() {
    let mut empty = MaterialTableBuilder::new(0);
    assert_eq!(
        empty.register(1, SplitMode::Split, 2, 3),
        Err(MaterialError::NoMaterials)
    );

    let mut builder = MaterialTableBuilder::new(2);
    assert_eq!(
        builder.register(-4, SplitMode::Split, 2, 3),
        Err(MaterialError::NegativeReference(-4))
    );
    builder.register(4, SplitMode::Split, 2, 3).unwrap();
    assert_eq!(
        builder.register(4, SplitMode::NoSplit, 0, 0),
        Err(MaterialError::DuplicateReference(4))
    );
    assert!(!builder.is_complete());
    builder.register(9, SplitMode::try_from(0).unwrap(), 0, 0).unwrap();
    assert_eq!(
        builder.register(12, SplitMode::Split, 2, 3),
        Err(MaterialError::TableFull { max: 2 })
    );
    assert_eq!(builder.registered(), 2);

    let table = builder.build().unwrap();
    assert_eq!(table.is_split(4), Some((2, 3)));
    assert_eq!(table.is_split(9), None);
    assert_eq!(table.is_split(7), Some((2, 3)));

    assert_eq!(SplitMode::try_from(5), Err(MaterialError::UnknownSplitMode(5)));
}

#[test]
fn incomplete_table_is_an_error() {
    let mut builder = MaterialTableBuilder::new(3);
    builder.register(1, SplitMode::Split, 2, 3).unwrap();
    assert!(matches!(
        builder.build(),
        Err(MaterialError::Incomplete {
            registered: 1,
            expected: 3
        })
    ));
}
