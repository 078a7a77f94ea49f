// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry-only crossing tests: side faces, centerlines and opening
//! parameters chained together without a model repository.

use approx::assert_relative_eq;
use wall_opening_geometry::{
    compute_opening, find_intersection, opening_between, select_side_faces, Duct, ElementId, Face,
    FaceRef, PlanarFace, Point3, SideFaces, Solid, Tolerances, Vector3, Wall,
};

const TOL: f64 = 1e-9;

/// 4000 x 3000 rectangle in the plane `y`, normal -Y unless flipped.
fn rect_y(y: f64, flip: bool) -> Vec<Point3<f64>> {
    let mut pts = vec![
        Point3::new(0.0, y, 0.0),
        Point3::new(4000.0, y, 0.0),
        Point3::new(4000.0, y, 3000.0),
        Point3::new(0.0, y, 3000.0),
    ];
    if flip {
        pts.reverse();
    }
    pts
}

fn window(y: f64) -> Vec<Point3<f64>> {
    vec![
        Point3::new(1000.0, y, 1000.0),
        Point3::new(2000.0, y, 1000.0),
        Point3::new(2000.0, y, 2000.0),
        Point3::new(1000.0, y, 2000.0),
    ]
}

/// Two side faces sharing a 1000 x 1000 window hole.
fn wall_with_window() -> Solid {
    let id = ElementId(7);
    let front = PlanarFace::with_holes(
        FaceRef::new(id, 0),
        &rect_y(-100.0, false),
        &[window(-100.0)],
    )
    .unwrap();
    let back = PlanarFace::with_holes(
        FaceRef::new(id, 1),
        &rect_y(100.0, true),
        &[window(100.0)],
    )
    .unwrap();
    Solid::new(vec![Face::Planar(front), Face::Planar(back)])
}

fn crossing(duct: &Duct, sides: &SideFaces<'_>) -> (Option<Point3<f64>>, Option<Point3<f64>>) {
    let line = duct.centerline().unwrap();
    (
        find_intersection(&line, sides.front, &Tolerances::default()),
        find_intersection(&line, sides.back, &Tolerances::default()),
    )
}

#[test]
fn test_slab_wall_perpendicular_crossing() {
    let wall = Wall::straight(
        ElementId(1),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(4000.0, 0.0, 0.0),
        200.0,
        3000.0,
    )
    .unwrap();
    let selection = select_side_faces(&wall.solids, &wall.orientation, &Tolerances::default());
    let sides = SideFaces::from_selection(&selection).unwrap();

    let duct = Duct::new(
        ElementId(2),
        150.0,
        vec![Point3::new(2000.0, -600.0, 1500.0), Point3::new(2000.0, 600.0, 1500.0)],
    );
    let (front, back) = crossing(&duct, &sides);
    let spec = opening_between(
        front,
        back,
        sides.front.reference_direction(),
        wall.width,
        duct.diameter,
    )
    .unwrap();

    assert_eq!(spec.diameter, 150.0);
    assert_eq!(spec.depth, 200.0);
    assert_relative_eq!(spec.center, front.unwrap(), epsilon = TOL);
}

#[test]
fn test_only_first_two_connectors_define_the_centerline() {
    let wall = Wall::straight(
        ElementId(1),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(4000.0, 0.0, 0.0),
        200.0,
        3000.0,
    )
    .unwrap();
    let selection = select_side_faces(&wall.solids, &wall.orientation, &Tolerances::default());
    let sides = SideFaces::from_selection(&selection).unwrap();

    // A third connector far off the line must not bend it.
    let duct = Duct::new(
        ElementId(3),
        150.0,
        vec![
            Point3::new(1000.0, -600.0, 1200.0),
            Point3::new(1000.0, 600.0, 1200.0),
            Point3::new(9000.0, 9000.0, 9000.0),
        ],
    );
    let (front, back) = crossing(&duct, &sides);

    assert_relative_eq!(front.unwrap(), Point3::new(1000.0, -100.0, 1200.0), epsilon = TOL);
    assert_relative_eq!(back.unwrap(), Point3::new(1000.0, 100.0, 1200.0), epsilon = TOL);
}

#[test]
fn test_duct_through_existing_hole_has_no_crossing() {
    let solids = vec![wall_with_window()];
    let orientation = Vector3::new(0.0, -1.0, 0.0);
    let selection = select_side_faces(&solids, &orientation, &Tolerances::default());
    assert_eq!(selection.len(), 2);
    let sides = SideFaces::from_selection(&selection).unwrap();
    assert_eq!(sides.front.hole_count(), 1);

    let through_window = Duct::new(
        ElementId(8),
        100.0,
        vec![Point3::new(1500.0, -600.0, 1500.0), Point3::new(1500.0, 600.0, 1500.0)],
    );
    assert_eq!(crossing(&through_window, &sides), (None, None));

    let beside_window = Duct::new(
        ElementId(9),
        100.0,
        vec![Point3::new(500.0, -600.0, 1500.0), Point3::new(500.0, 600.0, 1500.0)],
    );
    let (front, back) = crossing(&beside_window, &sides);
    assert!(front.is_some());
    assert!(back.is_some());
}

#[test]
fn test_duct_in_face_plane_has_no_crossing() {
    let solids = vec![wall_with_window()];
    let orientation = Vector3::new(0.0, -1.0, 0.0);
    let selection = select_side_faces(&solids, &orientation, &Tolerances::default());
    let sides = SideFaces::from_selection(&selection).unwrap();

    let along_face = Duct::new(
        ElementId(10),
        100.0,
        vec![Point3::new(0.0, -100.0, 500.0), Point3::new(4000.0, -100.0, 500.0)],
    );
    let (front, back) = crossing(&along_face, &sides);
    assert_eq!(front, None);
    assert_eq!(back, None);
}

#[test]
fn test_worked_enlargement_example() {
    let spec = compute_opening(
        Point3::new(0.0, 0.0, 1000.0),
        Point3::new(50.0, 0.0, 800.0),
        Vector3::new(1.0, 0.0, 0.0),
        200.0,
        150.0,
    );

    assert_relative_eq!(spec.diameter, 421.576_380_526_059_1, epsilon = 1e-9);
    assert_relative_eq!(spec.center, Point3::new(25.0, 0.0, 900.0), epsilon = 1e-12);
}
