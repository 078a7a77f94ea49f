// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line–face intersection
//!
//! Intersection is reported as a set comparison between the unbounded line
//! and the bounded face region, plus the resulting points. Callers that only
//! need a single crossing point use [`find_intersection`].

use nalgebra::Point3;
use smallvec::SmallVec;

use crate::face::PlanarFace;
use crate::line::Line;
use crate::tolerance::Tolerances;

/// How a line relates to a face region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetComparison {
    /// No common points
    Disjoint,
    /// The line crosses the face
    Overlap,
    /// The line lies in the face's plane
    Subset,
}

/// Result of intersecting a line with a face
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub comparison: SetComparison,
    pub points: SmallVec<[Point3<f64>; 1]>,
}

impl Intersection {
    fn disjoint() -> Self {
        Self {
            comparison: SetComparison::Disjoint,
            points: SmallVec::new(),
        }
    }
}

impl PlanarFace {
    /// Intersect an unbounded line with this face.
    ///
    /// `tolerances.parallel` bounds the parallel test (|direction . normal|);
    /// `tolerances.intersection` is the in-plane and boundary distance.
    pub fn intersect(&self, line: &Line, tolerances: &Tolerances) -> Intersection {
        let normal = self.normal();
        let denom = line.direction.dot(&normal);
        let offset = (self.origin() - line.origin).dot(&normal);

        if denom.abs() < tolerances.parallel {
            if offset.abs() < tolerances.intersection {
                return Intersection {
                    comparison: SetComparison::Subset,
                    points: SmallVec::new(),
                };
            }
            return Intersection::disjoint();
        }

        let point = line.point_at(offset / denom);
        if !self.contains_uv(&self.project(&point), tolerances.intersection) {
            return Intersection::disjoint();
        }

        let mut points = SmallVec::new();
        points.push(point);
        Intersection {
            comparison: SetComparison::Overlap,
            points,
        }
    }
}

/// Single crossing point of a line with a face, if any.
///
/// Only the first point is used; a line lying in the face plane has no
/// single crossing point.
pub fn find_intersection(
    line: &Line,
    face: &PlanarFace,
    tolerances: &Tolerances,
) -> Option<Point3<f64>> {
    let result = face.intersect(line, tolerances);

    if result.comparison == SetComparison::Disjoint {
        return None;
    }
    result.points.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementId, FaceRef};
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    const TOL: Tolerances = Tolerances {
        vertical: 1e-9,
        axis: 1e-9,
        intersection: 1e-9,
        parallel: 1e-9,
    };

    /// 1000 x 1000 face in the plane y = 0
    fn wall_face() -> PlanarFace {
        let outer = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1000.0, 0.0, 0.0),
            Point3::new(1000.0, 0.0, 1000.0),
            Point3::new(0.0, 0.0, 1000.0),
        ];
        PlanarFace::from_polygon(FaceRef::new(ElementId(1), 0), &outer).unwrap()
    }

    #[test]
    fn test_perpendicular_line_hits_face() {
        let line = Line::through(Point3::new(500.0, -300.0, 400.0), Point3::new(500.0, 300.0, 400.0))
            .unwrap();

        let result = wall_face().intersect(&line, &TOL);
        assert_eq!(result.comparison, SetComparison::Overlap);
        assert_eq!(result.points.len(), 1);
        assert_relative_eq!(result.points[0], Point3::new(500.0, 0.0, 400.0), epsilon = 1e-9);
    }

    #[test]
    fn test_line_behind_origin_still_hits() {
        // The line is unbounded: the crossing lies before the first connector
        let line = Line::through(Point3::new(200.0, 100.0, 200.0), Point3::new(200.0, 300.0, 200.0))
            .unwrap();

        let point = find_intersection(&line, &wall_face(), &TOL).unwrap();
        assert_relative_eq!(point, Point3::new(200.0, 0.0, 200.0), epsilon = 1e-9);
    }

    #[test]
    fn test_line_missing_face_region_is_disjoint() {
        let line = Line::through(Point3::new(1500.0, -300.0, 400.0), Point3::new(1500.0, 300.0, 400.0))
            .unwrap();

        assert_eq!(wall_face().intersect(&line, &TOL).comparison, SetComparison::Disjoint);
        assert!(find_intersection(&line, &wall_face(), &TOL).is_none());
    }

    #[test]
    fn test_parallel_line_is_disjoint() {
        let line = Line {
            origin: Point3::new(0.0, 50.0, 500.0),
            direction: Vector3::new(1.0, 0.0, 0.0),
        };
        assert_eq!(wall_face().intersect(&line, &TOL).comparison, SetComparison::Disjoint);
    }

    #[test]
    fn test_line_in_plane_has_no_point() {
        let line = Line {
            origin: Point3::new(0.0, 0.0, 500.0),
            direction: Vector3::new(1.0, 0.0, 0.0),
        };

        let result = wall_face().intersect(&line, &TOL);
        assert_eq!(result.comparison, SetComparison::Subset);
        assert!(result.points.is_empty());
        assert!(find_intersection(&line, &wall_face(), &TOL).is_none());
    }

    #[test]
    fn test_oblique_line_hits_at_plane_crossing() {
        let line = Line::through(Point3::new(0.0, -100.0, 0.0), Point3::new(100.0, 100.0, 100.0))
            .unwrap();

        let point = find_intersection(&line, &wall_face(), &TOL).unwrap();
        assert_relative_eq!(point, Point3::new(50.0, 0.0, 50.0), epsilon = 1e-9);
    }

    #[test]
    fn test_coarse_boundary_tolerance_keeps_oblique_crossings() {
        // About 68 degrees off the face normal: |cos| ~ 0.37
        let line = Line::through(Point3::new(0.0, -200.0, 500.0), Point3::new(1000.0, 200.0, 500.0))
            .unwrap();
        let coarse = Tolerances {
            intersection: 0.5,
            ..TOL
        };

        let point = find_intersection(&line, &wall_face(), &coarse).unwrap();
        assert_relative_eq!(point, Point3::new(500.0, 0.0, 500.0), epsilon = 1e-9);

        // Only the angle cut-off decides parallelism
        let loose_angle = Tolerances {
            parallel: 0.5,
            ..TOL
        };
        assert_eq!(
            wall_face().intersect(&line, &loose_angle).comparison,
            SetComparison::Disjoint
        );
    }
}
