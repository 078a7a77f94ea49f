// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Faces of a wall's solid boundary
//!
//! A [`PlanarFace`] stores its boundary in a 2D parametric frame on its
//! plane. The frame gives the face a parametric bounding box and an
//! evaluation function mapping `(u, v)` back to a 3D point.

use nalgebra::{Point2, Point3, Vector3};

use crate::element::FaceRef;
use crate::error::{Error, Result};

/// Minimum Newell normal length for a polygon to count as non-degenerate
const MIN_NORMAL_LENGTH: f64 = 1e-12;

/// 2D bounding box in a face's parametric space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl UvBox {
    /// Parametric center of the box
    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::from((self.min.coords + self.max.coords) / 2.0)
    }
}

/// A bounded planar region with optional holes
#[derive(Debug, Clone)]
pub struct PlanarFace {
    reference: FaceRef,
    /// Origin of the parametric frame (first outer vertex)
    origin: Point3<f64>,
    /// Unit normal, right-hand rule over the outer loop
    normal: Vector3<f64>,
    u_axis: Vector3<f64>,
    v_axis: Vector3<f64>,
    /// Outer loop in parametric coordinates
    outer: Vec<Point2<f64>>,
    /// Inner loops (holes) in parametric coordinates
    holes: Vec<Vec<Point2<f64>>>,
}

impl PlanarFace {
    /// Build a face from its outer boundary polygon
    pub fn from_polygon(reference: FaceRef, outer: &[Point3<f64>]) -> Result<Self> {
        Self::with_holes(reference, outer, &[])
    }

    /// Build a face from its outer boundary and hole polygons.
    ///
    /// The normal follows the winding of `outer`.
    pub fn with_holes(
        reference: FaceRef,
        outer: &[Point3<f64>],
        holes: &[Vec<Point3<f64>>],
    ) -> Result<Self> {
        if outer.len() < 3 {
            return Err(Error::InvalidFace(format!(
                "face {:?} has {} boundary points, need at least 3",
                reference,
                outer.len()
            )));
        }

        let normal = newell_normal(outer).ok_or_else(|| {
            Error::InvalidFace(format!("face {:?} has a degenerate boundary", reference))
        })?;
        let (u_axis, v_axis) = plane_basis(&normal);
        let origin = outer[0];

        let mut face = Self {
            reference,
            origin,
            normal,
            u_axis,
            v_axis,
            outer: Vec::with_capacity(outer.len()),
            holes: Vec::with_capacity(holes.len()),
        };
        face.outer = outer.iter().map(|p| face.project(p)).collect();
        face.holes = holes
            .iter()
            .map(|hole| hole.iter().map(|p| face.project(p)).collect())
            .collect();

        Ok(face)
    }

    #[inline]
    pub fn reference(&self) -> FaceRef {
        self.reference
    }

    /// Unit face normal
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// A point on the face's plane
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Parametric bounding box of the outer loop
    pub fn bounding_box_uv(&self) -> UvBox {
        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);

        for p in &self.outer {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        UvBox { min, max }
    }

    /// Map a parametric point to 3D
    #[inline]
    pub fn evaluate(&self, uv: &Point2<f64>) -> Point3<f64> {
        self.origin + self.u_axis * uv.x + self.v_axis * uv.y
    }

    /// Normal at a parametric point (constant on a plane)
    #[inline]
    pub fn compute_normal(&self, _uv: &Point2<f64>) -> Vector3<f64> {
        self.normal
    }

    /// Project a 3D point onto the face's parametric frame
    #[inline]
    pub fn project(&self, p: &Point3<f64>) -> Point2<f64> {
        let v = p - self.origin;
        Point2::new(v.dot(&self.u_axis), v.dot(&self.v_axis))
    }

    /// Horizontal in-plane direction used to orient an opening on this face.
    ///
    /// Normal at the parametric bounding-box center crossed with global Z.
    pub fn reference_direction(&self) -> Vector3<f64> {
        let center = self.bounding_box_uv().center();
        self.compute_normal(&center).cross(&Vector3::z())
    }

    /// Check if a parametric point lies on the face region.
    ///
    /// Points within `tolerance` of the outer boundary count as inside;
    /// points strictly inside a hole do not.
    pub fn contains_uv(&self, uv: &Point2<f64>, tolerance: f64) -> bool {
        let on_outer = on_contour_boundary(uv, &self.outer, tolerance);
        if !on_outer && !point_in_contour(uv, &self.outer) {
            return false;
        }

        !self.holes.iter().any(|hole| {
            point_in_contour(uv, hole) && !on_contour_boundary(uv, hole, tolerance)
        })
    }

    /// Outer loop in parametric coordinates
    pub fn outer_loop(&self) -> &[Point2<f64>] {
        &self.outer
    }

    /// Number of inner loops
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }
}

/// A non-planar face (cylindrical, swept, ...). Never a wall side face.
#[derive(Debug, Clone)]
pub struct CurvedFace {
    pub reference: FaceRef,
    /// Sampled boundary points
    pub boundary: Vec<Point3<f64>>,
}

/// One face of a solid's boundary
#[derive(Debug, Clone)]
pub enum Face {
    Planar(PlanarFace),
    Curved(CurvedFace),
}

impl Face {
    pub fn reference(&self) -> FaceRef {
        match self {
            Face::Planar(face) => face.reference(),
            Face::Curved(face) => face.reference,
        }
    }

    pub fn as_planar(&self) -> Option<&PlanarFace> {
        match self {
            Face::Planar(face) => Some(face),
            Face::Curved(_) => None,
        }
    }
}

/// Polygon normal using Newell's method
fn newell_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let mut normal = Vector3::<f64>::zeros();
    let n = points.len();

    for i in 0..n {
        let current = &points[i];
        let next = &points[(i + 1) % n];

        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    normal.try_normalize(MIN_NORMAL_LENGTH)
}

/// Orthonormal in-plane basis for a unit normal
fn plane_basis(normal: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    // Axis least parallel to the normal for a stable cross product
    let abs_x = normal.x.abs();
    let abs_y = normal.y.abs();
    let abs_z = normal.z.abs();

    let reference = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    let u_axis = normal.cross(&reference).normalize();
    let v_axis = normal.cross(&u_axis).normalize();
    (u_axis, v_axis)
}

/// Ray casting point-in-polygon test
fn point_in_contour(point: &Point2<f64>, contour: &[Point2<f64>]) -> bool {
    if contour.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = contour.len();

    let mut j = n - 1;
    for i in 0..n {
        let pi = &contour[i];
        let pj = &contour[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Check if a point lies within `tolerance` of any contour edge
fn on_contour_boundary(point: &Point2<f64>, contour: &[Point2<f64>], tolerance: f64) -> bool {
    let n = contour.len();
    (0..n).any(|i| {
        let a = contour[i];
        let b = contour[(i + 1) % n];
        let ab = b - a;
        let len_sq = ab.norm_squared();
        let t = if len_sq > 0.0 {
            ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (point - (a + ab * t)).norm() <= tolerance
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementId;
    use approx::assert_relative_eq;

    fn square_face(holes: &[Vec<Point3<f64>>]) -> PlanarFace {
        // Face in the plane x = 0, wound so that the normal points to +X
        let outer = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(0.0, 10.0, 10.0),
            Point3::new(0.0, 0.0, 10.0),
        ];
        PlanarFace::with_holes(FaceRef::new(ElementId(1), 0), &outer, holes).unwrap()
    }

    #[test]
    fn test_normal_follows_winding() {
        let face = square_face(&[]);
        assert_relative_eq!(face.normal(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_evaluate_inverts_project() {
        let face = square_face(&[]);
        let p = Point3::new(0.0, 3.5, 7.25);
        assert_relative_eq!(face.evaluate(&face.project(&p)), p, epsilon = 1e-12);
    }

    #[test]
    fn test_bounding_box_center_maps_to_face_center() {
        let face = square_face(&[]);
        let center = face.evaluate(&face.bounding_box_uv().center());
        assert_relative_eq!(center, Point3::new(0.0, 5.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn test_reference_direction_is_horizontal_in_plane() {
        let face = square_face(&[]);
        let dir = face.reference_direction();
        // +X normal crossed with Z
        assert_relative_eq!(dir, Vector3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(dir.dot(&face.normal()), 0.0);
    }

    #[test]
    fn test_contains_respects_boundary_and_holes() {
        let hole = vec![
            Point3::new(0.0, 4.0, 4.0),
            Point3::new(0.0, 4.0, 6.0),
            Point3::new(0.0, 6.0, 6.0),
            Point3::new(0.0, 6.0, 4.0),
        ];
        let face = square_face(&[hole]);
        let uv = |y: f64, z: f64| face.project(&Point3::new(0.0, y, z));

        assert_eq!(face.hole_count(), 1);
        assert!(face.contains_uv(&uv(1.0, 1.0), 1e-9));
        assert!(face.contains_uv(&uv(10.0, 5.0), 1e-9));
        assert!(!face.contains_uv(&uv(11.0, 5.0), 1e-9));
        assert!(!face.contains_uv(&uv(5.0, 5.0), 1e-9));
        assert!(face.contains_uv(&uv(4.0, 5.0), 1e-9));
    }

    #[test]
    fn test_degenerate_polygon_is_rejected() {
        let collinear = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let result = PlanarFace::from_polygon(FaceRef::new(ElementId(1), 0), &collinear);
        assert!(matches!(result, Err(Error::InvalidFace(_))));
    }
}
