// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Round opening parameters
//!
//! Given where a duct's centerline crosses a wall's two side faces, computes
//! the opening's center, orientation, depth and diameter. A duct crossing
//! the wall obliquely leaves an elongated footprint on each face; the
//! opening diameter is enlarged so the circle contains it.
//!
//! The enlargement is an approximation, not an exact ellipse-to-circle fit:
//!
//! ```text
//! diff  = sqrt(vertical² + horizontal²)
//! edge  = diameter * diff / width
//! D     = sqrt(diameter² + edge²) + diff        (diff > 0)
//! D     = diameter                              (diff = 0)
//! ```

use nalgebra::{Point3, Vector3};

/// Horizontal world axis along which the front/back offset is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAxis {
    X,
    Y,
}

impl HorizontalAxis {
    /// Pick the dominant horizontal component of a reference direction.
    ///
    /// Returns `None` when |x| and |y| are exactly equal (a wall running
    /// exactly diagonally). In that case no horizontal offset is applied.
    pub fn select(reference_direction: &Vector3<f64>) -> Option<Self> {
        let x = reference_direction.x.abs();
        let y = reference_direction.y.abs();

        if y > x {
            Some(HorizontalAxis::Y)
        } else if x > y {
            Some(HorizontalAxis::X)
        } else {
            None
        }
    }

    #[inline]
    fn coordinate(self, p: &Point3<f64>) -> f64 {
        match self {
            HorizontalAxis::X => p.x,
            HorizontalAxis::Y => p.y,
        }
    }

    #[inline]
    fn coordinate_mut(self, p: &mut Point3<f64>) -> &mut f64 {
        match self {
            HorizontalAxis::X => &mut p.x,
            HorizontalAxis::Y => &mut p.y,
        }
    }
}

/// Placement parameters of one round opening
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpeningSpec {
    /// Insertion point, midway through the wall along the duct
    pub center: Point3<f64>,
    /// In-plane horizontal reference direction of the host face
    pub orientation: Vector3<f64>,
    /// Opening diameter, never smaller than the duct diameter
    pub diameter: f64,
    /// Opening depth (the wall thickness)
    pub depth: f64,
}

/// Diameter of a round opening for a duct crossing a wall with the given
/// front-to-back offsets.
pub fn enlarged_diameter(horizontal_diff: f64, vertical_diff: f64, width: f64, diameter: f64) -> f64 {
    let diff = (vertical_diff * vertical_diff + horizontal_diff * horizontal_diff).sqrt();
    if diff > 0.0 {
        let scale = diff / width;
        let edge = diameter * scale;
        return (diameter * diameter + edge * edge).sqrt() + diff;
    }
    diameter
}

/// Compute the opening for a duct crossing a wall at `front` and `back`.
pub fn compute_opening(
    front: Point3<f64>,
    back: Point3<f64>,
    reference_direction: Vector3<f64>,
    width: f64,
    diameter: f64,
) -> OpeningSpec {
    let vertical_diff = front.z - back.z;
    let mut center = front;
    center.z -= vertical_diff / 2.0;

    let mut horizontal_diff = 0.0;
    if let Some(axis) = HorizontalAxis::select(&reference_direction) {
        horizontal_diff = axis.coordinate(&front) - axis.coordinate(&back);
        *axis.coordinate_mut(&mut center) -= horizontal_diff / 2.0;
    }

    OpeningSpec {
        center,
        orientation: reference_direction,
        diameter: enlarged_diameter(horizontal_diff, vertical_diff, width, diameter),
        depth: width,
    }
}

/// Compute the opening only when both crossing points exist
pub fn opening_between(
    front: Option<Point3<f64>>,
    back: Option<Point3<f64>>,
    reference_direction: Vector3<f64>,
    width: f64,
    diameter: f64,
) -> Option<OpeningSpec> {
    match (front, back) {
        (Some(front), Some(back)) => Some(compute_opening(
            front,
            back,
            reference_direction,
            width,
            diameter,
        )),
        _ => None,
    }
}
