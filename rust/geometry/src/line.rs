// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unbounded lines and duct centerlines

use nalgebra::{Point3, Vector3};

use crate::element::ElementId;
use crate::error::{Error, Result};

/// Squared length below which two connector points are considered coincident
const MIN_SEGMENT_LENGTH_SQ: f64 = 1e-20;

/// An infinite line through `origin` along a unit `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Line {
    /// Line through two distinct points, directed from `a` to `b`
    pub fn through(a: Point3<f64>, b: Point3<f64>) -> Result<Self> {
        let delta = b - a;
        if delta.norm_squared() < MIN_SEGMENT_LENGTH_SQ {
            return Err(Error::DegenerateCenterline);
        }
        Ok(Self {
            origin: a,
            direction: delta.normalize(),
        })
    }

    /// Point at signed distance `t` from the origin
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// Build a duct's centerline from its connector endpoints.
///
/// Only the first two connectors are used. Fewer than two is a malformed
/// duct, not a skip.
pub fn centerline(duct: ElementId, connectors: &[Point3<f64>]) -> Result<Line> {
    match connectors {
        [first, second, ..] => Line::through(*first, *second),
        _ => Err(Error::MalformedDuct {
            duct,
            connectors: connectors.len(),
        }),
    }
}
