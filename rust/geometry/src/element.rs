// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-model elements: walls and ducts.
//!
//! Both are read-only snapshots supplied by a model repository. Walls carry
//! their solid geometry; ducts carry their connector endpoints.

use std::fmt;

use nalgebra::{Point3, Vector3};

use crate::bounds::BoundingBox;
use crate::error::Result;
use crate::line::{centerline, Line};
use crate::solid::Solid;

/// Identifier of an element in the host model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable reference to one face of an element's geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceRef {
    /// Element owning the face
    pub element: ElementId,
    /// Position of the face within the element's geometry
    pub index: u32,
}

impl FaceRef {
    pub fn new(element: ElementId, index: u32) -> Self {
        Self { element, index }
    }
}

/// A wall: a planar slab with a thickness direction
#[derive(Debug, Clone)]
pub struct Wall {
    pub id: ElementId,
    /// World-space bounds of the wall geometry
    pub bounds: BoundingBox,
    /// Unit vector perpendicular to the wall's run (its thickness direction)
    pub orientation: Vector3<f64>,
    /// Wall thickness
    pub width: f64,
    /// Solid boundary geometry
    pub solids: Vec<Solid>,
}

impl Wall {
    /// Create a wall from already computed geometry
    pub fn new(
        id: ElementId,
        bounds: BoundingBox,
        orientation: Vector3<f64>,
        width: f64,
        solids: Vec<Solid>,
    ) -> Self {
        Self {
            id,
            bounds,
            orientation,
            width,
            solids,
        }
    }

    /// Build a straight wall from its location line.
    ///
    /// The location line runs along the wall's center at its base elevation
    /// (`start.z`). The orientation is `run x Z`.
    pub fn straight(
        id: ElementId,
        start: Point3<f64>,
        end: Point3<f64>,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        let solid = Solid::slab(id, start, end, width, height)?;
        let run = Vector3::new(end.x - start.x, end.y - start.y, 0.0).normalize();
        let orientation = run.cross(&Vector3::z());
        let bounds = solid.bounds();

        Ok(Self::new(id, bounds, orientation, width, vec![solid]))
    }
}

/// A round duct segment
#[derive(Debug, Clone)]
pub struct Duct {
    pub id: ElementId,
    pub diameter: f64,
    /// Connector origins in connector-manager order
    pub connectors: Vec<Point3<f64>>,
}

impl Duct {
    pub fn new(id: ElementId, diameter: f64, connectors: Vec<Point3<f64>>) -> Self {
        Self {
            id,
            diameter,
            connectors,
        }
    }

    /// Bounds of the connectors grown by the duct radius
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(&self.connectors).inflate(self.diameter / 2.0)
    }

    /// Unbounded centerline through the first two connectors
    pub fn centerline(&self) -> Result<Line> {
        centerline(self.id, &self.connectors)
    }
}
