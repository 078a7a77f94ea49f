// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid boundary geometry as a list of faces

use nalgebra::{Point3, Vector3};

use crate::bounds::BoundingBox;
use crate::element::{ElementId, FaceRef};
use crate::error::{Error, Result};
use crate::face::{Face, PlanarFace};

/// Closed boundary of a solid
#[derive(Debug, Clone, Default)]
pub struct Solid {
    faces: Vec<Face>,
}

impl Solid {
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterate over the planar faces only
    pub fn planar_faces(&self) -> impl Iterator<Item = &PlanarFace> {
        self.faces.iter().filter_map(Face::as_planar)
    }

    /// Bounds of every planar face's outer loop and curved face sample
    pub fn bounds(&self) -> BoundingBox {
        let mut bounds = BoundingBox::new();
        for face in &self.faces {
            match face {
                Face::Planar(planar) => {
                    for uv in planar.outer_loop() {
                        bounds.expand(&planar.evaluate(uv));
                    }
                }
                Face::Curved(curved) => {
                    for p in &curved.boundary {
                        bounds.expand(p);
                    }
                }
            }
        }
        bounds
    }

    /// Build the box-shaped solid of a straight wall.
    ///
    /// `start` and `end` are the ends of the wall's center location line at
    /// its base elevation (`start.z`). Faces are wound with outward normals
    /// in the order: exterior side, interior side, start cap, end cap,
    /// bottom, top.
    pub fn slab(
        element: ElementId,
        start: Point3<f64>,
        end: Point3<f64>,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidWall(format!(
                "wall {} needs positive width and height, got {} x {}",
                element, width, height
            )));
        }

        let run = Vector3::new(end.x - start.x, end.y - start.y, 0.0);
        let length = run.norm();
        if length <= 0.0 {
            return Err(Error::InvalidWall(format!(
                "wall {} has a zero-length location line",
                element
            )));
        }

        let run = run / length;
        let side = run.cross(&Vector3::z()) * (width / 2.0);
        let up = Vector3::z() * height;
        let base = start.z;
        let start = Point3::new(start.x, start.y, base);
        let end = Point3::new(end.x, end.y, base);

        // a*: exterior side (+side), b*: interior side, *t: top
        let a0 = start + side;
        let a1 = end + side;
        let b0 = start - side;
        let b1 = end - side;
        let (a0t, a1t, b0t, b1t) = (a0 + up, a1 + up, b0 + up, b1 + up);

        let loops = [
            [a0, a1, a1t, a0t],
            [b0, b0t, b1t, b1],
            [b0, a0, a0t, b0t],
            [a1, b1, b1t, a1t],
            [a0, b0, b1, a1],
            [a0t, a1t, b1t, b0t],
        ];

        let faces = loops
            .iter()
            .enumerate()
            .map(|(index, polygon)| {
                PlanarFace::from_polygon(FaceRef::new(element, index as u32), polygon)
                    .map(Face::Planar)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(faces))
    }
}
