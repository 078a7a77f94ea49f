// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall side-face selection
//!
//! A wall modeled as a simple planar slab has exactly two large opposing
//! faces bounding its thickness. They are the planar faces whose normal is
//! horizontal and whose absolute X or Y component matches the wall
//! orientation's. End caps, top and bottom faces and curved faces are
//! excluded.

use nalgebra::Vector3;
use smallvec::SmallVec;

use crate::face::PlanarFace;
use crate::solid::Solid;
use crate::tolerance::Tolerances;

/// Faces selected from a wall's geometry, in enumeration order
pub type SideFaceSelection<'a> = SmallVec<[&'a PlanarFace; 2]>;

/// Check if a planar face qualifies as a wall side face
#[inline]
pub fn is_side_face(face: &PlanarFace, orientation: &Vector3<f64>, tolerances: &Tolerances) -> bool {
    let normal = face.normal();

    if normal.z.abs() > tolerances.vertical {
        return false;
    }

    (orientation.x.abs() - normal.x.abs()).abs() <= tolerances.axis
        || (orientation.y.abs() - normal.y.abs()).abs() <= tolerances.axis
}

/// Select the side faces of a wall.
///
/// Solids without faces are skipped. The result may hold any number of
/// faces; only exactly two describe a simple slab.
pub fn select_side_faces<'a>(
    solids: &'a [Solid],
    orientation: &Vector3<f64>,
    tolerances: &Tolerances,
) -> SideFaceSelection<'a> {
    solids
        .iter()
        .filter(|solid| !solid.is_empty())
        .flat_map(Solid::planar_faces)
        .filter(|face| is_side_face(face, orientation, tolerances))
        .collect()
}

/// The two side faces of a simple slab wall.
///
/// `front` is the first selected face. Which one is geometrically in front
/// is not implied.
#[derive(Debug, Clone, Copy)]
pub struct SideFaces<'a> {
    pub front: &'a PlanarFace,
    pub back: &'a PlanarFace,
}

impl<'a> SideFaces<'a> {
    /// Pair up a selection, if it holds exactly two faces
    pub fn from_selection(selection: &SideFaceSelection<'a>) -> Option<Self> {
        match selection.as_slice() {
            [front, back] => Some(Self {
                front: *front,
                back: *back,
            }),
            _ => None,
        }
    }
}
