// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-Opening Geometry
//!
//! Pure geometry for placing round openings where ducts cross walls:
//!
//! 1. [`select_side_faces`] finds the two planar faces bounding a wall's
//!    thickness.
//! 2. [`centerline`] builds the unbounded line through a duct's connectors.
//! 3. [`find_intersection`] crosses that line with each side face.
//! 4. [`compute_opening`] turns the two crossings into an [`OpeningSpec`],
//!    enlarging the diameter for oblique ducts.
//!
//! Everything here is a deterministic function of its inputs. Model access
//! and opening placement live in `wall-opening-processing`.

pub mod bounds;
pub mod element;
pub mod error;
pub mod face;
pub mod intersect;
pub mod line;
pub mod opening;
pub mod selector;
pub mod solid;
pub mod tolerance;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use bounds::BoundingBox;
pub use element::{Duct, ElementId, FaceRef, Wall};
pub use error::{Error, Result};
pub use face::{CurvedFace, Face, PlanarFace, UvBox};
pub use intersect::{find_intersection, Intersection, SetComparison};
pub use line::{centerline, Line};
pub use opening::{compute_opening, enlarged_diameter, opening_between, HorizontalAxis, OpeningSpec};
pub use selector::{is_side_face, select_side_faces, SideFaceSelection, SideFaces};
pub use solid::Solid;
pub use tolerance::Tolerances;
