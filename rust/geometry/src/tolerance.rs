// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floating point tolerances shared by the face selector and intersector.

/// Default epsilon for all comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Tolerances used when classifying faces and intersecting lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Largest |normal.z| still treated as a horizontal normal
    pub vertical: f64,
    /// Largest difference between |normal| and |orientation| components
    /// still treated as equal
    pub axis: f64,
    /// Distance (model units) below which a point is on a face boundary or a
    /// line lies in a face's plane
    pub intersection: f64,
    /// |cos| between a line's direction and a face normal below which the
    /// line counts as parallel to the face (unitless)
    pub parallel: f64,
}

impl Tolerances {
    /// Use a single epsilon for every comparison
    pub fn uniform(epsilon: f64) -> Self {
        Self {
            vertical: epsilon,
            axis: epsilon,
            intersection: epsilon,
            parallel: epsilon,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::uniform(DEFAULT_EPSILON)
    }
}
