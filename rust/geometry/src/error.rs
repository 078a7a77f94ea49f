// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::element::ElementId;
use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying wall and duct geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Malformed duct {duct}: expected at least 2 connectors, found {connectors}")]
    MalformedDuct { duct: ElementId, connectors: usize },

    #[error("Degenerate centerline: connector endpoints coincide")]
    DegenerateCenterline,

    #[error("Invalid face: {0}")]
    InvalidFace(String),

    #[error("Invalid wall: {0}")]
    InvalidWall(String),
}
