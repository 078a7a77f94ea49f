// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the opening pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while matching ducts to walls and placing openings.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid element geometry.
    #[error("Geometry error: {0}")]
    Geometry(#[from] wall_opening_geometry::Error),

    /// The model repository could not answer a query.
    #[error("Repository error: {0}")]
    Repository(String),

    /// The placement service rejected an opening.
    #[error("Placement error: {0}")]
    Placement(String),
}
