// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Wall-Opening Processing
//!
//! Places round openings wherever a duct crosses a wall.
//!
//! The host model is reached through two collaborators injected into
//! [`RoundOpeningCreator`]:
//!
//! - a [`ModelRepository`] supplying walls, their transient solid geometry
//!   and a broad-phase duct query;
//! - a [`PlacementService`] instantiating each computed opening.
//!
//! ```no_run
//! use wall_opening_processing::{
//!     InMemoryModel, OpeningConfig, OpeningStrategy, RecordingPlacement, RoundOpeningCreator,
//! };
//!
//! let model = InMemoryModel::new(Vec::new(), Vec::new());
//! let mut creator = RoundOpeningCreator::new(model, RecordingPlacement::new(), OpeningConfig::from_env());
//! let report = creator.create_openings()?;
//! println!("{}", report.to_json().unwrap_or_default());
//! # Ok::<(), wall_opening_processing::Error>(())
//! ```

pub mod config;
pub mod creator;
pub mod error;
pub mod placement;
pub mod report;
pub mod repository;
pub mod spatial;

pub use config::OpeningConfig;
pub use creator::{openings_for_wall, OpeningStrategy, PlannedOpening, RoundOpeningCreator, WallOutcome};
pub use error::{Error, Result};
pub use placement::{PlacedOpening, PlacementService, RecordingPlacement};
pub use report::PlacementReport;
pub use repository::{InMemoryModel, ModelRepository};
pub use spatial::GridIndex;
