// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement service: turns computed openings into host-model objects.

use serde::{Deserialize, Serialize};
use wall_opening_geometry::{FaceRef, OpeningSpec};

use crate::error::Result;

/// Instantiates openings in the host model.
///
/// Calls are issued sequentially. Grouping them into one unit of work is up
/// to the implementation.
pub trait PlacementService {
    /// Place one opening hosted on `host`.
    fn place(&mut self, host: FaceRef, spec: &OpeningSpec) -> Result<()>;
}

/// One opening handed to a placement service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedOpening {
    pub host: FaceRef,
    pub spec: OpeningSpec,
}

/// Placement service that records openings in call order.
#[derive(Debug, Default, Clone)]
pub struct RecordingPlacement {
    placed: Vec<PlacedOpening>,
}

impl RecordingPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placed(&self) -> &[PlacedOpening] {
        &self.placed
    }

    pub fn into_placed(self) -> Vec<PlacedOpening> {
        self.placed
    }

    /// Recorded openings as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.placed)
    }
}

impl PlacementService for RecordingPlacement {
    fn place(&mut self, host: FaceRef, spec: &OpeningSpec) -> Result<()> {
        self.placed.push(PlacedOpening { host, spec: *spec });
        Ok(())
    }
}

impl<P: PlacementService + ?Sized> PlacementService for &mut P {
    fn place(&mut self, host: FaceRef, spec: &OpeningSpec) -> Result<()> {
        (**self).place(host, spec)
    }
}
