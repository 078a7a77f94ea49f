// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run statistics for an opening pass.

use serde::{Deserialize, Serialize};

/// Counters collected while matching ducts to walls.
///
/// Every skip is a normal outcome; the counters say where pairs dropped out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Walls visited
    pub walls_scanned: usize,
    /// Walls whose bounds overlap no duct
    pub walls_without_candidates: usize,
    /// Walls whose geometry could not be fetched
    pub walls_without_geometry: usize,
    /// Walls without exactly two side faces
    pub walls_not_simple: usize,
    /// (wall, duct) pairs that reached the narrow phase
    pub pairs_evaluated: usize,
    /// Pairs where the centerline misses a side face
    pub pairs_without_intersection: usize,
    /// Ducts without a valid centerline, counted once per duct per run
    /// (once per wall in a single wall's report)
    pub malformed_ducts: usize,
    /// Openings computed on a wall with an exactly diagonal reference direction
    pub axis_ties: usize,
    /// Openings computed
    pub openings_planned: usize,
    /// Openings accepted by the placement service
    pub openings_placed: usize,
}

impl PlacementReport {
    /// Add another report's counters to this one
    pub fn merge(&mut self, other: &PlacementReport) {
        self.walls_scanned += other.walls_scanned;
        self.walls_without_candidates += other.walls_without_candidates;
        self.walls_without_geometry += other.walls_without_geometry;
        self.walls_not_simple += other.walls_not_simple;
        self.pairs_evaluated += other.pairs_evaluated;
        self.pairs_without_intersection += other.pairs_without_intersection;
        self.malformed_ducts += other.malformed_ducts;
        self.axis_ties += other.axis_ties;
        self.openings_planned += other.openings_planned;
        self.openings_placed += other.openings_placed;
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
