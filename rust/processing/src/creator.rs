// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Round opening creation for every duct crossing a wall.
//!
//! Two-stage filter per wall: a bounding-box broad phase through the
//! repository, then exact intersection of each candidate duct's centerline
//! with the wall's two side faces. Each (wall, duct) pair is independent, so
//! walls may be computed in parallel; placements are always issued in wall
//! order on the calling thread.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use wall_opening_geometry::{
    find_intersection, opening_between, select_side_faces, ElementId, FaceRef, HorizontalAxis,
    OpeningSpec, SideFaces, Tolerances, Wall,
};

use crate::config::OpeningConfig;
use crate::error::Result;
use crate::placement::PlacementService;
use crate::report::PlacementReport;
use crate::repository::ModelRepository;

/// Computes and places openings for the active model.
pub trait OpeningStrategy {
    fn create_openings(&mut self) -> Result<PlacementReport>;
}

/// An opening computed for one (wall, duct) pair, not yet placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedOpening {
    pub wall: ElementId,
    pub duct: ElementId,
    /// Side face hosting the opening
    pub host: FaceRef,
    pub spec: OpeningSpec,
}

/// Openings and counters for a single wall.
#[derive(Debug, Default)]
pub struct WallOutcome {
    pub openings: Vec<PlannedOpening>,
    /// Candidate ducts without a valid centerline
    pub malformed: Vec<ElementId>,
    pub report: PlacementReport,
}

/// Round-opening strategy over an injected repository and placement service.
pub struct RoundOpeningCreator<R, P> {
    repository: R,
    placement: P,
    config: OpeningConfig,
}

impl<R: ModelRepository, P: PlacementService> RoundOpeningCreator<R, P> {
    pub fn new(repository: R, placement: P, config: OpeningConfig) -> Self {
        Self {
            repository,
            placement,
            config,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn placement(&self) -> &P {
        &self.placement
    }

    pub fn config(&self) -> &OpeningConfig {
        &self.config
    }

    pub fn into_parts(self) -> (R, P) {
        (self.repository, self.placement)
    }

    /// Compute every opening without placing anything.
    pub fn plan(&self) -> (Vec<PlannedOpening>, PlacementReport) {
        let walls = self.repository.walls();
        let tolerances = self.config.tolerances();
        let repository = &self.repository;

        let outcomes: Vec<WallOutcome> = if self.config.parallel {
            walls
                .par_iter()
                .map(|wall| openings_for_wall(repository, wall, &tolerances))
                .collect()
        } else {
            walls
                .iter()
                .map(|wall| openings_for_wall(repository, wall, &tolerances))
                .collect()
        };

        let mut report = PlacementReport::default();
        let mut openings = Vec::new();
        let mut malformed = FxHashSet::default();
        for outcome in outcomes {
            report.merge(&outcome.report);
            openings.extend(outcome.openings);
            malformed.extend(outcome.malformed);
        }
        // A bad duct near several walls counts once
        report.malformed_ducts = malformed.len();
        (openings, report)
    }
}

impl<R: ModelRepository, P: PlacementService> OpeningStrategy for RoundOpeningCreator<R, P> {
    fn create_openings(&mut self) -> Result<PlacementReport> {
        let (openings, mut report) = self.plan();

        for planned in &openings {
            if let Err(err) = self.placement.place(planned.host, &planned.spec) {
                error!(
                    wall = %planned.wall,
                    duct = %planned.duct,
                    error = %err,
                    "Placement failed, aborting run"
                );
                return Err(err);
            }
            report.openings_placed += 1;
        }

        info!(
            walls = report.walls_scanned,
            walls_not_simple = report.walls_not_simple,
            pairs = report.pairs_evaluated,
            missed = report.pairs_without_intersection,
            malformed = report.malformed_ducts,
            placed = report.openings_placed,
            "Round openings created"
        );

        Ok(report)
    }
}

/// Compute the openings for one wall.
///
/// The wall's solids are fetched here and dropped on return.
pub fn openings_for_wall<R: ModelRepository + ?Sized>(
    repository: &R,
    wall: &Wall,
    tolerances: &Tolerances,
) -> WallOutcome {
    let mut outcome = WallOutcome::default();
    outcome.report.walls_scanned = 1;

    let ducts = repository.ducts_in_bounds(&wall.bounds);
    if ducts.is_empty() {
        outcome.report.walls_without_candidates = 1;
        return outcome;
    }

    let solids = match repository.wall_geometry(wall.id) {
        Ok(solids) => solids,
        Err(err) => {
            warn!(wall = %wall.id, error = %err, "Skipping wall without geometry");
            outcome.report.walls_without_geometry = 1;
            return outcome;
        }
    };

    let selection = select_side_faces(&solids, &wall.orientation, tolerances);
    let Some(sides) = SideFaces::from_selection(&selection) else {
        debug!(
            wall = %wall.id,
            side_faces = selection.len(),
            "Skipping wall that is not a simple slab"
        );
        outcome.report.walls_not_simple = 1;
        return outcome;
    };

    let reference = sides.front.reference_direction();
    let axis_tie = HorizontalAxis::select(&reference).is_none();

    for duct in ducts {
        outcome.report.pairs_evaluated += 1;

        let line = match duct.centerline() {
            Ok(line) => line,
            Err(err) => {
                error!(wall = %wall.id, duct = %duct.id, error = %err, "Malformed duct");
                outcome.report.malformed_ducts += 1;
                outcome.malformed.push(duct.id);
                continue;
            }
        };

        let front = find_intersection(&line, sides.front, tolerances);
        let back = find_intersection(&line, sides.back, tolerances);

        let Some(spec) = opening_between(front, back, reference, wall.width, duct.diameter) else {
            debug!(wall = %wall.id, duct = %duct.id, "Duct does not cross both side faces");
            outcome.report.pairs_without_intersection += 1;
            continue;
        };

        if axis_tie {
            warn!(
                wall = %wall.id,
                duct = %duct.id,
                "Diagonal wall: opening placed without horizontal offset"
            );
            outcome.report.axis_ties += 1;
        }

        outcome.report.openings_planned += 1;
        outcome.openings.push(PlannedOpening {
            wall: wall.id,
            duct: duct.id,
            host: sides.front.reference(),
            spec,
        });
    }

    outcome
}
