// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model repository: the source of walls, ducts and wall geometry.

use rustc_hash::FxHashMap;
use wall_opening_geometry::{BoundingBox, Duct, ElementId, Solid, Wall};

use crate::config::{OpeningConfig, DEFAULT_GRID_CELL_SIZE};
use crate::error::{Error, Result};
use crate::spatial::GridIndex;

/// Read access to the host model.
///
/// Wall geometry is a transient query result: callers fetch it per wall and
/// drop it before moving on.
pub trait ModelRepository: Sync {
    /// All walls in the model.
    fn walls(&self) -> Vec<&Wall>;

    /// Solid boundary geometry of a wall.
    fn wall_geometry(&self, wall: ElementId) -> Result<Vec<Solid>>;

    /// Ducts whose bounding box overlaps `bounds`.
    fn ducts_in_bounds(&self, bounds: &BoundingBox) -> Vec<&Duct>;
}

/// A model held entirely in memory.
#[derive(Debug)]
pub struct InMemoryModel {
    walls: Vec<Wall>,
    wall_lookup: FxHashMap<ElementId, usize>,
    ducts: Vec<Duct>,
    duct_index: GridIndex,
}

impl InMemoryModel {
    /// Creates a model with the default grid cell size.
    pub fn new(walls: Vec<Wall>, ducts: Vec<Duct>) -> Self {
        Self::with_cell_size(walls, ducts, DEFAULT_GRID_CELL_SIZE)
    }

    /// Creates a model using the configured grid cell size.
    pub fn with_config(walls: Vec<Wall>, ducts: Vec<Duct>, config: &OpeningConfig) -> Self {
        Self::with_cell_size(walls, ducts, config.grid_cell_size)
    }

    /// Creates a model whose duct index uses `cell_size`. Invalid sizes fall
    /// back to the default (see [`GridIndex::new`]).
    pub fn with_cell_size(walls: Vec<Wall>, ducts: Vec<Duct>, cell_size: f64) -> Self {
        let wall_lookup = walls
            .iter()
            .enumerate()
            .map(|(i, wall)| (wall.id, i))
            .collect();
        let duct_index = GridIndex::from_bounds(cell_size, ducts.iter().map(Duct::bounds));

        Self {
            walls,
            wall_lookup,
            ducts,
            duct_index,
        }
    }

    pub fn wall(&self, id: ElementId) -> Option<&Wall> {
        self.wall_lookup.get(&id).map(|&i| &self.walls[i])
    }

    pub fn ducts(&self) -> &[Duct] {
        &self.ducts
    }
}

impl ModelRepository for InMemoryModel {
    fn walls(&self) -> Vec<&Wall> {
        self.walls.iter().collect()
    }

    fn wall_geometry(&self, wall: ElementId) -> Result<Vec<Solid>> {
        self.wall(wall)
            .map(|w| w.solids.clone())
            .ok_or_else(|| Error::Repository(format!("wall {} not found", wall)))
    }

    fn ducts_in_bounds(&self, bounds: &BoundingBox) -> Vec<&Duct> {
        self.duct_index
            .query(bounds)
            .into_iter()
            .map(|i| &self.ducts[i])
            .collect()
    }
}
