// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broad-phase grid index over duct bounding boxes.
//!
//! Divides space into cubic cells of side `cell_size`. Each box is filed
//! under every cell it touches; a query gathers the entries of the cells the
//! query box touches and then checks exact box overlap.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;
use wall_opening_geometry::BoundingBox;

use crate::config::DEFAULT_GRID_CELL_SIZE;

/// Boxes spanning more cells than this are kept in a linear overflow list.
const MAX_CELLS_PER_ENTRY: i64 = 4096;

/// A spatial hash grid of bounding boxes keyed by insertion index.
#[derive(Debug)]
pub struct GridIndex {
    cell_size: f64,
    grid: FxHashMap<(i64, i64, i64), Vec<usize>>,
    bounds: Vec<BoundingBox>,
    oversized: Vec<usize>,
}

impl GridIndex {
    /// Creates an empty index with the given cell size.
    ///
    /// A non-finite or non-positive size falls back to
    /// [`DEFAULT_GRID_CELL_SIZE`].
    pub fn new(cell_size: f64) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            warn!(cell_size, "Invalid grid cell size, using default");
            DEFAULT_GRID_CELL_SIZE
        };

        Self {
            cell_size,
            grid: FxHashMap::default(),
            bounds: Vec::new(),
            oversized: Vec::new(),
        }
    }

    /// Builds an index from a sequence of boxes; entry `i` is the `i`-th box.
    pub fn from_bounds(cell_size: f64, boxes: impl IntoIterator<Item = BoundingBox>) -> Self {
        let mut index = Self::new(cell_size);
        for b in boxes {
            index.insert(b);
        }
        index
    }

    /// Inserts a box and returns its entry index.
    pub fn insert(&mut self, bounds: BoundingBox) -> usize {
        let entry = self.bounds.len();
        self.bounds.push(bounds);

        if !bounds.is_valid() {
            return entry;
        }

        let (lo, hi) = self.cell_range(&bounds);
        if cell_count(lo, hi) > MAX_CELLS_PER_ENTRY {
            self.oversized.push(entry);
            return entry;
        }

        for x in lo.0..=hi.0 {
            for y in lo.1..=hi.1 {
                for z in lo.2..=hi.2 {
                    self.grid.entry((x, y, z)).or_default().push(entry);
                }
            }
        }
        entry
    }

    /// Returns the entries whose box overlaps `query`, in insertion order.
    pub fn query(&self, query: &BoundingBox) -> Vec<usize> {
        if !query.is_valid() {
            return Vec::new();
        }

        let mut candidates: FxHashSet<usize> = self.oversized.iter().copied().collect();
        let (lo, hi) = self.cell_range(query);

        if cell_count(lo, hi) > self.grid.len() as i64 {
            // Cheaper to walk the occupied cells than the query range
            for (cell, entries) in &self.grid {
                if (lo.0..=hi.0).contains(&cell.0)
                    && (lo.1..=hi.1).contains(&cell.1)
                    && (lo.2..=hi.2).contains(&cell.2)
                {
                    candidates.extend(entries.iter().copied());
                }
            }
        } else {
            for x in lo.0..=hi.0 {
                for y in lo.1..=hi.1 {
                    for z in lo.2..=hi.2 {
                        if let Some(entries) = self.grid.get(&(x, y, z)) {
                            candidates.extend(entries.iter().copied());
                        }
                    }
                }
            }
        }

        let mut hits: Vec<usize> = candidates
            .into_iter()
            .filter(|&entry| self.bounds[entry].intersects(query))
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of indexed boxes.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    fn cell_range(&self, b: &BoundingBox) -> ((i64, i64, i64), (i64, i64, i64)) {
        (
            self.cell_coords(b.min.x, b.min.y, b.min.z),
            self.cell_coords(b.max.x, b.max.y, b.max.z),
        )
    }

    fn cell_coords(&self, x: f64, y: f64, z: f64) -> (i64, i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
            (z / self.cell_size).floor() as i64,
        )
    }
}

fn cell_count(lo: (i64, i64, i64), hi: (i64, i64, i64)) -> i64 {
    let span = |lo: i64, hi: i64| hi.saturating_sub(lo).saturating_add(1);
    span(lo.0, hi.0)
        .saturating_mul(span(lo.1, hi.1))
        .saturating_mul(span(lo.2, hi.2))
}
