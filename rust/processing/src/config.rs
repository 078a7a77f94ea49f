// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration loaded from environment variables.

use wall_opening_geometry::tolerance::DEFAULT_EPSILON;
use wall_opening_geometry::Tolerances;

/// Default cell size of the duct broad-phase grid (model units).
pub const DEFAULT_GRID_CELL_SIZE: f64 = 2000.0;

/// Opening pipeline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningConfig {
    /// Largest |normal.z| of a wall side face.
    pub vertical_tolerance: f64,
    /// Tolerance when matching |normal| to |orientation| components.
    pub axis_tolerance: f64,
    /// Boundary distance (model units) for face intersection.
    pub intersection_tolerance: f64,
    /// |cos| between duct and face normal below which they are parallel.
    pub parallel_tolerance: f64,
    /// Cell size of the in-memory duct grid index.
    pub grid_cell_size: f64,
    /// Compute walls on the rayon pool. Placement stays sequential.
    pub parallel: bool,
}

impl OpeningConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            vertical_tolerance: env_or("OPENING_VERTICAL_TOLERANCE", DEFAULT_EPSILON),
            axis_tolerance: env_or("OPENING_AXIS_TOLERANCE", DEFAULT_EPSILON),
            intersection_tolerance: env_or("OPENING_INTERSECTION_TOLERANCE", DEFAULT_EPSILON),
            parallel_tolerance: env_or("OPENING_PARALLEL_TOLERANCE", DEFAULT_EPSILON),
            grid_cell_size: env_or("OPENING_GRID_CELL_SIZE", DEFAULT_GRID_CELL_SIZE),
            parallel: std::env::var("OPENING_PARALLEL")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Tolerances for the geometry crate.
    pub fn tolerances(&self) -> Tolerances {
        Tolerances {
            vertical: self.vertical_tolerance,
            axis: self.axis_tolerance,
            intersection: self.intersection_tolerance,
            parallel: self.parallel_tolerance,
        }
    }

    /// Same configuration with parallel wall processing switched on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_and_fallbacks() {
        std::env::set_var("OPENING_AXIS_TOLERANCE", "0.001");
        std::env::set_var("OPENING_GRID_CELL_SIZE", "not-a-number");
        std::env::set_var("OPENING_PARALLEL", "TRUE");
        std::env::set_var("OPENING_PARALLEL_TOLERANCE", "1e-6");

        let config = OpeningConfig::from_env();

        std::env::remove_var("OPENING_AXIS_TOLERANCE");
        std::env::remove_var("OPENING_GRID_CELL_SIZE");
        std::env::remove_var("OPENING_PARALLEL");
        std::env::remove_var("OPENING_PARALLEL_TOLERANCE");

        assert_eq!(config.axis_tolerance, 0.001);
        assert_eq!(config.grid_cell_size, DEFAULT_GRID_CELL_SIZE);
        assert!(config.parallel);
        assert_eq!(config.parallel_tolerance, 1e-6);
        assert_eq!(config.tolerances().parallel, 1e-6);
        assert_eq!(config.tolerances().intersection, config.intersection_tolerance);
        assert_eq!(config.tolerances().axis, 0.001);
        assert_eq!(config.tolerances().vertical, config.vertical_tolerance);
    }
}
