//! Solver configuration

use std::collections::HashSet;

use crate::defaults::{DEFAULT_DWELL_MINUTES, DEFAULT_NAISMITH_COEFFICIENT};

/// Tunable parameters for a single `solve` or `find_minimum_speed` call.
///
/// Distinct from [`Instance`](crate::types::instance::Instance): the instance is the
/// event's fixed schedule and geometry, while `SolverConfig` is the pace and
/// dwell assumptions a particular run is made under.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Walking speed in km/h used to derive the travel-time matrix.
    pub speed_kmh: f64,
    /// Minutes spent at a checkpoint after arrival and any waiting.
    pub dwell_minutes: f64,
    /// Minutes of extra travel time per metre of ascent.
    pub naismith_coefficient: f64,
    /// Checkpoint names to skip entirely.
    pub excluded: HashSet<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            speed_kmh: 5.0,
            dwell_minutes: DEFAULT_DWELL_MINUTES,
            naismith_coefficient: DEFAULT_NAISMITH_COEFFICIENT,
            excluded: HashSet::new(),
        }
    }
}

impl SolverConfig {
    /// Build a config with the given speed, keeping all other defaults.
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            speed_kmh,
            ..Self::default()
        }
    }

    /// Build a config with an explicit speed and dwell.
    pub fn with_dwell(speed_kmh: f64, dwell_minutes: f64) -> Self {
        Self {
            speed_kmh,
            dwell_minutes,
            ..Self::default()
        }
    }

    /// Brisk race-day pace: 6.0 km/h, minimal dwell.
    pub fn race_day() -> Self {
        Self {
            speed_kmh: 6.0,
            dwell_minutes: 5.0,
            ..Self::default()
        }
    }

    /// Comfortable walking pace: 4.0 km/h, a fuller dwell at each checkpoint.
    pub fn walking_pace() -> Self {
        Self {
            speed_kmh: 4.0,
            dwell_minutes: 15.0,
            ..Self::default()
        }
    }

    /// Mark a checkpoint as excluded from the route (builder-style).
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }
}
