//! Shared constants for the solver and its minimum-speed search.

/// Default minutes spent at a checkpoint after arrival and any waiting.
pub const DEFAULT_DWELL_MINUTES: f64 = 10.0;

/// Default Naismith coefficient: metres of ascent per extra minute of travel time.
pub const DEFAULT_NAISMITH_COEFFICIENT: f64 = 10.0;

/// Lower bound of the minimum-speed bisection, in km/h.
pub const MIN_SPEED_KMH: f64 = 3.0;

/// Upper bound of the minimum-speed bisection, in km/h.
pub const MAX_SPEED_KMH: f64 = 20.0;

/// Bisection precision for the minimum-speed search, in km/h.
pub const SPEED_SEARCH_PRECISION_KMH: f64 = 0.01;

/// Largest number of intermediate checkpoints the DP is designed for.
/// The algorithm is parametric in `N`; this is a practical ceiling, not a hard limit.
pub const MAX_CHECKPOINTS: usize = 17;
