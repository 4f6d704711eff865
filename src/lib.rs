//! Time-windowed checkpoint route optimizer for hiking events.
//!
//! Given an event's checkpoint schedule and a travel-cost table, [`solve`]
//! finds the route that visits the most checkpoints and, among ties,
//! finishes earliest. [`find_minimum_speed`] wraps it in a binary search for
//! the slowest walking pace that still visits every checkpoint.

pub mod config;
pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use services::min_speed::find_minimum_speed;
pub use services::route_card::build_route_card;
pub use services::solver::solve as solve_at_speed;
pub use types::instance::{DistanceRecord, Instance};
pub use types::solution::{MinSpeedResult, RouteCardLeg, SolveResult};

use services::geo::build_travel_time_matrix;

/// Solve the instance at `config`'s fixed speed, producing the route that
/// visits the most checkpoints and, among ties, finishes earliest.
pub fn solve(instance: &Instance, config: &SolverConfig) -> SolveResult {
    let travel_time = build_travel_time_matrix(instance, config);
    solve_at_speed(instance, &travel_time, config)
}
