//! Travel-time matrix construction (Naismith's rule over a distance table).

use crate::config::SolverConfig;
use crate::types::instance::{DistanceRecord, Instance};

/// Minutes to cover a single distance record at the given speed/Naismith settings.
pub fn leg_travel_minutes(record: &DistanceRecord, config: &SolverConfig) -> f64 {
    (record.km / config.speed_kmh) * 60.0 + record.height_gain_m / config.naismith_coefficient
}

/// Project the instance's distance table into a travel-time matrix over the
/// full `(N+2) x (N+2)` node space, for a given speed/Naismith configuration.
///
/// Not assumed symmetric: ascent between `i` and `j` need not mirror ascent
/// between `j` and `i`.
pub fn build_travel_time_matrix(instance: &Instance, config: &SolverConfig) -> Vec<Vec<f64>> {
    let all = instance.all();
    let mut matrix = vec![vec![0.0; all]; all];
    for i in 0..all {
        for j in 0..all {
            if i == j {
                continue;
            }
            matrix[i][j] = leg_travel_minutes(&instance.distances[i][j], config);
        }
    }
    matrix
}
