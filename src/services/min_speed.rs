//! Minimum-speed binary search (C4): the slowest walking speed at which
//! every non-excluded checkpoint is still visitable.

use tracing::debug;

use crate::config::SolverConfig;
use crate::defaults::{MAX_SPEED_KMH, MIN_SPEED_KMH, SPEED_SEARCH_PRECISION_KMH};
use crate::error::{SolverError, SolverResult};
use crate::services::geo::build_travel_time_matrix;
use crate::services::solver::solve;
use crate::types::instance::Instance;
use crate::types::solution::{MinSpeedResult, SolveResult};

fn required_count(instance: &Instance, config: &SolverConfig) -> usize {
    instance
        .checkpoint_names
        .iter()
        .filter(|name| !config.excluded.contains(*name))
        .count()
}

fn solve_at_speed(instance: &Instance, base: &SolverConfig, speed_kmh: f64) -> SolveResult {
    let config = SolverConfig { speed_kmh, ..base.clone() };
    let travel_time = build_travel_time_matrix(instance, &config);
    solve(instance, &travel_time, &config)
}

/// Bisect `[MIN_SPEED_KMH, MAX_SPEED_KMH]` to [`SPEED_SEARCH_PRECISION_KMH`]
/// precision for the slowest speed that still visits every non-excluded
/// checkpoint. `base_config`'s `speed_kmh` is ignored; all other fields
/// (dwell, Naismith coefficient, exclusions) are held fixed across the search.
pub fn find_minimum_speed(instance: &Instance, base_config: &SolverConfig) -> SolverResult<MinSpeedResult> {
    let target = required_count(instance, base_config);

    let mut lo = MIN_SPEED_KMH;
    let mut hi = MAX_SPEED_KMH;

    let hi_result = solve_at_speed(instance, base_config, hi);
    if hi_result.count < target {
        return Err(SolverError::CannotVisitAll { max_kmh: hi });
    }

    let mut best = hi_result;
    let mut best_speed = hi;

    while hi - lo > SPEED_SEARCH_PRECISION_KMH {
        let mid = (lo + hi) / 2.0;
        let result = solve_at_speed(instance, base_config, mid);
        let accepted = result.count >= target;
        debug!(mid, accepted, count = result.count, target, "min-speed bisection step");
        if accepted {
            hi = mid;
            best = result;
            best_speed = mid;
        } else {
            lo = mid;
        }
    }

    Ok(MinSpeedResult { speed_kmh: best_speed, result: best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::instance::DistanceRecord;

    fn record(km: f64) -> DistanceRecord {
        DistanceRecord { km, height_gain_m: 0.0 }
    }

    /// S6 — solvable iff speed >= 6.0 km/h: a single checkpoint 1km out and
    /// back, with a slot window that only a 6 km/h pace clears in time.
    fn s6_instance() -> Instance {
        Instance::new(
            vec!["CP0".into()],
            vec![600],
            vec![vec![true]],
            vec![true],
            vec![
                vec![record(0.0), record(1.0), record(0.0)],
                vec![record(1.0), record(0.0), record(1.0)],
                vec![record(0.0), record(1.0), record(0.0)],
            ],
            600,
            620,
        )
        .unwrap()
    }

    #[test]
    fn test_min_speed_within_precision_of_threshold() {
        let instance = s6_instance();
        let config = SolverConfig { dwell_minutes: 0.0, ..SolverConfig::default() };
        let found = find_minimum_speed(&instance, &config).unwrap();
        assert!(found.speed_kmh >= 6.0 && found.speed_kmh <= 6.02);
        assert_eq!(found.result.count, 1);
    }

    #[test]
    fn test_min_speed_monotonicity() {
        let instance = s6_instance();
        let config = SolverConfig { dwell_minutes: 0.0, speed_kmh: 6.0, ..SolverConfig::default() };
        let at_threshold = solve_at_speed(&instance, &config, 6.0);
        let faster = solve_at_speed(&instance, &config, 10.0);
        assert!(faster.count >= at_threshold.count);
    }

    #[test]
    fn test_cannot_visit_all_at_upper_bound() {
        let instance = Instance::new(
            vec!["CP0".into()],
            vec![600],
            vec![vec![true]],
            vec![true],
            vec![
                vec![record(0.0), record(1000.0), record(0.0)],
                vec![record(1000.0), record(0.0), record(1000.0)],
                vec![record(0.0), record(1000.0), record(0.0)],
            ],
            600,
            620,
        )
        .unwrap();
        let config = SolverConfig::default();
        let result = find_minimum_speed(&instance, &config);
        assert!(matches!(result, Err(SolverError::CannotVisitAll { .. })));
    }
}
