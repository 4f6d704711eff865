//! The bitmask DP engine (C3): for every `(mask, last)` pair, the earliest
//! feasible departure time, with parent links for route reconstruction.

use tracing::debug;

use crate::config::SolverConfig;
use crate::services::reachability::can_reach_finish;
use crate::services::slot_clock::SlotClock;
use crate::types::instance::Instance;
use crate::types::solution::SolveResult;

/// How a `(mask, last)` state was reached. A state with no recorded parent
/// and infinite `dp` value was never reached at all; these three cases must
/// never be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Unset,
    Start,
    From { mask: u32, last: u8 },
}

struct Tables {
    n: usize,
    dp: Vec<f64>,
    parent: Vec<Parent>,
}

impl Tables {
    fn new(n: usize) -> Self {
        let num_states = (1usize << n) * n;
        Self {
            n,
            dp: vec![f64::INFINITY; num_states],
            parent: vec![Parent::Unset; num_states],
        }
    }

    fn index(&self, mask: usize, last: usize) -> usize {
        mask * self.n + last
    }

    fn get(&self, mask: usize, last: usize) -> f64 {
        self.dp[self.index(mask, last)]
    }

    fn set(&mut self, mask: usize, last: usize, value: f64, parent: Parent) {
        let idx = self.index(mask, last);
        self.dp[idx] = value;
        self.parent[idx] = parent;
    }
}

/// Compute the best route under `config`, using popcount-bucketed DP
/// expansion (the production path).
pub fn solve(instance: &Instance, travel_time: &[Vec<f64>], config: &SolverConfig) -> SolveResult {
    run(instance, travel_time, config, true)
}

/// Compute the best route by enumerating every mask at each popcount level,
/// rather than only masks that actually received a finite entry.
///
/// Semantically equivalent to [`solve`]; exists to cross-check the bucketed
/// path's correctness against a simpler, slower sweep.
pub fn solve_full_enumeration(instance: &Instance, travel_time: &[Vec<f64>], config: &SolverConfig) -> SolveResult {
    run(instance, travel_time, config, false)
}

fn run(instance: &Instance, travel_time: &[Vec<f64>], config: &SolverConfig, use_buckets: bool) -> SolveResult {
    let n = instance.n();
    let start = instance.start_index();
    let finish = instance.finish_index();
    let clock = SlotClock::new(&instance.slot_starts);
    let end_minute = instance.end_minute as f64;
    let excluded: Vec<bool> = instance
        .checkpoint_names
        .iter()
        .map(|name| config.excluded.contains(name))
        .collect();

    let mut tables = Tables::new(n);
    let num_masks = 1usize << n;
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); n + 1];

    for j in 0..n {
        if excluded[j] {
            continue;
        }
        let arrive = instance.start_minute as f64 + travel_time[start][j];
        let Some(open_at) = clock.find_next_open_time(arrive, &instance.open[j]) else {
            continue;
        };
        let depart = open_at + config.dwell_minutes;
        if depart > end_minute {
            continue;
        }
        if !can_reach_finish(depart, j, finish, travel_time, &clock, &instance.finish_open, end_minute) {
            continue;
        }
        let mask = 1usize << j;
        tables.set(mask, j, depart, Parent::Start);
        buckets[1].push(mask);
    }

    for p in 1..n {
        let masks: Vec<usize> = if use_buckets {
            let mut m = std::mem::take(&mut buckets[p]);
            m.sort_unstable();
            m.dedup();
            m
        } else {
            (0..num_masks).filter(|m| m.count_ones() as usize == p).collect()
        };

        debug!(popcount = p, states = masks.len(), "expanding DP layer");

        for mask in masks {
            for last in 0..n {
                if mask & (1 << last) == 0 {
                    continue;
                }
                let depart_from = tables.get(mask, last);
                if !depart_from.is_finite() {
                    continue;
                }
                for j in 0..n {
                    if excluded[j] || mask & (1 << j) != 0 {
                        continue;
                    }
                    let arrive = depart_from + travel_time[last][j];
                    if arrive > end_minute {
                        continue;
                    }
                    let Some(open_at) = clock.find_next_open_time(arrive, &instance.open[j]) else {
                        continue;
                    };
                    let depart = open_at + config.dwell_minutes;
                    if depart > end_minute {
                        continue;
                    }
                    if !can_reach_finish(depart, j, finish, travel_time, &clock, &instance.finish_open, end_minute) {
                        continue;
                    }
                    let new_mask = mask | (1 << j);
                    if depart < tables.get(new_mask, j) {
                        tables.set(new_mask, j, depart, Parent::From { mask: mask as u32, last: last as u8 });
                        if use_buckets {
                            buckets[p + 1].push(new_mask);
                        }
                    }
                }
            }
        }
    }

    select_and_reconstruct(instance, travel_time, &clock, &tables, end_minute)
}

fn select_and_reconstruct(
    instance: &Instance,
    travel_time: &[Vec<f64>],
    clock: &SlotClock,
    tables: &Tables,
    end_minute: f64,
) -> SolveResult {
    let n = instance.n();
    let finish = instance.finish_index();
    let num_masks = 1usize << n;

    let mut best: Option<(usize, usize, f64)> = None;
    for mask in 0..num_masks {
        for last in 0..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let depart = tables.get(mask, last);
            if !depart.is_finite() {
                continue;
            }
            let finish_arrival = depart + travel_time[last][finish];
            if finish_arrival > end_minute {
                continue;
            }
            let Some(actual_finish) = clock.find_next_open_time(finish_arrival, &instance.finish_open) else {
                continue;
            };
            if actual_finish > end_minute {
                continue;
            }
            let popcount = mask.count_ones() as usize;
            let better = match best {
                None => true,
                Some((best_mask, _, best_finish)) => {
                    let best_popcount = best_mask.count_ones() as usize;
                    popcount > best_popcount || (popcount == best_popcount && actual_finish < best_finish)
                }
            };
            if better {
                best = Some((mask, last, actual_finish));
            }
        }
    }

    let Some((mask, last, finish_minute)) = best else {
        debug!("no admissible terminal state; returning empty route");
        return SolveResult::empty();
    };

    let mut indices = Vec::new();
    let mut cur_mask = mask;
    let mut cur_last = last;
    loop {
        indices.push(cur_last);
        match tables.parent[tables.index(cur_mask, cur_last)] {
            Parent::Start => break,
            Parent::From { mask: prev_mask, last: prev_last } => {
                cur_mask = prev_mask as usize;
                cur_last = prev_last as usize;
            }
            Parent::Unset => unreachable!("a state with a finite dp value always has a recorded parent"),
        }
    }
    indices.reverse();

    let route: Vec<String> = indices.iter().map(|&i| instance.checkpoint_names[i].clone()).collect();
    debug!(count = route.len(), finish_minute, "solve complete");
    SolveResult {
        count: route.len(),
        route,
        finish_minute: Some(finish_minute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::geo::build_travel_time_matrix;
    use crate::types::instance::{DistanceRecord, Instance};

    fn record(km: f64) -> DistanceRecord {
        DistanceRecord { km, height_gain_m: 0.0 }
    }

    /// S1 — trivial single checkpoint, visited and finished comfortably inside the window.
    fn s1_instance() -> Instance {
        Instance::new(
            vec!["CP0".into()],
            vec![600],
            vec![vec![true]],
            vec![true],
            vec![
                vec![record(0.0), record(10.0), record(0.0)],
                vec![record(10.0), record(0.0), record(10.0)],
                vec![record(0.0), record(10.0), record(0.0)],
            ],
            600,
            1020,
        )
        .unwrap()
    }

    fn config_1kmh_10min() -> SolverConfig {
        // distance * 60 / speed == distance when speed == 60 km/h... instead
        // fix speed so that km==minutes directly: speed = 60 km/h doubles it,
        // so use speed 60.0 with naismith irrelevant (no ascent anywhere).
        SolverConfig { speed_kmh: 60.0, dwell_minutes: 7.0, ..SolverConfig::default() }
    }

    #[test]
    fn test_s1_trivial_single_checkpoint() {
        let instance = s1_instance();
        let config = config_1kmh_10min();
        let travel_time = build_travel_time_matrix(&instance, &config);
        let result = solve(&instance, &travel_time, &config);
        assert_eq!(result.count, 1);
        assert_eq!(result.route, vec!["CP0".to_string()]);
        assert_eq!(result.finish_minute, Some(627.0));
    }

    #[test]
    fn test_s2_closed_checkpoint_forces_wait() {
        let instance = Instance::new(
            vec!["CP0".into()],
            vec![600, 630],
            vec![vec![false, true]],
            vec![true, true],
            vec![
                vec![record(0.0), record(10.0), record(0.0)],
                vec![record(10.0), record(0.0), record(10.0)],
                vec![record(0.0), record(10.0), record(0.0)],
            ],
            600,
            1020,
        )
        .unwrap();
        let config = config_1kmh_10min();
        let travel_time = build_travel_time_matrix(&instance, &config);
        let result = solve(&instance, &travel_time, &config);
        assert_eq!(result.count, 1);
        assert_eq!(result.finish_minute, Some(647.0));
    }

    #[test]
    fn test_s5_infeasible_window_returns_empty() {
        let mut instance = s1_instance();
        instance.end_minute = instance.start_minute + 1;
        let config = config_1kmh_10min();
        let travel_time = build_travel_time_matrix(&instance, &config);
        let result = solve(&instance, &travel_time, &config);
        assert_eq!(result, SolveResult::empty());
    }

    #[test]
    fn test_s3_order_matters() {
        // A only open in slot 0, B only open in slot 1; A->B feasible, B->A
        // arrives back too late for A's single slot.
        let instance = Instance::new(
            vec!["A".into(), "B".into()],
            vec![600, 660],
            vec![vec![true, false], vec![false, true]],
            vec![true, true],
            vec![
                vec![record(0.0), record(20.0), record(5.0), record(50.0)],
                vec![record(40.0), record(0.0), record(5.0), record(5.0)],
                vec![record(5.0), record(50.0), record(0.0), record(5.0)],
                vec![record(5.0), record(5.0), record(5.0), record(0.0)],
            ],
            600,
            800,
        )
        .unwrap();
        let config = config_1kmh_10min();
        let travel_time = build_travel_time_matrix(&instance, &config);
        let result = solve(&instance, &travel_time, &config);
        assert_eq!(result.route, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_bucketed_matches_full_enumeration() {
        let instance = s1_instance();
        let config = config_1kmh_10min();
        let travel_time = build_travel_time_matrix(&instance, &config);
        let bucketed = solve(&instance, &travel_time, &config);
        let full = solve_full_enumeration(&instance, &travel_time, &config);
        assert_eq!(bucketed, full);
    }
}
