//! The reachability oracle (C2): a pure pruning predicate deciding whether
//! Finish can still be reached, in an open Finish slot, by the deadline.

use crate::services::slot_clock::SlotClock;

/// `true` iff departing `at_node` at `depart_time` can still reach Finish
/// within an open Finish slot at or before `end_minute`.
pub fn can_reach_finish(
    depart_time: f64,
    at_node: usize,
    finish_index: usize,
    travel_time: &[Vec<f64>],
    clock: &SlotClock,
    finish_open: &[bool],
    end_minute: f64,
) -> bool {
    let finish_arrival = depart_time + travel_time[at_node][finish_index];
    if finish_arrival > end_minute {
        return false;
    }
    match clock.find_next_open_time(finish_arrival, finish_open) {
        Some(wait_until) => wait_until <= end_minute,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(finish_travel: f64) -> Vec<Vec<f64>> {
        vec![vec![0.0, finish_travel], vec![finish_travel, 0.0]]
    }

    #[test]
    fn test_rejects_arrival_past_deadline() {
        let clock = SlotClock::new(&[600, 630]);
        let finish_open = [true, true];
        assert!(!can_reach_finish(600.0, 0, 1, &matrix(1000.0), &clock, &finish_open, 900.0));
    }

    #[test]
    fn test_accepts_when_finish_open_immediately() {
        let clock = SlotClock::new(&[600, 630]);
        let finish_open = [true, true];
        assert!(can_reach_finish(600.0, 0, 1, &matrix(10.0), &clock, &finish_open, 900.0));
    }

    #[test]
    fn test_rejects_when_finish_never_open() {
        let clock = SlotClock::new(&[600, 630]);
        let finish_open = [false, false];
        assert!(!can_reach_finish(600.0, 0, 1, &matrix(10.0), &clock, &finish_open, 900.0));
    }

    #[test]
    fn test_rejects_when_wait_for_open_slot_exceeds_deadline() {
        let clock = SlotClock::new(&[600, 630, 900]);
        let finish_open = [false, false, true];
        assert!(!can_reach_finish(600.0, 0, 1, &matrix(5.0), &clock, &finish_open, 800.0));
    }
}
