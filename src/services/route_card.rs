//! Route-card replay (C4): walk a solved route forward, second-by-second,
//! to produce a per-leg arrival/wait/depart record for display.

use crate::config::SolverConfig;
use crate::services::geo::leg_travel_minutes;
use crate::services::slot_clock::SlotClock;
use crate::types::instance::Instance;
use crate::types::solution::RouteCardLeg;

/// Replay `route` (an ordered list of intermediate checkpoint names) and
/// produce one [`RouteCardLeg`] per hop, including the legs into and out of
/// Start/Finish.
///
/// The last leg's `depart_minute` must equal the DP's stored departure time
/// for the solved terminal state, and the Finish leg's `arrival_minute` must
/// equal the DP-selected finish time; §8 property 4 is exercised against
/// this function directly in the integration tests.
pub fn build_route_card(instance: &Instance, route: &[String], config: &SolverConfig) -> Vec<RouteCardLeg> {
    let clock = SlotClock::new(&instance.slot_starts);
    let start_index = instance.start_index();
    let finish_index = instance.finish_index();

    let name_index: std::collections::HashMap<&str, usize> = instance
        .checkpoint_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut nodes = Vec::with_capacity(route.len() + 2);
    nodes.push(start_index);
    nodes.extend(route.iter().map(|name| name_index[name.as_str()]));
    nodes.push(finish_index);

    let start_minute = instance.start_minute as f64;
    let mut depart = start_minute;
    let mut legs = Vec::with_capacity(nodes.len() - 1);

    for (leg_number, pair) in nodes.windows(2).enumerate() {
        let (from_index, to_index) = (pair[0], pair[1]);
        let record = &instance.distances[from_index][to_index];
        let travel_min = leg_travel_minutes(record, config);
        let arrival = depart + travel_min;

        let open_rows_target: &[bool] = if to_index == finish_index {
            &instance.finish_open
        } else {
            &instance.open[to_index]
        };
        let dwell = if to_index == finish_index { 0.0 } else { config.dwell_minutes };

        let (is_open, wait_min, next_depart) = match clock.find_next_open_time(arrival, open_rows_target) {
            Some(open_at) => (true, open_at - arrival, open_at + dwell),
            None => (false, 0.0, arrival + dwell),
        };

        let slot_index = clock.arrival_to_slot_index(arrival);
        let time_slot_minute = if slot_index >= 0 {
            Some(instance.slot_starts[slot_index as usize])
        } else {
            None
        };

        legs.push(RouteCardLeg {
            leg: leg_number + 1,
            from: instance.node_name(from_index).to_string(),
            to: instance.node_name(to_index).to_string(),
            distance_km: record.km,
            height_gain_m: record.height_gain_m,
            travel_min,
            arrival_minute: arrival,
            depart_minute: next_depart,
            time_slot_minute,
            is_open,
            wait_min,
            cumulative_min: next_depart - start_minute,
        });

        depart = next_depart;
    }

    legs
}
